//! Basic usage of the StarDots SDK
//!
//! This demo walks the space lifecycle:
//! - Creating a space
//! - Listing spaces
//! - Toggling visibility
//! - Deleting the space
//!
//! Run with: cargo run --example basic_usage
//!
//! Set STARDOTS_KEY and STARDOTS_SECRET to your console credentials first.

use stardots_client::{
    CreateSpaceRequest, DeleteSpaceRequest, PaginationParams, StardotsClient,
    ToggleSpaceVisibilityRequest,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let key = std::env::var("STARDOTS_KEY").unwrap_or_default();
    let secret = std::env::var("STARDOTS_SECRET").unwrap_or_default();
    let client = StardotsClient::with_credentials(key, secret)?;

    println!("🚀 StarDots SDK - Basic Usage\n");

    println!("📦 Creating space 'sdk-demo'...");
    let resp = client
        .create_space(&CreateSpaceRequest {
            space: "sdk-demo".to_string(),
            public: false,
        })
        .await?;
    if resp.success {
        println!("   ✅ Space created (request {})", resp.request_id);
    } else {
        println!("   ⚠️  {} (code {})", resp.message, resp.code);
    }

    println!("\n📋 Listing spaces...");
    let spaces = client.space_list(&PaginationParams::default()).await?;
    for space in spaces.data.unwrap_or_default() {
        println!(
            "   - {} public={} files={}",
            space.name, space.public, space.file_count
        );
    }

    println!("\n🔓 Making 'sdk-demo' public...");
    let resp = client
        .toggle_space_visibility(&ToggleSpaceVisibilityRequest {
            space: "sdk-demo".to_string(),
            public: true,
        })
        .await?;
    println!("   success={} message={}", resp.success, resp.message);

    println!("\n🗑 Deleting space 'sdk-demo'...");
    let resp = client
        .delete_space(&DeleteSpaceRequest {
            space: "sdk-demo".to_string(),
        })
        .await?;
    println!("   success={} message={}", resp.success, resp.message);

    Ok(())
}
