//! Upload a file and fetch an access ticket for it
//!
//! Run with: cargo run --example upload_file
//!
//! Set STARDOTS_KEY and STARDOTS_SECRET to your console credentials first.

use bytes::Bytes;
use stardots_client::{
    FileAccessTicketRequest, FileListParams, PaginationParams, StardotsClient, UploadFileRequest,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let key = std::env::var("STARDOTS_KEY").unwrap_or_default();
    let secret = std::env::var("STARDOTS_SECRET").unwrap_or_default();
    let client = StardotsClient::with_credentials(key, secret)?;

    let space = "sdk-demo";

    println!("📤 Uploading 'hello.txt' into '{}'...", space);
    let content = Bytes::from_static(b"Hello from the StarDots Rust SDK!");
    let uploaded = client
        .upload_file(&UploadFileRequest::new(space, "hello.txt", content))
        .await?;
    match (&uploaded.data, uploaded.success) {
        (Some(file), true) => println!("   ✅ {} ({}) -> {}", file.name, file.size, file.url),
        _ => println!("   ⚠️  {} (code {})", uploaded.message, uploaded.code),
    }

    println!("\n📋 Files in '{}':", space);
    let files = client
        .file_list(&FileListParams {
            pagination: PaginationParams::default(),
            space: space.to_string(),
        })
        .await?;
    for file in files.data.unwrap_or_default() {
        println!("   - {} {} uploaded_at={}", file.name, file.size, file.uploaded_at);
    }

    println!("\n🎫 Requesting access ticket for 'hello.txt'...");
    let ticket = client
        .file_access_ticket(&FileAccessTicketRequest {
            filename: "hello.txt".to_string(),
            space: space.to_string(),
        })
        .await?;
    if let Some(payload) = ticket.data {
        println!("   ticket: {}", payload.ticket);
    } else {
        println!("   ⚠️  {} (code {})", ticket.message, ticket.code);
    }

    Ok(())
}
