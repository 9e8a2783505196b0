//! # StarDots Client SDK
//!
//! A client SDK for the StarDots object-storage API: named spaces holding
//! files, with signed requests and a uniform JSON response envelope.
//!
//! ## Features
//!
//! - **Typed endpoints**: spaces (list/create/delete/toggle visibility) and
//!   files (list/upload/delete/access tickets)
//! - **Per-request signing**: timestamp, nonce, and MD5 signature headers
//!   derived from the client credentials on every call
//! - **Two-tier errors**: connection and codec failures are `Err`; business
//!   failures arrive as decoded envelopes with `success == false`
//!
//! ## Example
//!
//! ```rust,ignore
//! use stardots_client::{StardotsClient, CreateSpaceRequest, PaginationParams};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = StardotsClient::with_credentials("client-key", "client-secret")?;
//!
//!     // Create a public space
//!     let resp = client
//!         .create_space(&CreateSpaceRequest {
//!             space: "my-space".to_string(),
//!             public: true,
//!         })
//!         .await?;
//!     println!("created: {} ({})", resp.success, resp.message);
//!
//!     // List spaces
//!     let spaces = client.space_list(&PaginationParams::default()).await?;
//!     for space in spaces.data.unwrap_or_default() {
//!         println!("{} public={}", space.name, space.public);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod envelope;
mod error;
mod multipart;
mod transport;
mod types;

pub use client::StardotsClient;
pub use config::{Config, DEFAULT_ENDPOINT};
pub use envelope::{encode_request_body, ApiResult, Envelope};
pub use error::{ClientError, Result};
pub use multipart::MultipartForm;
pub use transport::{Transport, DEFAULT_TIMEOUT};
pub use types::*;

// Re-export signing types for callers that work with credentials directly
pub use stardots_auth::{Credentials, SdkMetadata, SignedHeaders};
