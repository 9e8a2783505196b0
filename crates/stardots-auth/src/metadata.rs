//! SDK identification metadata
//!
//! The `x-stardots-extra` header carries a small JSON object telling the
//! server which SDK build produced a request. None of it is secret.

use serde::{Deserialize, Serialize};

/// Implementation language reported to the server
pub const SDK_LANGUAGE: &str = "rust";

/// Published SDK version, shared across the workspace
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Payload of the `x-stardots-extra` header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkMetadata {
    /// Always the literal string `"true"`
    pub sdk: String,
    pub language: String,
    pub version: String,
    pub os: String,
    pub arch: String,
}

impl SdkMetadata {
    /// Metadata describing the running SDK build
    pub fn current() -> Self {
        Self {
            sdk: "true".to_string(),
            language: SDK_LANGUAGE.to_string(),
            version: SDK_VERSION.to_string(),
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
        }
    }

    /// Compact JSON rendering used as the header value.
    pub fn to_json(&self) -> String {
        // A flat struct of strings cannot fail to serialize.
        serde_json::to_string(self).unwrap_or_default()
    }
}
