//! Typed request and response shapes for the open API endpoints
//!
//! All JSON field names are camelCase on the wire.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Page selector shared by the list endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    pub page: i64,
    pub page_size: i64,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
        }
    }
}

/// A space: a named container for files with a visibility flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceInfo {
    pub name: String,
    pub public: bool,
    /// Unix seconds
    pub created_at: i64,
    pub file_count: i64,
}

/// A file stored inside a space.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    pub name: String,
    pub byte_size: i64,
    /// Human-readable rendering of `byte_size`
    pub size: String,
    /// Unix seconds
    pub uploaded_at: i64,
    /// Access URL; private spaces additionally need a ticket appended
    pub url: String,
}

/// Parameters for creating a space
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpaceRequest {
    pub space: String,
    pub public: bool,
}

/// Parameters for deleting a space
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSpaceRequest {
    pub space: String,
}

/// Parameters for switching a space between public and private
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleSpaceVisibilityRequest {
    pub space: String,
    pub public: bool,
}

/// Parameters for listing the files of a space
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileListParams {
    #[serde(flatten)]
    pub pagination: PaginationParams,
    pub space: String,
}

/// Parameters for requesting a file access ticket
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAccessTicketRequest {
    pub filename: String,
    pub space: String,
}

/// Payload of a successful ticket request
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketPayload {
    /// Short-lived credential to append to a private file URL
    pub ticket: String,
}

/// Parameters for deleting files from a space
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFilesRequest {
    pub filename_list: Vec<String>,
    pub space: String,
}

/// Upload input. `content` travels as the multipart file part, the space
/// name as an ordinary form field.
#[derive(Clone, Debug)]
pub struct UploadFileRequest {
    pub space: String,
    pub filename: String,
    pub content: Bytes,
}

impl UploadFileRequest {
    pub fn new(
        space: impl Into<String>,
        filename: impl Into<String>,
        content: impl Into<Bytes>,
    ) -> Self {
        Self {
            space: space.into(),
            filename: filename.into(),
            content: content.into(),
        }
    }
}
