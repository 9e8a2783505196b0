//! Multipart/form-data body construction
//!
//! The upload endpoint takes a classic multipart form: text fields first,
//! then a single file part named `file`. The server is strict about part
//! framing, so the body is assembled here byte-for-byte instead of going
//! through an HTTP-library form API; the transport only ships the result.

use bytes::{BufMut, Bytes, BytesMut};
use uuid::Uuid;

/// A multipart/form-data request body.
///
/// Parts serialize in insertion order: every text field, then the optional
/// file part, then the closing delimiter.
#[derive(Clone, Debug)]
pub struct MultipartForm {
    boundary: String,
    fields: Vec<(String, String)>,
    file: Option<FilePart>,
}

#[derive(Clone, Debug)]
struct FilePart {
    file_name: String,
    content: Bytes,
}

impl MultipartForm {
    /// Create a form with a fresh UUID-derived boundary.
    pub fn new() -> Self {
        Self::with_boundary(Uuid::new_v4().simple().to_string())
    }

    /// Create a form with a caller-chosen boundary, for byte-exact
    /// assertions in tests.
    pub fn with_boundary(boundary: impl Into<String>) -> Self {
        Self {
            boundary: boundary.into(),
            fields: Vec::new(),
            file: None,
        }
    }

    /// Append a text field.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Attach the file part. The field name on the wire is always `file`.
    pub fn file(mut self, file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        self.file = Some(FilePart {
            file_name: file_name.into(),
            content: content.into(),
        });
        self
    }

    /// The boundary token separating parts.
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Value for the request `Content-Type` header.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Serialize the whole body.
    pub fn to_body(&self) -> Bytes {
        let mut body = BytesMut::new();

        for (name, value) in &self.fields {
            body.put_slice(format!("--{}\r\n", self.boundary).as_bytes());
            body.put_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
            );
            body.put_slice(value.as_bytes());
            body.put_slice(b"\r\n");
        }

        if let Some(file) = &self.file {
            body.put_slice(format!("--{}\r\n", self.boundary).as_bytes());
            body.put_slice(
                format!(
                    "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
                    file.file_name
                )
                .as_bytes(),
            );
            body.put_slice(b"Content-Type: application/octet-stream\r\n\r\n");
            body.put_slice(&file.content);
            body.put_slice(b"\r\n");
        }

        body.put_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        body.freeze()
    }
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}
