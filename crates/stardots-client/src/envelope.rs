//! Common response envelope and outbound body codec
//!
//! Every response from the API, success or failure, decodes into the same
//! top-level wrapper. The `data` member has no fixed schema; each endpoint
//! narrows it into its own typed payload after decoding.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ClientError, Result};

/// The uniform top-level wrapper returned by every remote operation.
///
/// Constructed only by decoding a server response body, never for outbound
/// use. `code` and `success` carry the business outcome even when the HTTP
/// status is 4xx/5xx.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub code: i64,
    pub message: String,
    pub request_id: String,
    pub success: bool,
    pub timestamp: i64,
    /// Free-form payload; shape depends on the endpoint
    #[serde(default)]
    pub data: Option<Value>,
}

impl Envelope {
    /// Decode response bytes into the common wrapper.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| ClientError::Decoding(e.to_string()))
    }

    /// Narrow the free-form `data` member into an endpoint's typed payload.
    ///
    /// A missing or null `data` narrows to `None`; a present value of the
    /// wrong shape fails loudly.
    pub fn narrow<T: DeserializeOwned>(self) -> Result<ApiResult<T>> {
        let data = match self.data {
            None | Some(Value::Null) => None,
            Some(value) => Some(
                serde_json::from_value(value).map_err(|e| ClientError::Decoding(e.to_string()))?,
            ),
        };

        Ok(ApiResult {
            code: self.code,
            message: self.message,
            request_id: self.request_id,
            success: self.success,
            timestamp: self.timestamp,
            data,
        })
    }
}

/// An [`Envelope`] whose `data` has been narrowed to one endpoint's payload.
#[derive(Clone, Debug)]
pub struct ApiResult<T> {
    pub code: i64,
    pub message: String,
    pub request_id: String,
    pub success: bool,
    pub timestamp: i64,
    /// Absent when the server sent no payload, e.g. on business failure
    pub data: Option<T>,
}

/// Serialize an outbound request body to JSON bytes.
///
/// The fixed, flat request shapes cannot fail to serialize; the error path
/// exists for completeness of the contract.
pub fn encode_request_body<T: Serialize>(params: &T) -> Result<Bytes> {
    serde_json::to_vec(params)
        .map(Bytes::from)
        .map_err(|e| ClientError::Encoding(e.to_string()))
}
