//! HTTP transport
//!
//! Two operations: a single-shot JSON request and a multipart form upload.
//! Both hand back the raw status and body for any HTTP response the server
//! produces; 4xx/5xx are envelope content for the caller to interpret, not
//! transport failures. Errors are reserved for connection-level trouble.

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, StatusCode, Url};
use tracing::debug;

use stardots_auth::SignedHeaders;

use crate::{ClientError, MultipartForm, Result};

/// Default per-call timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Thin wrapper around a pooled [`reqwest::Client`].
///
/// Connection reuse, TLS, and DNS are the HTTP stack's concern; this layer
/// only attaches the signed headers and shapes the body.
pub struct Transport {
    http: Client,
}

impl Transport {
    /// Build the underlying HTTP client. `timeout` applies to every call
    /// unless a call overrides it.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent).map_err(|e| ClientError::Encoding(e.to_string()))?,
        );

        let http = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(ClientError::Network)?;

        Ok(Self { http })
    }

    /// Send a JSON request. `body` goes out verbatim when present.
    pub async fn send_json(
        &self,
        method: Method,
        url: Url,
        body: Option<Bytes>,
        signed: &SignedHeaders,
        timeout: Option<Duration>,
    ) -> Result<(StatusCode, Bytes)> {
        let mut req = self
            .http
            .request(method.clone(), url.clone())
            .headers(signed_header_map(signed)?)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);

        if let Some(timeout) = timeout {
            req = req.timeout(timeout);
        }
        if let Some(body) = body {
            req = req.body(body);
        }

        debug!(%method, %url, "sending json request");
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        Ok((status, bytes))
    }

    /// Send a multipart/form-data request with a pre-serialized form.
    pub async fn send_multipart(
        &self,
        method: Method,
        url: Url,
        form: &MultipartForm,
        signed: &SignedHeaders,
        timeout: Option<Duration>,
    ) -> Result<(StatusCode, Bytes)> {
        let mut req = self
            .http
            .request(method.clone(), url.clone())
            .headers(signed_header_map(signed)?)
            .header(CONTENT_TYPE, form.content_type())
            .body(form.to_body());

        if let Some(timeout) = timeout {
            req = req.timeout(timeout);
        }

        debug!(%method, %url, boundary = form.boundary(), "sending multipart request");
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        Ok((status, bytes))
    }
}

fn signed_header_map(signed: &SignedHeaders) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, value) in signed.header_pairs() {
        map.insert(
            HeaderName::from_static(name),
            HeaderValue::from_str(value).map_err(|e| ClientError::Encoding(e.to_string()))?,
        );
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stardots_auth::{sign, Credentials};

    #[test]
    fn test_signed_header_map_carries_all_five() {
        let signed = sign(&Credentials::new("key", "secret"));
        let map = signed_header_map(&signed).unwrap();

        assert_eq!(map.len(), 5);
        for name in [
            "x-stardots-timestamp",
            "x-stardots-nonce",
            "x-stardots-key",
            "x-stardots-sign",
            "x-stardots-extra",
        ] {
            assert!(map.contains_key(name), "missing header {}", name);
        }
        assert_eq!(map["x-stardots-key"], "key");
    }

    #[test]
    fn test_control_characters_in_credentials_are_rejected() {
        let signed = sign(&Credentials::new("bad\nkey", "secret"));
        let err = signed_header_map(&signed).unwrap_err();
        assert!(matches!(err, ClientError::Encoding(_)));
    }
}
