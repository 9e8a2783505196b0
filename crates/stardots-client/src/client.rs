//! Main client implementation

use bytes::Bytes;
use reqwest::{Method, StatusCode, Url};
use tracing::{debug, instrument};

use stardots_auth::sign;

use crate::envelope::encode_request_body;
use crate::types::*;
use crate::{ApiResult, ClientError, Config, Envelope, MultipartForm, Result, Transport};

/// StarDots API client
///
/// Holds the immutable configuration and a pooled HTTP client; safe to
/// share across tasks and to call concurrently.
pub struct StardotsClient {
    config: Config,
    transport: Transport,
}

impl StardotsClient {
    /// Create a new client with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let transport = Transport::new(config.timeout, &config.user_agent)?;
        Ok(Self { config, transport })
    }

    /// Create a client for the public endpoint
    pub fn with_credentials(
        client_key: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self> {
        Self::new(Config::new(client_key, client_secret))
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // ==================== Space Operations ====================

    /// List spaces, paginated
    #[instrument(skip(self))]
    pub async fn space_list(
        &self,
        params: &PaginationParams,
    ) -> Result<ApiResult<Vec<SpaceInfo>>> {
        let url = self.url_with_query(
            "/openapi/space/list",
            &[
                ("page", params.page.to_string()),
                ("pageSize", params.page_size.to_string()),
            ],
        )?;
        let envelope = self.send_json(Method::GET, url, None).await?;
        envelope.narrow()
    }

    /// Create a space
    #[instrument(skip(self))]
    pub async fn create_space(&self, req: &CreateSpaceRequest) -> Result<Envelope> {
        let url = self.url("/openapi/space/create")?;
        self.send_json(Method::PUT, url, Some(encode_request_body(req)?))
            .await
    }

    /// Delete a space
    #[instrument(skip(self))]
    pub async fn delete_space(&self, req: &DeleteSpaceRequest) -> Result<Envelope> {
        let url = self.url("/openapi/space/delete")?;
        self.send_json(Method::DELETE, url, Some(encode_request_body(req)?))
            .await
    }

    /// Switch a space between public and private
    #[instrument(skip(self))]
    pub async fn toggle_space_visibility(
        &self,
        req: &ToggleSpaceVisibilityRequest,
    ) -> Result<Envelope> {
        let url = self.url("/openapi/space/accessibility/toggle")?;
        self.send_json(Method::POST, url, Some(encode_request_body(req)?))
            .await
    }

    // ==================== File Operations ====================

    /// List the files of a space, paginated
    #[instrument(skip(self))]
    pub async fn file_list(&self, params: &FileListParams) -> Result<ApiResult<Vec<FileInfo>>> {
        let url = self.url_with_query(
            "/openapi/file/list",
            &[
                ("page", params.pagination.page.to_string()),
                ("pageSize", params.pagination.page_size.to_string()),
                ("space", params.space.clone()),
            ],
        )?;
        let envelope = self.send_json(Method::GET, url, None).await?;
        envelope.narrow()
    }

    /// Issue a short-lived access ticket for a file in a private space
    #[instrument(skip(self))]
    pub async fn file_access_ticket(
        &self,
        req: &FileAccessTicketRequest,
    ) -> Result<ApiResult<TicketPayload>> {
        let url = self.url("/openapi/file/ticket")?;
        let envelope = self
            .send_json(Method::POST, url, Some(encode_request_body(req)?))
            .await?;
        envelope.narrow()
    }

    /// Upload a file into a space
    #[instrument(skip(self, req), fields(space = %req.space, filename = %req.filename))]
    pub async fn upload_file(&self, req: &UploadFileRequest) -> Result<ApiResult<FileInfo>> {
        let url = self.url("/openapi/file/upload")?;
        let form = MultipartForm::new()
            .text("space", req.space.clone())
            .file(req.filename.clone(), req.content.clone());

        let signed = sign(&self.config.credentials);
        let (status, bytes) = self
            .transport
            .send_multipart(Method::PUT, url, &form, &signed, None)
            .await?;
        decode(status, &bytes)?.narrow()
    }

    /// Delete files from a space
    #[instrument(skip(self))]
    pub async fn delete_files(&self, req: &DeleteFilesRequest) -> Result<Envelope> {
        let url = self.url("/openapi/file/delete")?;
        self.send_json(Method::DELETE, url, Some(encode_request_body(req)?))
            .await
    }

    // ==================== Helper Methods ====================

    fn url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.config.endpoint, path))?)
    }

    fn url_with_query(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
        let mut url = self.url(path)?;
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        Ok(url)
    }

    async fn send_json(&self, method: Method, url: Url, body: Option<Bytes>) -> Result<Envelope> {
        let signed = sign(&self.config.credentials);
        let (status, bytes) = self
            .transport
            .send_json(method, url, body, &signed, None)
            .await?;
        decode(status, &bytes)
    }
}

/// Decode the raw transport outcome into the common envelope.
///
/// The HTTP status never becomes an error on its own: business failures
/// come back as `success=false` envelopes for the caller to inspect.
fn decode(status: StatusCode, bytes: &Bytes) -> Result<Envelope> {
    if bytes.is_empty() {
        return Err(ClientError::InvalidResponse(format!(
            "empty response body (http status {})",
            status.as_u16()
        )));
    }

    let envelope = Envelope::decode(bytes)?;
    debug!(
        status = status.as_u16(),
        code = envelope.code,
        success = envelope.success,
        request_id = %envelope.request_id,
        "decoded response envelope"
    );
    Ok(envelope)
}
