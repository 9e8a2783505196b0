//! End-to-end SDK tests: signing and client together against a mock server
//!
//! The mock verifies requests the way the real server does: it recomputes
//! the MD5 digest from the timestamp and nonce headers and only answers
//! when the signature checks out.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use stardots_auth::signature_digest;
use stardots_client::{
    Config, CreateSpaceRequest, DeleteFilesRequest, DeleteSpaceRequest, PaginationParams,
    StardotsClient, UploadFileRequest,
};

const CLIENT_KEY: &str = "itest-key";
const CLIENT_SECRET: &str = "itest-secret";

/// Matches only requests whose `x-stardots-sign` header verifies under the
/// documented formula for our secret.
struct ValidSignature;

impl wiremock::Match for ValidSignature {
    fn matches(&self, request: &Request) -> bool {
        let header = |name: &str| {
            request
                .headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };

        match (
            header("x-stardots-timestamp"),
            header("x-stardots-nonce"),
            header("x-stardots-key"),
            header("x-stardots-sign"),
        ) {
            (Some(ts), Some(nonce), Some(key), Some(sign)) => {
                key == CLIENT_KEY && sign == signature_digest(&ts, CLIENT_SECRET, &nonce)
            }
            _ => false,
        }
    }
}

fn envelope(code: i64, success: bool, data: serde_json::Value) -> serde_json::Value {
    json!({
        "code": code,
        "message": if success { "ok" } else { "failed" },
        "requestId": "it-req",
        "success": success,
        "timestamp": 1714896000i64,
        "data": data,
    })
}

async fn mock_endpoint(server: &MockServer, http_method: &str, route: &str) {
    Mock::given(method(http_method))
        .and(path(route))
        .and(ValidSignature)
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(0, true, json!(null))))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_space_and_file_lifecycle_with_verified_signatures() {
    let server = MockServer::start().await;

    mock_endpoint(&server, "PUT", "/openapi/space/create").await;
    mock_endpoint(&server, "PUT", "/openapi/file/upload").await;
    mock_endpoint(&server, "DELETE", "/openapi/file/delete").await;
    mock_endpoint(&server, "DELETE", "/openapi/space/delete").await;

    let client =
        StardotsClient::new(Config::new(CLIENT_KEY, CLIENT_SECRET).with_endpoint(server.uri()))
            .unwrap();

    let created = client
        .create_space(&CreateSpaceRequest {
            space: "itest".to_string(),
            public: false,
        })
        .await
        .unwrap();
    assert!(created.success);

    let uploaded = client
        .upload_file(&UploadFileRequest::new("itest", "note.txt", &b"contents"[..]))
        .await
        .unwrap();
    assert!(uploaded.success);
    assert!(uploaded.data.is_none());

    let deleted = client
        .delete_files(&DeleteFilesRequest {
            filename_list: vec!["note.txt".to_string()],
            space: "itest".to_string(),
        })
        .await
        .unwrap();
    assert!(deleted.success);

    let dropped = client
        .delete_space(&DeleteSpaceRequest {
            space: "itest".to_string(),
        })
        .await
        .unwrap();
    assert!(dropped.success);
}

#[tokio::test]
async fn test_tampered_secret_fails_signature_check() {
    let server = MockServer::start().await;

    // Only correctly signed requests get an answer; everything else falls
    // through to wiremock's default 404 with an empty body.
    Mock::given(method("GET"))
        .and(path("/openapi/space/list"))
        .and(ValidSignature)
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(0, true, json!([]))))
        .mount(&server)
        .await;

    let good =
        StardotsClient::new(Config::new(CLIENT_KEY, CLIENT_SECRET).with_endpoint(server.uri()))
            .unwrap();
    assert!(good
        .space_list(&PaginationParams::default())
        .await
        .unwrap()
        .success);

    let bad = StardotsClient::new(
        Config::new(CLIENT_KEY, "wrong-secret").with_endpoint(server.uri()),
    )
    .unwrap();
    assert!(bad.space_list(&PaginationParams::default()).await.is_err());
}
