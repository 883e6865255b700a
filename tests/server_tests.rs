//! HTTP host tests, driving the axum router in-process

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use bytes::Bytes;
use scribe_relay::application::TranscribeUploadUseCase;
use scribe_relay::domain::config::HandlerConfig;
use scribe_relay::infrastructure::http::{router, AppState, TRANSCRIBE_PATHS};
use scribe_relay::infrastructure::{MulterUploadDecoder, OpenAiTranscriber};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{content_type, single_file_body};

fn app(server: &MockServer, config: HandlerConfig) -> Router {
    let use_case = TranscribeUploadUseCase::new(
        MulterUploadDecoder::new(),
        OpenAiTranscriber::with_base_url(format!("{}/v1", server.uri()), "whisper-1"),
    );
    router(AppState::new(use_case, config))
}

fn upload(path: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, content_type())
        .body(Body::from(body))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn transcribes_on_both_paths() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "text": "over http" }))
                .insert_header("x-request-id", "req_http"),
        )
        .expect(2)
        .mount(&server)
        .await;

    for path in TRANSCRIBE_PATHS {
        let app = app(&server, HandlerConfig::with_api_key("sk-test"));
        let response = app
            .oneshot(upload(path, single_file_body(b"audio")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{}", path);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        assert_eq!(
            json_body(response).await,
            json!({ "text": "over http", "requestId": "req_http" })
        );
    }
}

#[tokio::test]
async fn get_is_method_not_allowed() {
    let server = MockServer::start().await;
    let response = app(&server, HandlerConfig::with_api_key("sk-test"))
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/transcribe")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers()[header::ALLOW], "POST");
    assert_eq!(json_body(response).await, json!({ "error": "Method not allowed." }));
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let server = MockServer::start().await;
    let response = app(&server, HandlerConfig::with_api_key("sk-test"))
        .oneshot(upload("/other", single_file_body(b"audio")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn body_over_host_cap_is_payload_too_large() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = HandlerConfig::with_api_key("sk-test").upload_limit_mb(1.0);
    let audio = vec![7u8; 3 * 1024 * 1024];

    let response = app(&server, config)
        .oneshot(upload("/transcribe", single_file_body(&audio)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(
        json_body(response).await,
        json!({ "error": "Audio file exceeds the 1 MB limit." })
    );
}

#[tokio::test]
async fn missing_credential_over_http() {
    let server = MockServer::start().await;
    let response = app(&server, HandlerConfig::default())
        .oneshot(upload("/transcribe", single_file_body(b"audio")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await,
        json!({ "error": "Missing OPENAI_API_KEY environment variable." })
    );
}

#[tokio::test]
async fn upstream_status_is_passed_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "error": { "message": "Incorrect API key provided" } })),
        )
        .mount(&server)
        .await;

    let response = app(&server, HandlerConfig::with_api_key("sk-wrong"))
        .oneshot(upload("/.netlify/functions/transcribe", single_file_body(b"a")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        json_body(response).await,
        json!({ "error": "Incorrect API key provided" })
    );
}

#[tokio::test]
async fn empty_post_is_missing_body() {
    let server = MockServer::start().await;
    let response = app(&server, HandlerConfig::with_api_key("sk-test"))
        .oneshot(upload("/transcribe", Vec::new()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await, json!({ "error": "Missing request body." }));
}

#[tokio::test]
async fn interrupted_body_is_bad_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let chunks: Vec<Result<Bytes, std::io::Error>> = vec![
        Ok(Bytes::from_static(b"--b\r\n")),
        Err(std::io::Error::other("client reset")),
    ];
    let request = Request::builder()
        .method(Method::POST)
        .uri("/transcribe")
        .header(header::CONTENT_TYPE, content_type())
        .body(Body::from_stream(futures_util::stream::iter(chunks)))
        .unwrap();

    let response = app(&server, HandlerConfig::with_api_key("sk-test"))
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = json_body(response).await["error"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    assert!(error.starts_with("Invalid request body"), "{}", error);
    assert!(error.contains("client reset"), "{}", error);
}
