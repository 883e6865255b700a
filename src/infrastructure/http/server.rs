//! axum host for the request handler.
//!
//! Converts each HTTP request into an [`InboundRequest`] the way an API
//! gateway would (binary body, base64-encoded) and turns the resulting
//! [`OutboundResponse`] back into an HTTP response.

use std::error::Error as StdError;
use std::future::Future;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode},
    response::Response,
    routing::any,
    Router,
};
use http_body_util::LengthLimitError;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::application::TranscribeUploadUseCase;
use crate::domain::config::HandlerConfig;
use crate::domain::error::RequestError;
use crate::domain::invocation::{InboundRequest, OutboundResponse};
use crate::infrastructure::multipart::MulterUploadDecoder;
use crate::infrastructure::transcription::OpenAiTranscriber;

/// Slack allowed on top of the upload limit for multipart framing and text fields
pub const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Paths the handler answers on
pub const TRANSCRIBE_PATHS: [&str; 2] = ["/transcribe", "/.netlify/functions/transcribe"];

/// The handler wired to its production adapters
pub type RelayUseCase = TranscribeUploadUseCase<MulterUploadDecoder, OpenAiTranscriber>;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    use_case: Arc<RelayUseCase>,
    config: Arc<HandlerConfig>,
}

impl AppState {
    pub fn new(use_case: RelayUseCase, config: HandlerConfig) -> Self {
        Self {
            use_case: Arc::new(use_case),
            config: Arc::new(config),
        }
    }

    /// Largest body the host will buffer before handing it to the handler
    fn body_cap(&self) -> usize {
        usize::try_from(self.config.upload_limit.bytes())
            .unwrap_or(usize::MAX)
            .saturating_add(MULTIPART_OVERHEAD_BYTES)
    }
}

/// Build the router
pub fn router(state: AppState) -> Router {
    let mut router: Router<AppState> = Router::new();
    for path in TRANSCRIBE_PATHS {
        router = router.route(path, any(transcribe));
    }
    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn transcribe(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Body,
) -> Response {
    let mut request = InboundRequest::new(method.as_str());
    for (name, value) in &headers {
        match value.to_str() {
            Ok(value) => request.headers.insert(name.as_str(), value),
            Err(_) => tracing::debug!(header = %name, "Skipping non-UTF-8 header"),
        }
    }

    // Non-POST requests are rejected by the handler; no need to read their bodies
    if method == Method::POST {
        match axum::body::to_bytes(body, state.body_cap()).await {
            Ok(bytes) if !bytes.is_empty() => request = request.with_binary_body(&bytes),
            Ok(_) => {}
            Err(e) if is_length_limit(&e) => {
                tracing::warn!(error = %e, "Request body over host limit");
                let limit = state.config.upload_limit;
                return to_http(OutboundResponse::rejected(&RequestError::PayloadTooLarge { limit }));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read request body");
                return to_http(OutboundResponse::rejected(&RequestError::InvalidBody(e.to_string())));
            }
        }
    }

    to_http(state.use_case.handle(request, &state.config).await)
}

/// Whether a body read failed because the cap was hit, as opposed to an I/O fault
fn is_length_limit(err: &axum::Error) -> bool {
    let mut source: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(e) = source {
        if e.is::<LengthLimitError>() {
            return true;
        }
        source = e.source();
    }
    false
}

/// Convert a handler response into an HTTP response
pub fn to_http(outbound: OutboundResponse) -> Response {
    let mut response = Response::new(Body::from(outbound.body_json()));
    *response.status_mut() =
        StatusCode::from_u16(outbound.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    for (name, value) in &outbound.headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                response.headers_mut().append(name, value);
            }
            _ => tracing::debug!(header = %name, "Dropping invalid response header"),
        }
    }
    response
}

/// HTTP server hosting the handler
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given state
    pub fn new(state: AppState) -> Self {
        Self {
            router: router(state),
        }
    }

    /// Run the server until `shutdown` resolves
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
