use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use uuid::Uuid;

pub const X_REQUEST_ID: &str = "x-request-id";
const MAX_INCOMING_ID_LEN: usize = 128;

/// Request ID wrapper type for extension
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Reuse a sane caller-supplied id (e.g. from a proxy), otherwise mint one.
fn incoming_request_id(request: &Request) -> Option<String> {
    request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty() && id.len() <= MAX_INCOMING_ID_LEN)
        .filter(|id| id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .map(str::to_string)
}

/// Attach a request ID to each request and echo it on the response
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id =
        incoming_request_id(&request).unwrap_or_else(|| Uuid::new_v4().to_string());

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let span = tracing::info_span!("request", request_id = %request_id);
    let mut response = {
        use tracing::Instrument;
        next.run(request).instrument(span).await
    };

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(X_REQUEST_ID, header_value);
    }

    response
}
