use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;

/// Logs every request with its status and latency
///
/// Install with `axum::middleware::from_fn(logging_interceptor)`.
pub async fn logging_interceptor(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    tracing::debug!("--> {} {}", method, uri);

    let response = next.run(request).await;
    let duration = start.elapsed();
    let status = response.status();

    if status.is_server_error() {
        tracing::error!("<-- {} {} {} {:?}", method, uri, status, duration);
    } else {
        tracing::info!("<-- {} {} {} {:?}", method, uri, status, duration);
    }
    response
}
