use std::time::Instant;

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::metrics;

pub struct HttpRequestContext<'a> {
    pub path: &'a str,
    pub method: &'a str,
    pub request_id: Option<&'a str>,
    pub session_id: Option<&'a str>,
}

pub async fn metrics_counter(request: Request<Body>, next: Next) -> Response {
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());

    let start = Instant::now();
    let response = next.run(request).await;
    metrics::track_request_count_and_time(&path, start.elapsed().as_secs_f64());

    response
}

pub fn get_http_request_context<T>(request: &Request<T>) -> HttpRequestContext<'_> {
    let headers = request.headers();
    let request_id = headers
        .get("x-request-id")
        .and_then(|header| header.to_str().ok())
        .filter(|value| !value.is_empty());

    let session_id = headers
        .get("x-session-id")
        .and_then(|header| header.to_str().ok())
        .filter(|value| !value.is_empty());

    HttpRequestContext {
        path: request.uri().path(),
        method: request.method().as_str(),
        request_id,
        session_id,
    }
}
