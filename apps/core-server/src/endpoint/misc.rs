use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use blog_core::BlogCore;
use serde_json::{Value, json};

use crate::metrics::encode_metrics;

pub(crate) async fn get_build_info() -> Json<Value> {
    let version = BlogCore::version();

    Json::from(json!({
        "name": version.name,
        "version": version.version,
    }))
}

pub(crate) async fn health_check() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}

pub(crate) async fn get_metrics() -> Response {
    match encode_metrics() {
        Ok(result) => (StatusCode::OK, result).into_response(),
        Err(error) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Metrics encoding error: {:?}", error),
        )
            .into_response(),
    }
}
