use async_graphql::ErrorExtensions;
use blog_core::service::blog_resolver::error::ResolverError;
use blog_core::service::error::ErrorCode;
use thiserror::Error;

use super::AppState;

#[derive(Debug, Error)]
pub(crate) enum ValidationError {
    #[error("{0}")]
    Input(#[from] validator::ValidationErrors),

    #[error("`{0}` is not a valid blog id")]
    InvalidId(String),

    #[error("`{name}` must not be negative, got {value}")]
    Negative { name: &'static str, value: i32 },
}

pub(crate) fn validation_error(error: ValidationError) -> async_graphql::Error {
    let code = ErrorCode::BR_0006;

    async_graphql::Error::new(format!("{}: {error}", code.msg()))
        .extend_with(|_, extensions| extensions.set("code", code.to_string()))
}

/// Logs the failure and converts it into an opaque GraphQL error
#[track_caller]
pub(crate) fn to_graphql_error(
    error: ResolverError,
    state: &AppState,
    action_description: &str,
) -> async_graphql::Error {
    let location = std::panic::Location::caller();
    tracing::error!(%error, %location, "Error while {action_description}");

    let code = error.error_code();
    let cause = (!state.config.hide_error_response_cause).then(|| error.to_string());
    let blog_id = match &error {
        ResolverError::PublishFailed { blog, .. } => Some(blog.id.to_string()),
        ResolverError::Service(_) | ResolverError::SubscriptionFailed(_) => None,
    };

    async_graphql::Error::new(code.msg()).extend_with(|_, extensions| {
        extensions.set("code", code.to_string());

        if let Some(cause) = cause {
            extensions.set("cause", cause);
        }

        if let Some(blog_id) = blog_id {
            extensions.set("blogId", blog_id);
        }
    })
}
