use thiserror::Error;

use crate::model::blog::Blog;
use crate::provider::notification::NotificationError;
use crate::service::error::{ErrorCode, ServiceError};

#[derive(Debug, Error)]
pub enum ResolverError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The blog is stored, only the `BLOG_ADDED` event was lost
    #[error("Blog `{}` was created but the notification could not be published: {source}", .blog.id)]
    PublishFailed {
        blog: Box<Blog>,
        #[source]
        source: NotificationError,
    },

    #[error(transparent)]
    SubscriptionFailed(NotificationError),
}

impl ResolverError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Service(error) => error.error_code(),
            Self::PublishFailed { .. } => ErrorCode::BR_0003,
            Self::SubscriptionFailed(_) => ErrorCode::BR_0004,
        }
    }
}
