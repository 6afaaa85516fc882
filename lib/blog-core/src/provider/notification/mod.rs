//! Topic based publish/subscribe used to fan out live updates to subscribers.
//!
//! Delivery is best-effort: every subscriber connected at publish time gets an
//! event at most once, nothing is persisted or replayed for late subscribers.

use futures::stream::BoxStream;
use serde::Serialize;
use thiserror::Error;

use crate::model::blog::Blog;

pub mod broadcast;

#[cfg(test)]
mod test;

pub const BLOG_ADDED: &str = "BLOG_ADDED";

/// Event published on a topic, serializes as `{ "blogAdded": { ... } }`
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationPayload {
    BlogAdded(Blog),
}

pub type NotificationStream = BoxStream<'static, NotificationPayload>;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Failed to publish to topic `{topic}`: {reason}")]
    PublishFailed { topic: String, reason: String },

    #[error("Could not establish subscription to topic `{topic}`: {reason}")]
    SubscriptionFailed { topic: String, reason: String },
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait NotificationChannel: Send + Sync {
    /// Publishing to a topic without subscribers is not an error
    async fn publish(
        &self,
        topic: &str,
        payload: NotificationPayload,
    ) -> Result<(), NotificationError>;

    fn subscribe(&self, topic: &str) -> Result<NotificationStream, NotificationError>;
}
