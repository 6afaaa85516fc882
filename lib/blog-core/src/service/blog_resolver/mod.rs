//! Request-handling layer behind the GraphQL schema.
//!
//! Translates request-level operations into [`BlogService`] calls, publishes
//! [`BLOG_ADDED`](crate::provider::notification::BLOG_ADDED) events after
//! successful creates and hands out live subscriptions to those events.

use std::sync::Arc;

use super::blog::BlogService;
use crate::provider::notification::NotificationChannel;

pub mod error;
pub mod resolver;

#[derive(Clone)]
pub struct BlogResolver {
    blog_service: BlogService,
    notification_channel: Arc<dyn NotificationChannel>,
}

impl BlogResolver {
    pub fn new(
        blog_service: BlogService,
        notification_channel: Arc<dyn NotificationChannel>,
    ) -> Self {
        Self {
            blog_service,
            notification_channel,
        }
    }
}
