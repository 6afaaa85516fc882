use std::collections::HashMap;
use std::sync::Mutex;

use futures::StreamExt;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

use super::{NotificationChannel, NotificationError, NotificationPayload, NotificationStream};
use crate::config::core_config::NotificationConfig;

/// In-process [`NotificationChannel`] backed by one tokio broadcast channel per topic
pub struct BroadcastNotificationChannel {
    capacity: usize,
    topics: Mutex<HashMap<String, broadcast::Sender<NotificationPayload>>>,
}

impl BroadcastNotificationChannel {
    pub fn new(config: &NotificationConfig) -> Self {
        Self {
            capacity: config.channel_capacity.max(1),
            topics: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait::async_trait]
impl NotificationChannel for BroadcastNotificationChannel {
    async fn publish(
        &self,
        topic: &str,
        payload: NotificationPayload,
    ) -> Result<(), NotificationError> {
        let sender = {
            let topics = self
                .topics
                .lock()
                .map_err(|err| NotificationError::PublishFailed {
                    topic: topic.to_owned(),
                    reason: err.to_string(),
                })?;

            topics.get(topic).cloned()
        };

        let Some(sender) = sender else {
            tracing::debug!("No subscribers for topic {topic}");
            return Ok(());
        };

        match sender.send(payload) {
            Ok(receivers) => tracing::debug!("Published to {receivers} subscriber(s) of {topic}"),
            Err(_) => tracing::debug!("No active subscribers for topic {topic}"),
        }

        Ok(())
    }

    fn subscribe(&self, topic: &str) -> Result<NotificationStream, NotificationError> {
        let mut topics = self
            .topics
            .lock()
            .map_err(|err| NotificationError::SubscriptionFailed {
                topic: topic.to_owned(),
                reason: err.to_string(),
            })?;

        let receiver = topics
            .entry(topic.to_owned())
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .subscribe();

        let topic = topic.to_owned();
        let stream = futures::stream::unfold(receiver, move |mut receiver| {
            let topic = topic.clone();
            async move {
                loop {
                    match receiver.recv().await {
                        Ok(payload) => return Some((payload, receiver)),
                        Err(RecvError::Lagged(skipped)) => {
                            tracing::warn!("Subscriber of {topic} lagged, {skipped} event(s) dropped");
                        }
                        Err(RecvError::Closed) => return None,
                    }
                }
            }
        });

        Ok(stream.boxed())
    }
}
