use futures::{FutureExt, StreamExt};

use super::broadcast::BroadcastNotificationChannel;
use super::{BLOG_ADDED, NotificationChannel, NotificationPayload};
use crate::config::core_config::NotificationConfig;
use crate::service::test_utilities::dummy_blog;

fn channel() -> BroadcastNotificationChannel {
    BroadcastNotificationChannel::new(&NotificationConfig::default())
}

#[tokio::test]
async fn test_subscriber_receives_published_event_once() {
    let channel = channel();
    let mut stream = channel.subscribe(BLOG_ADDED).unwrap();

    let blog = dummy_blog("Announce");
    channel
        .publish(BLOG_ADDED, NotificationPayload::BlogAdded(blog.clone()))
        .await
        .unwrap();

    assert_eq!(
        stream.next().await,
        Some(NotificationPayload::BlogAdded(blog))
    );
    assert!(stream.next().now_or_never().is_none());
}

#[tokio::test]
async fn test_late_subscriber_does_not_see_earlier_event() {
    let channel = channel();
    let _early = channel.subscribe(BLOG_ADDED).unwrap();

    channel
        .publish(BLOG_ADDED, NotificationPayload::BlogAdded(dummy_blog("Announce")))
        .await
        .unwrap();

    let mut late = channel.subscribe(BLOG_ADDED).unwrap();
    assert!(late.next().now_or_never().is_none());
}

#[tokio::test]
async fn test_publish_without_subscribers_succeeds() {
    let channel = channel();

    channel
        .publish(BLOG_ADDED, NotificationPayload::BlogAdded(dummy_blog("Nobody")))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_every_subscriber_gets_the_event() {
    let channel = channel();
    let mut first = channel.subscribe(BLOG_ADDED).unwrap();
    let mut second = channel.subscribe(BLOG_ADDED).unwrap();

    let payload = NotificationPayload::BlogAdded(dummy_blog("Fan out"));
    channel.publish(BLOG_ADDED, payload.clone()).await.unwrap();

    assert_eq!(first.next().await, Some(payload.clone()));
    assert_eq!(second.next().await, Some(payload));
}

#[tokio::test]
async fn test_topics_are_isolated() {
    let channel = channel();
    let mut other = channel.subscribe("OTHER_TOPIC").unwrap();

    channel
        .publish(BLOG_ADDED, NotificationPayload::BlogAdded(dummy_blog("Isolated")))
        .await
        .unwrap();

    assert!(other.next().now_or_never().is_none());
}

#[tokio::test]
async fn test_lagging_subscriber_skips_dropped_events() {
    let channel = BroadcastNotificationChannel::new(&NotificationConfig {
        channel_capacity: 1,
    });
    let mut stream = channel.subscribe(BLOG_ADDED).unwrap();

    channel
        .publish(BLOG_ADDED, NotificationPayload::BlogAdded(dummy_blog("First")))
        .await
        .unwrap();
    let last = NotificationPayload::BlogAdded(dummy_blog("Second"));
    channel.publish(BLOG_ADDED, last.clone()).await.unwrap();

    assert_eq!(stream.next().await, Some(last));
}

#[test]
fn test_payload_serializes_under_event_name() {
    let blog = dummy_blog("Announce");
    let value = serde_json::to_value(NotificationPayload::BlogAdded(blog.clone())).unwrap();

    assert_eq!(value["blogAdded"]["title"], "Announce");
    assert_eq!(value["blogAdded"]["id"], blog.id.to_string());
}
