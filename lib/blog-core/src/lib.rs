use std::sync::Arc;

use config::ConfigValidationError;
use config::core_config::CoreConfig;
use provider::notification::NotificationChannel;
use provider::notification::broadcast::BroadcastNotificationChannel;
use repository::DataRepository;
use service::blog::BlogService;
use service::blog_resolver::BlogResolver;

pub mod config;
pub mod model;
pub mod provider;
pub mod repository;
pub mod service;

#[derive(Clone)]
pub struct BlogCore {
    pub blog_service: BlogService,
    pub blog_resolver: BlogResolver,
    pub notification_channel: Arc<dyn NotificationChannel>,
    pub config: Arc<CoreConfig>,
}

impl BlogCore {
    /// Wires services on top of the given data layer
    ///
    /// Without an explicit `notification_channel` an in-process broadcast
    /// channel sized from `config.notification` is used.
    pub fn new(
        data_provider: Arc<dyn DataRepository>,
        config: CoreConfig,
        notification_channel: Option<Arc<dyn NotificationChannel>>,
    ) -> Result<Self, ConfigValidationError> {
        config.validate()?;

        let notification_channel = notification_channel.unwrap_or_else(|| {
            Arc::new(BroadcastNotificationChannel::new(&config.notification))
        });

        let blog_service = BlogService::new(data_provider.get_blog_repository());
        let blog_resolver = BlogResolver::new(blog_service.clone(), notification_channel.clone());

        Ok(Self {
            blog_service,
            blog_resolver,
            notification_channel,
            config: Arc::new(config),
        })
    }

    pub fn version() -> Version {
        Version {
            name: env!("CARGO_PKG_NAME").to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

pub struct Version {
    pub name: String,
    pub version: String,
}
