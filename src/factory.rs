use std::{
    collections::HashMap,
    sync::{Arc, LazyLock},
};

use tracing::debug;

use crate::{
    clients::sink::EffectSink,
    error::PipelineError,
    models::{
        kind::NotificationType,
        notification::{Notification, NotificationData},
    },
    notifications::{
        ChatNotification, OrderNotification, PromotionNotification, SystemNotification,
    },
};

pub trait NotificationFactory: Send + Sync {
    fn create_notification(
        &self,
        data: NotificationData,
        sink: Arc<dyn EffectSink>,
    ) -> Box<dyn Notification>;

    /// Creates the notification and sends it straight away.
    fn prepare_notification(
        &self,
        data: NotificationData,
        sink: Arc<dyn EffectSink>,
    ) -> Box<dyn Notification> {
        let notification = self.create_notification(data, sink);
        notification.send();
        notification
    }
}

pub struct PromotionNotificationFactory;
pub struct OrderNotificationFactory;
pub struct ChatNotificationFactory;
pub struct SystemNotificationFactory;

impl NotificationFactory for PromotionNotificationFactory {
    fn create_notification(
        &self,
        data: NotificationData,
        sink: Arc<dyn EffectSink>,
    ) -> Box<dyn Notification> {
        Box::new(PromotionNotification::new(data, sink))
    }
}

impl NotificationFactory for OrderNotificationFactory {
    fn create_notification(
        &self,
        data: NotificationData,
        sink: Arc<dyn EffectSink>,
    ) -> Box<dyn Notification> {
        Box::new(OrderNotification::new(data, sink))
    }
}

impl NotificationFactory for ChatNotificationFactory {
    fn create_notification(
        &self,
        data: NotificationData,
        sink: Arc<dyn EffectSink>,
    ) -> Box<dyn Notification> {
        Box::new(ChatNotification::new(data, sink))
    }
}

impl NotificationFactory for SystemNotificationFactory {
    fn create_notification(
        &self,
        data: NotificationData,
        sink: Arc<dyn EffectSink>,
    ) -> Box<dyn Notification> {
        Box::new(SystemNotification::new(data, sink))
    }
}

static STANDARD_MANAGER: LazyLock<NotificationManager> = LazyLock::new(NotificationManager::standard);

/// Lookup table from notification type to the factory that builds it.
#[derive(Default)]
pub struct NotificationManager {
    factories: HashMap<NotificationType, Box<dyn NotificationFactory>>,
}

impl NotificationManager {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Table with one factory per [`NotificationType`].
    pub fn standard() -> Self {
        Self::empty()
            .register(NotificationType::Promotion, PromotionNotificationFactory)
            .register(NotificationType::Order, OrderNotificationFactory)
            .register(NotificationType::Chat, ChatNotificationFactory)
            .register(NotificationType::System, SystemNotificationFactory)
    }

    /// Process-wide read-only instance of [`NotificationManager::standard`].
    pub fn global() -> &'static NotificationManager {
        &STANDARD_MANAGER
    }

    pub fn register(
        mut self,
        kind: NotificationType,
        factory: impl NotificationFactory + 'static,
    ) -> Self {
        self.factories.insert(kind, Box::new(factory));
        self
    }

    pub fn factory(&self, kind: NotificationType) -> Result<&dyn NotificationFactory, PipelineError> {
        self.factories
            .get(&kind)
            .map(|factory| factory.as_ref())
            .ok_or(PipelineError::MissingFactory(kind))
    }

    pub fn create_notification(
        &self,
        kind: NotificationType,
        data: NotificationData,
        sink: Arc<dyn EffectSink>,
    ) -> Result<Box<dyn Notification>, PipelineError> {
        let factory = self.factory(kind)?;

        debug!(notification_id = %data.id, kind = %kind, "Creating notification");

        Ok(factory.create_notification(data, sink))
    }
}

/// Creates a notification through the global factory table.
pub fn create_notification(
    kind: NotificationType,
    data: NotificationData,
    sink: Arc<dyn EffectSink>,
) -> Result<Box<dyn Notification>, PipelineError> {
    NotificationManager::global().create_notification(kind, data, sink)
}
