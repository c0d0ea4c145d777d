use std::{
    collections::HashMap,
    fmt::Debug,
    sync::{Arc, LazyLock},
};

use tracing::debug;

use crate::{
    error::PipelineError,
    models::{effect::Effect, kind::NotificationType, notification::Notification},
};

/// Type-specific business logic run against a freshly built notification.
///
/// Implementations only report effects; they never touch the record.
pub trait ProcessingStrategy: Debug + Send + Sync {
    fn process(&self, notification: &dyn Notification);
}

/// Discount validation and analytics tracking.
#[derive(Debug, Default, Clone, Copy)]
pub struct PromotionProcessingStrategy;

/// Inventory update and shipment tracking.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderProcessingStrategy;

/// Participant fan-out and chat history.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChatProcessingStrategy;

/// Event logging and performance monitoring.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessingStrategy;

fn report(kind: NotificationType, notification: &dyn Notification) {
    notification.sink().record(Effect::Processed {
        kind,
        id: notification.id().to_string(),
    });
}

impl ProcessingStrategy for PromotionProcessingStrategy {
    fn process(&self, notification: &dyn Notification) {
        report(NotificationType::Promotion, notification);
    }
}

impl ProcessingStrategy for OrderProcessingStrategy {
    fn process(&self, notification: &dyn Notification) {
        report(NotificationType::Order, notification);
    }
}

impl ProcessingStrategy for ChatProcessingStrategy {
    fn process(&self, notification: &dyn Notification) {
        report(NotificationType::Chat, notification);
    }
}

impl ProcessingStrategy for SystemProcessingStrategy {
    fn process(&self, notification: &dyn Notification) {
        report(NotificationType::System, notification);
    }
}

static STANDARD_PROCESSOR: LazyLock<NotificationProcessor> =
    LazyLock::new(NotificationProcessor::standard);

/// Lookup table from notification type to its processing strategy.
#[derive(Debug, Default)]
pub struct NotificationProcessor {
    strategies: HashMap<NotificationType, Arc<dyn ProcessingStrategy>>,
}

impl NotificationProcessor {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn standard() -> Self {
        Self::empty()
            .register(NotificationType::Promotion, Arc::new(PromotionProcessingStrategy))
            .register(NotificationType::Order, Arc::new(OrderProcessingStrategy))
            .register(NotificationType::Chat, Arc::new(ChatProcessingStrategy))
            .register(NotificationType::System, Arc::new(SystemProcessingStrategy))
    }

    pub fn global() -> &'static NotificationProcessor {
        &STANDARD_PROCESSOR
    }

    pub fn register(mut self, kind: NotificationType, strategy: Arc<dyn ProcessingStrategy>) -> Self {
        self.strategies.insert(kind, strategy);
        self
    }

    pub fn strategy(&self, kind: NotificationType) -> Result<&dyn ProcessingStrategy, PipelineError> {
        self.strategies
            .get(&kind)
            .map(|strategy| strategy.as_ref())
            .ok_or(PipelineError::MissingStrategy(kind))
    }

    pub fn process(
        &self,
        notification: &dyn Notification,
        kind: NotificationType,
    ) -> Result<(), PipelineError> {
        let strategy = self.strategy(kind)?;

        debug!(notification_id = %notification.id(), kind = %kind, ?strategy, "Dispatching processing strategy");

        strategy.process(notification);
        Ok(())
    }
}

/// Dispatches through the global strategy table.
pub fn process(notification: &dyn Notification, kind: NotificationType) -> Result<(), PipelineError> {
    NotificationProcessor::global().process(notification, kind)
}
