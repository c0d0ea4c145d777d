use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::{
    clients::sink::{EffectSink, tracing_sink},
    decorator::decorate_all,
    error::PipelineError,
    factory::NotificationManager,
    models::{
        decorator::DecoratorKind,
        kind::NotificationType,
        notification::{Notification, NotificationData},
    },
    strategy::{NotificationProcessor, ProcessingStrategy},
};

/// Accumulated builder settings, as returned by [`NotificationBuilder::inspect`].
#[derive(Debug, Clone, Serialize)]
pub struct BuilderConfig {
    #[serde(rename = "type")]
    pub notification_type: Option<NotificationType>,
    pub data: Option<NotificationData>,
    pub decorators: Vec<DecoratorKind>,
    pub auto_process: bool,

    #[serde(skip)]
    pub custom_strategy: Option<Arc<dyn ProcessingStrategy>>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            notification_type: None,
            data: None,
            decorators: Vec::new(),
            auto_process: true,
            custom_strategy: None,
        }
    }
}

/// Fluent assembly of a processed, decorated notification.
///
/// `build` runs the factory, then the processing strategy (when
/// auto-processing is on) against the undecorated variant, then wraps
/// the result in each requested decorator in the order they were added.
/// The configuration is not consumed, so a builder can be built again.
pub struct NotificationBuilder {
    config: BuilderConfig,
    sink: Arc<dyn EffectSink>,
}

impl Default for NotificationBuilder {
    fn default() -> Self {
        Self {
            config: BuilderConfig::default(),
            sink: tracing_sink(),
        }
    }
}

impl NotificationBuilder {
    /// Empty builder; `build` fails until type and data are supplied.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(notification_type: NotificationType, data: NotificationData) -> Self {
        Self::new().with_type(notification_type).with_data(data)
    }

    pub fn with_type(mut self, notification_type: NotificationType) -> Self {
        self.config.notification_type = Some(notification_type);
        self
    }

    pub fn with_data(mut self, data: NotificationData) -> Self {
        self.config.data = Some(data);
        self
    }

    /// Channel every effect of the built notification is reported to.
    pub fn with_sink(mut self, sink: Arc<dyn EffectSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_cache(self) -> Self {
        self.with_decorator(DecoratorKind::Cache)
    }

    pub fn with_logging(self) -> Self {
        self.with_decorator(DecoratorKind::Logging)
    }

    pub fn with_sound(self) -> Self {
        self.with_decorator(DecoratorKind::Sound)
    }

    pub fn with_vibration(self) -> Self {
        self.with_decorator(DecoratorKind::Vibration)
    }

    pub fn with_decorator(mut self, kind: DecoratorKind) -> Self {
        self.config.decorators.push(kind);
        self
    }

    pub fn with_decorators(mut self, kinds: &[DecoratorKind]) -> Self {
        self.config.decorators.extend_from_slice(kinds);
        self
    }

    /// Replaces the registered strategy when auto-processing runs.
    pub fn with_strategy(mut self, strategy: Arc<dyn ProcessingStrategy>) -> Self {
        self.config.custom_strategy = Some(strategy);
        self
    }

    pub fn with_auto_process(mut self, auto_process: bool) -> Self {
        self.config.auto_process = auto_process;
        self
    }

    /// Logging, then cache.
    pub fn with_standard_behaviors(self) -> Self {
        self.with_logging().with_cache()
    }

    /// Vibration, sound, then logging.
    pub fn with_urgent_behaviors(self) -> Self {
        self.with_vibration().with_sound().with_logging()
    }

    /// Cache, then logging. Note the order is the reverse of
    /// [`with_standard_behaviors`](Self::with_standard_behaviors).
    pub fn with_silent_behaviors(self) -> Self {
        self.with_cache().with_logging()
    }

    pub fn build(&self) -> Result<Box<dyn Notification>, PipelineError> {
        self.build_with(NotificationManager::global(), NotificationProcessor::global())
    }

    /// Same as [`build`](Self::build) against caller supplied tables.
    pub fn build_with(
        &self,
        manager: &NotificationManager,
        processor: &NotificationProcessor,
    ) -> Result<Box<dyn Notification>, PipelineError> {
        let notification_type = self
            .config
            .notification_type
            .ok_or(PipelineError::IncompleteConfiguration("type"))?;
        let data = self
            .config
            .data
            .clone()
            .ok_or(PipelineError::IncompleteConfiguration("data"))?;

        let notification =
            manager.create_notification(notification_type, data, Arc::clone(&self.sink))?;

        if self.config.auto_process {
            match &self.config.custom_strategy {
                Some(strategy) => strategy.process(notification.as_ref()),
                None => processor.process(notification.as_ref(), notification_type)?,
            }
        }

        let notification = decorate_all(notification, &self.config.decorators);

        debug!(
            notification_id = %notification.id(),
            layers = %notification.describe(),
            "Notification built"
        );

        Ok(notification)
    }

    pub fn build_and_send(&self) -> Result<Box<dyn Notification>, PipelineError> {
        let notification = self.build()?;
        notification.send();
        Ok(notification)
    }

    pub fn inspect(&self) -> BuilderConfig {
        self.config.clone()
    }

    /// Drops the accumulated configuration; the sink is kept.
    pub fn reset(mut self) -> Self {
        self.config = BuilderConfig::default();
        self
    }
}
