use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::{
    clients::sink::EffectSink,
    models::{
        audit::AuditEntry,
        decorator::DecoratorKind,
        effect::Effect,
        notification::{Notification, Payload, Priority},
    },
};

/// The single side effect a decorator adds after the wrapped `send`.
pub trait Behavior: Send + Sync {
    const NAME: &'static str;

    fn apply(&self, notification: &dyn Notification);
}

/// Wraps exactly one notification. Reads go straight through to the
/// wrapped layer; `send` runs the wrapped layer first, then the behavior.
pub struct Decorated<B: Behavior> {
    inner: Box<dyn Notification>,
    behavior: B,
}

impl<B: Behavior + Default> Decorated<B> {
    pub fn new(inner: Box<dyn Notification>) -> Self {
        Self {
            inner,
            behavior: B::default(),
        }
    }
}

impl<B: Behavior> Decorated<B> {
    pub fn inner(&self) -> &dyn Notification {
        self.inner.as_ref()
    }

    pub fn into_inner(self) -> Box<dyn Notification> {
        self.inner
    }
}

impl<B: Behavior> Notification for Decorated<B> {
    fn id(&self) -> &str {
        self.inner.id()
    }

    fn title(&self) -> &str {
        self.inner.title()
    }

    fn message(&self) -> &str {
        self.inner.message()
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.inner.timestamp()
    }

    fn priority(&self) -> Priority {
        self.inner.priority()
    }

    fn payload(&self) -> &Payload {
        self.inner.payload()
    }

    fn sink(&self) -> &Arc<dyn EffectSink> {
        self.inner.sink()
    }

    fn name(&self) -> &'static str {
        B::NAME
    }

    fn describe(&self) -> String {
        format!("{}({})", B::NAME, self.inner.describe())
    }

    fn send(&self) {
        self.inner.send();
        self.behavior.apply(self.inner.as_ref());
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Vibration;

#[derive(Debug, Default, Clone, Copy)]
pub struct Sound;

#[derive(Debug, Default, Clone, Copy)]
pub struct Logging;

#[derive(Debug, Default, Clone, Copy)]
pub struct Cache;

impl Behavior for Vibration {
    const NAME: &'static str = "VibrationDecorator";

    fn apply(&self, notification: &dyn Notification) {
        notification.sink().record(Effect::Vibrated {
            id: notification.id().to_string(),
        });
    }
}

impl Behavior for Sound {
    const NAME: &'static str = "SoundDecorator";

    fn apply(&self, notification: &dyn Notification) {
        notification.sink().record(Effect::SoundPlayed {
            id: notification.id().to_string(),
        });
    }
}

impl Behavior for Logging {
    const NAME: &'static str = "LoggingDecorator";

    fn apply(&self, notification: &dyn Notification) {
        notification
            .sink()
            .record(Effect::Logged(AuditEntry::from_notification(notification)));
    }
}

impl Behavior for Cache {
    const NAME: &'static str = "CacheDecorator";

    fn apply(&self, notification: &dyn Notification) {
        notification.sink().record(Effect::Cached(notification.snapshot()));
    }
}

pub type VibrationDecorator = Decorated<Vibration>;
pub type SoundDecorator = Decorated<Sound>;
pub type LoggingDecorator = Decorated<Logging>;
pub type CacheDecorator = Decorated<Cache>;

/// Wraps `notification` in the decorator named by `kind`.
pub fn decorate(notification: Box<dyn Notification>, kind: DecoratorKind) -> Box<dyn Notification> {
    debug!(notification_id = %notification.id(), decorator = %kind, "Applying decorator");

    match kind {
        DecoratorKind::Cache => Box::new(CacheDecorator::new(notification)),
        DecoratorKind::Logging => Box::new(LoggingDecorator::new(notification)),
        DecoratorKind::Sound => Box::new(SoundDecorator::new(notification)),
        DecoratorKind::Vibration => Box::new(VibrationDecorator::new(notification)),
    }
}

/// Applies `kinds` in order; the last one ends up outermost.
pub fn decorate_all<'a>(
    notification: Box<dyn Notification>,
    kinds: impl IntoIterator<Item = &'a DecoratorKind>,
) -> Box<dyn Notification> {
    kinds
        .into_iter()
        .fold(notification, |wrapped, kind| decorate(wrapped, *kind))
}
