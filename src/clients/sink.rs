use std::sync::{Arc, Mutex, MutexGuard};

use tracing::info;

use crate::models::{effect::Effect, notification::NotificationData};

/// Outbound channel for pipeline effects.
///
/// Stands in for the device, audio, audit and cache integrations a
/// production deployment would plug in here.
pub trait EffectSink: Send + Sync {
    fn record(&self, effect: Effect);
}

/// Reports each effect as a structured `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EffectSink for TracingSink {
    fn record(&self, effect: Effect) {
        info!(
            effect = effect.label(),
            notification_id = %effect.notification_id(),
            "{}",
            effect
        );
    }
}

/// Keeps every effect in arrival order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    effects: Mutex<Vec<Effect>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn effects(&self) -> Vec<Effect> {
        self.lock().clone()
    }

    /// Rendered log lines, in order.
    pub fn lines(&self) -> Vec<String> {
        self.lock().iter().map(ToString::to_string).collect()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.lock().iter().map(Effect::label).collect()
    }

    /// Notifications stored by the cache decorator.
    pub fn cached(&self) -> Vec<NotificationData> {
        self.lock()
            .iter()
            .filter_map(|effect| match effect {
                Effect::Cached(data) => Some(data.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Effect>> {
        self.effects.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl EffectSink for RecordingSink {
    fn record(&self, effect: Effect) {
        self.lock().push(effect);
    }
}

/// Forwards every effect to each inner sink in order.
#[derive(Default)]
pub struct FanoutSink {
    sinks: Vec<Arc<dyn EffectSink>>,
}

impl FanoutSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sink(mut self, sink: Arc<dyn EffectSink>) -> Self {
        self.sinks.push(sink);
        self
    }
}

impl EffectSink for FanoutSink {
    fn record(&self, effect: Effect) {
        if let Some((last, rest)) = self.sinks.split_last() {
            for sink in rest {
                sink.record(effect.clone());
            }
            last.record(effect);
        }
    }
}

pub fn tracing_sink() -> Arc<dyn EffectSink> {
    Arc::new(TracingSink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::kind::NotificationType;

    fn vibrated(id: &str) -> Effect {
        Effect::Vibrated { id: id.to_string() }
    }

    #[test]
    fn recording_sink_keeps_arrival_order() {
        let sink = RecordingSink::new();
        sink.record(vibrated("a"));
        sink.record(Effect::Processed {
            kind: NotificationType::Chat,
            id: "a".to_string(),
        });

        assert_eq!(sink.labels(), vec!["vibrated", "processed"]);
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn fanout_reaches_every_sink() {
        let first = RecordingSink::shared();
        let second = RecordingSink::shared();
        let fanout = FanoutSink::new()
            .with_sink(first.clone())
            .with_sink(second.clone());

        fanout.record(vibrated("b"));

        assert_eq!(first.len(), 1);
        assert_eq!(second.effects(), vec![vibrated("b")]);
    }
}
