use std::{
    collections::HashMap,
    fmt::{Display, Formatter, Result},
    sync::Arc,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::sink::EffectSink;

pub type Payload = HashMap<String, serde_json::Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
            Priority::Urgent => write!(f, "urgent"),
        }
    }
}

/// Input record for every notification variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationData {
    pub id: String,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub priority: Priority,

    #[serde(default)]
    pub payload: Payload,
}

impl NotificationData {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            message: message.into(),
            timestamp: Utc::now(),
            priority,
            payload: HashMap::new(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_payload(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.payload.insert(key.into(), value);
        self
    }
}

/// Capability set shared by base variants and every decorator layer.
///
/// Accessors are read-only. `send` performs delivery and reports each
/// effect through [`Notification::sink`].
pub trait Notification: Send + Sync {
    fn id(&self) -> &str;
    fn title(&self) -> &str;
    fn message(&self) -> &str;
    fn timestamp(&self) -> DateTime<Utc>;
    fn priority(&self) -> Priority;
    fn payload(&self) -> &Payload;

    fn sink(&self) -> &Arc<dyn EffectSink>;

    /// Name of the outermost layer, e.g. `SoundDecorator`.
    fn name(&self) -> &'static str;

    /// Full layer chain from the outside in.
    fn describe(&self) -> String {
        self.name().to_string()
    }

    fn send(&self);

    fn snapshot(&self) -> NotificationData {
        NotificationData {
            id: self.id().to_string(),
            title: self.title().to_string(),
            message: self.message().to_string(),
            timestamp: self.timestamp(),
            priority: self.priority(),
            payload: self.payload().clone(),
        }
    }
}

impl std::fmt::Debug for dyn Notification {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("Notification")
            .field("layers", &self.describe())
            .field("id", &self.id())
            .field("title", &self.title())
            .field("priority", &self.priority())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_orders_from_low_to_urgent() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::High < Priority::Urgent);
    }

    #[test]
    fn payload_defaults_to_empty_when_absent() {
        let data: NotificationData = serde_json::from_value(serde_json::json!({
            "id": "4",
            "title": "System update",
            "message": "New version available",
            "timestamp": "2024-01-01T00:00:00Z",
            "priority": "low"
        }))
        .unwrap();

        assert!(data.payload.is_empty());
        assert_eq!(data.priority, Priority::Low);
    }
}
