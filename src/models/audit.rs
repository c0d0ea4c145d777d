use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::models::notification::{Notification, Priority};

/// Row written to the audit channel by the logging decorator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub notification_id: String,
    pub title: String,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    pub metadata: JsonValue,
}

impl AuditEntry {
    pub fn new(
        notification_id: String,
        title: String,
        priority: Priority,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            notification_id,
            title,
            priority,
            created_at,
            metadata: serde_json::json!({}),
        }
    }

    pub fn with_metadata(mut self, metadata: JsonValue) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn from_notification(notification: &dyn Notification) -> Self {
        let metadata = notification
            .payload()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect::<serde_json::Map<_, _>>();

        Self::new(
            notification.id().to_string(),
            notification.title().to_string(),
            notification.priority(),
            notification.timestamp(),
        )
        .with_metadata(JsonValue::Object(metadata))
    }
}
