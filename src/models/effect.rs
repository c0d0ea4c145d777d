use std::fmt::{Display, Formatter, Result};

use serde::Serialize;

use crate::models::{audit::AuditEntry, kind::NotificationType, notification::NotificationData};

/// One observable side effect of the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    Delivered {
        kind: NotificationType,
        id: String,
        title: String,
    },
    Processed {
        kind: NotificationType,
        id: String,
    },
    Vibrated {
        id: String,
    },
    SoundPlayed {
        id: String,
    },
    Logged(AuditEntry),
    Cached(NotificationData),
}

impl Effect {
    pub fn label(&self) -> &'static str {
        match self {
            Effect::Delivered { .. } => "delivered",
            Effect::Processed { .. } => "processed",
            Effect::Vibrated { .. } => "vibrated",
            Effect::SoundPlayed { .. } => "sound_played",
            Effect::Logged(_) => "logged",
            Effect::Cached(_) => "cached",
        }
    }

    pub fn notification_id(&self) -> &str {
        match self {
            Effect::Delivered { id, .. }
            | Effect::Processed { id, .. }
            | Effect::Vibrated { id }
            | Effect::SoundPlayed { id } => id,
            Effect::Logged(entry) => &entry.notification_id,
            Effect::Cached(data) => &data.id,
        }
    }
}

impl Display for Effect {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Effect::Delivered { kind, title, .. } => {
                write!(f, "Processing {} notification: {}", kind, title)
            }
            Effect::Processed { kind, .. } => match kind {
                NotificationType::Promotion => {
                    write!(f, "Processing promotion: validate discounts, track analytics")
                }
                NotificationType::Order => {
                    write!(f, "Processing order: update inventory, send tracking")
                }
                NotificationType::Chat => {
                    write!(f, "Processing chat: notify users, update chat history")
                }
                NotificationType::System => {
                    write!(f, "Processing system: log events, monitor performance")
                }
            },
            Effect::Vibrated { .. } => write!(f, "Vibrating the device while sending notification"),
            Effect::SoundPlayed { .. } => write!(f, "Playing notification sound"),
            Effect::Logged(_) => write!(f, "Logging notification to the audit store"),
            Effect::Cached(_) => write!(f, "Caching notification for future reference"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivered_line_names_kind_and_title() {
        let effect = Effect::Delivered {
            kind: NotificationType::Order,
            id: "2".to_string(),
            title: "Order shipped".to_string(),
        };

        assert_eq!(effect.to_string(), "Processing order notification: Order shipped");
        assert_eq!(effect.notification_id(), "2");
        assert_eq!(effect.label(), "delivered");
    }

    #[test]
    fn processed_lines_differ_per_kind() {
        let lines: std::collections::HashSet<String> = NotificationType::ALL
            .iter()
            .map(|kind| {
                Effect::Processed {
                    kind: *kind,
                    id: "x".to_string(),
                }
                .to_string()
            })
            .collect();

        assert_eq!(lines.len(), 4);
    }
}
