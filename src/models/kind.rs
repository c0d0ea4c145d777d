use std::{
    fmt::{Display, Formatter, Result},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Closed set of notification kinds. Keys both the factory and the
/// processing strategy registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Promotion,
    Order,
    Chat,
    System,
}

impl NotificationType {
    pub const ALL: [NotificationType; 4] = [
        NotificationType::Promotion,
        NotificationType::Order,
        NotificationType::Chat,
        NotificationType::System,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Promotion => "promotion",
            NotificationType::Order => "order",
            NotificationType::Chat => "chat",
            NotificationType::System => "system",
        }
    }
}

impl Display for NotificationType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotificationType {
    type Err = PipelineError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "promotion" => Ok(NotificationType::Promotion),
            "order" => Ok(NotificationType::Order),
            "chat" => Ok(NotificationType::Chat),
            "system" => Ok(NotificationType::System),
            _ => Err(PipelineError::UnknownType(s.to_string())),
        }
    }
}
