use thiserror::Error;

use crate::models::kind::NotificationType;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("No factory found for notification type: {0}")]
    MissingFactory(NotificationType),

    #[error("No processing strategy found for notification type: {0}")]
    MissingStrategy(NotificationType),

    #[error("Unknown notification type: {0}")]
    UnknownType(String),

    #[error("Unknown decorator: {0}")]
    UnknownDecorator(String),

    #[error("Type and data are required to build notification (missing {0})")]
    IncompleteConfiguration(&'static str),
}
