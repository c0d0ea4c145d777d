pub mod builder;
pub mod clients;
pub mod config;
pub mod decorator;
pub mod error;
pub mod factory;
pub mod models;
pub mod notifications;
pub mod strategy;
pub mod utils;

pub use builder::{BuilderConfig, NotificationBuilder};
pub use error::PipelineError;
pub use models::{
    decorator::DecoratorKind,
    kind::NotificationType,
    notification::{Notification, NotificationData, Priority},
};
