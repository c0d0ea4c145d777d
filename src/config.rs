use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

use crate::models::{decorator::DecoratorKind, kind::NotificationType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Demo settings read from `NOTIFY_*` environment variables.
#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub demo_type: Option<NotificationType>,

    #[serde(default)]
    pub demo_decorators: Option<String>,
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_format: default_log_format(),
            log_level: default_log_level(),
            demo_type: None,
            demo_decorators: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::prefixed("NOTIFY_")
            .from_env::<Self>()
            .map_err(|e| anyhow!("Invalid notification demo environment: {}", e))?;
        Ok(config)
    }

    /// Types the demo runs through: the configured one, or all of them.
    pub fn demo_types(&self) -> Vec<NotificationType> {
        match self.demo_type {
            Some(kind) => vec![kind],
            None => NotificationType::ALL.to_vec(),
        }
    }

    pub fn extra_decorators(&self) -> Result<Vec<DecoratorKind>, Error> {
        match &self.demo_decorators {
            Some(list) => Ok(DecoratorKind::parse_list(list)?),
            None => Ok(Vec::new()),
        }
    }
}
