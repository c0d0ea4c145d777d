use std::{
    fmt::{Display, Formatter, Result},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Symbolic decorator request recorded by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecoratorKind {
    Cache,
    Logging,
    Sound,
    Vibration,
}

impl DecoratorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecoratorKind::Cache => "cache",
            DecoratorKind::Logging => "logging",
            DecoratorKind::Sound => "sound",
            DecoratorKind::Vibration => "vibration",
        }
    }

    /// Parses a comma separated list such as `"vibration, sound"`.
    pub fn parse_list(list: &str) -> std::result::Result<Vec<Self>, PipelineError> {
        list.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl Display for DecoratorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DecoratorKind {
    type Err = PipelineError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cache" => Ok(DecoratorKind::Cache),
            "logging" => Ok(DecoratorKind::Logging),
            "sound" => Ok(DecoratorKind::Sound),
            "vibration" => Ok(DecoratorKind::Vibration),
            _ => Err(PipelineError::UnknownDecorator(s.to_string())),
        }
    }
}
