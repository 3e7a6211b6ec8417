use crate::domain::dimension::Dimension;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum BoxError {
    #[error("The {dimension} should have a minimum value of {min}")]
    InvalidDimension {
        dimension: Dimension,
        value: f64,
        min: f64,
    },
}

impl BoxError {
    pub fn dimension(&self) -> Dimension {
        match self {
            BoxError::InvalidDimension { dimension, .. } => *dimension,
        }
    }

    pub fn rejected_value(&self) -> f64 {
        match self {
            BoxError::InvalidDimension { value, .. } => *value,
        }
    }
}

pub type Result<T> = std::result::Result<T, BoxError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}
