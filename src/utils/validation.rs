use crate::domain::dimension::{Dimension, MIN_DIMENSION_VALUE};
use crate::utils::error::{BoxError, ConfigError, Result};

pub trait Validate {
    fn validate(&self) -> std::result::Result<(), ConfigError>;
}

pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Accepts `value` iff it is at least [`MIN_DIMENSION_VALUE`]. NaN is rejected.
pub fn validate_dimension(dimension: Dimension, value: f64) -> Result<()> {
    if value.is_nan() || value < MIN_DIMENSION_VALUE {
        return Err(BoxError::InvalidDimension {
            dimension,
            value,
            min: MIN_DIMENSION_VALUE,
        });
    }
    Ok(())
}

pub fn validate_log_level(field_name: &str, level: &str) -> std::result::Result<(), ConfigError> {
    if level.trim().is_empty() {
        return Err(ConfigError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: level.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }

    if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        return Err(ConfigError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: level.to_string(),
            reason: format!("Log level must be one of: {}", LOG_LEVELS.join(", ")),
        });
    }

    Ok(())
}

pub fn validate_triple(field_name: &str, values: &[f64]) -> std::result::Result<(f64, f64, f64), ConfigError> {
    match values {
        [height, width, depth] => Ok((*height, *width, *depth)),
        _ => Err(ConfigError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{:?}", values),
            reason: format!("Expected 3 values (height,width,depth), got {}", values.len()),
        }),
    }
}
