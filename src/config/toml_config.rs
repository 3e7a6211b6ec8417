use crate::domain::ports::{Dimensions, ScenarioProvider};
use crate::utils::error::ConfigError;
use crate::utils::validation::{validate_log_level, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Sides of the box built with explicit dimensions.
    pub initial: Dimensions,
    /// Sides the default box is resized to.
    pub resize: Dimensions,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            initial: Dimensions::new(10.5, 12.0, 13.3),
            resize: Dimensions::new(96.8, 8.95, 10.0),
            logging: None,
        }
    }
}

impl DemoConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl ScenarioProvider for DemoConfig {
    fn initial(&self) -> Dimensions {
        self.initial
    }

    fn resize(&self) -> Dimensions {
        self.resize
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(level) = self.log_level() {
            validate_log_level("logging.level", level)?;
        }
        Ok(())
    }
}
