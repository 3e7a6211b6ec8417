pub mod toml_config;

pub use toml_config::DemoConfig;

#[cfg(feature = "cli")]
use crate::utils::error::ConfigError;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_log_level, validate_triple, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "box-demo")]
#[command(about = "Demonstrates a box with validated dimensions")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Dimensions of the sized box, as height,width,depth
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub initial: Option<Vec<f64>>,

    /// Dimensions the default box is resized to, as height,width,depth
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub resize: Option<Vec<f64>>,

    /// Override the log level from the config file
    #[arg(long)]
    pub log_level: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the config file (or defaults) and layers the command-line overrides on top.
    pub fn resolve(&self) -> Result<DemoConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::from_file(path)?,
            None => DemoConfig::default(),
        };

        if let Some(values) = &self.initial {
            config.initial = validate_triple("initial", values)?.into();
        }
        if let Some(values) = &self.resize {
            config.resize = validate_triple("resize", values)?.into();
        }
        if let Some(level) = &self.log_level {
            config.logging = Some(toml_config::LoggingConfig {
                level: Some(level.clone()),
            });
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(values) = &self.initial {
            validate_triple("initial", values)?;
        }
        if let Some(values) = &self.resize {
            validate_triple("resize", values)?;
        }
        if let Some(level) = &self.log_level {
            validate_log_level("log_level", level)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::domain::ports::Dimensions;

    #[test]
    fn test_parse_overrides() {
        let cli = CliConfig::parse_from(["box-demo", "--initial", "1,2,3", "--resize", "4.5,-1,6"]);
        assert!(cli.validate().is_ok());

        let config = cli.resolve().unwrap();
        assert_eq!(config.initial, Dimensions::new(1.0, 2.0, 3.0));
        assert_eq!(config.resize, Dimensions::new(4.5, -1.0, 6.0));
    }

    #[test]
    fn test_defaults_without_arguments() {
        let cli = CliConfig::parse_from(["box-demo"]);
        let config = cli.resolve().unwrap();
        assert_eq!(config.initial, DemoConfig::default().initial);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_wrong_arity_is_rejected() {
        let cli = CliConfig::parse_from(["box-demo", "--resize", "1,2"]);
        assert!(cli.validate().is_err());
        assert!(cli.resolve().is_err());
    }

    #[test]
    fn test_bad_log_level_is_rejected() {
        let cli = CliConfig::parse_from(["box-demo", "--log-level", "chatty"]);
        assert!(cli.validate().is_err());
    }
}
