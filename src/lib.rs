pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::DemoConfig;
pub use crate::core::demo::DemoEngine;
pub use domain::dimension::{Dimension, MIN_DIMENSION_VALUE};
pub use domain::model::Cuboid;
pub use domain::ports::{Dimensions, ScenarioProvider};
pub use utils::error::{BoxError, ConfigError, Result};
