pub mod demo;

pub use crate::domain::model::Cuboid;
pub use crate::domain::ports::{Dimensions, ScenarioProvider};
pub use crate::utils::error::Result;
