use serde::{Deserialize, Serialize};

/// Height, width and depth as plain numbers, before any validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub height: f64,
    pub width: f64,
    pub depth: f64,
}

impl Dimensions {
    pub fn new(height: f64, width: f64, depth: f64) -> Self {
        Self { height, width, depth }
    }
}

impl From<(f64, f64, f64)> for Dimensions {
    fn from((height, width, depth): (f64, f64, f64)) -> Self {
        Self::new(height, width, depth)
    }
}

/// Supplies the sizes the demo driver builds and resizes boxes with.
pub trait ScenarioProvider {
    fn initial(&self) -> Dimensions;
    fn resize(&self) -> Dimensions;
}
