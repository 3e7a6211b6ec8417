use crate::domain::dimension::Dimension;
use crate::utils::error::Result;
use crate::utils::validation::validate_dimension;
use std::fmt;

/// A rectangular solid whose sides never drop below
/// [`MIN_DIMENSION_VALUE`](crate::MIN_DIMENSION_VALUE).
///
/// Every mutation goes through [`Cuboid::set`], so a rejected value never
/// reaches a field. Volume is derived on each call.
#[derive(Debug, Clone, Copy)]
pub struct Cuboid {
    height: f64,
    width: f64,
    depth: f64,
}

impl Default for Cuboid {
    fn default() -> Self {
        Self {
            height: 1.0,
            width: 1.0,
            depth: 1.0,
        }
    }
}

impl Cuboid {
    /// Builds a cuboid from caller-supplied sides, validated the same way as
    /// [`Cuboid::resize`]. Nothing is returned unless all three are valid.
    pub fn new(height: f64, width: f64, depth: f64) -> Result<Self> {
        let mut cuboid = Self::default();
        cuboid.resize(height, width, depth)?;
        Ok(cuboid)
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Height => self.height,
            Dimension::Width => self.width,
            Dimension::Depth => self.depth,
        }
    }

    pub fn volume(&self) -> f64 {
        self.height * self.width * self.depth
    }

    pub fn set_height(&mut self, height: f64) -> Result<()> {
        self.set(Dimension::Height, height)
    }

    pub fn set_width(&mut self, width: f64) -> Result<()> {
        self.set(Dimension::Width, width)
    }

    pub fn set_depth(&mut self, depth: f64) -> Result<()> {
        self.set(Dimension::Depth, depth)
    }

    /// Validates `value` and commits it to `dimension`. On error the field keeps its previous value.
    pub fn set(&mut self, dimension: Dimension, value: f64) -> Result<()> {
        if let Err(e) = validate_dimension(dimension, value) {
            tracing::debug!("Rejected {} = {}: {}", dimension, value, e);
            return Err(e);
        }

        let field = match dimension {
            Dimension::Height => &mut self.height,
            Dimension::Width => &mut self.width,
            Dimension::Depth => &mut self.depth,
        };
        *field = value;
        tracing::debug!("Set {} to {}", dimension, value);
        Ok(())
    }

    /// Assigns height, width, then depth, stopping at the first invalid value.
    ///
    /// Assignments are not rolled back: if `depth` is rejected, the new height
    /// and width have already been committed.
    pub fn resize(&mut self, height: f64, width: f64, depth: f64) -> Result<()> {
        self.set_height(height)?;
        self.set_width(width)?;
        self.set_depth(depth)?;
        tracing::debug!("Resized to {} x {} x {}", height, width, depth);
        Ok(())
    }
}

impl fmt::Display for Cuboid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for dimension in Dimension::ALL {
            writeln!(f, "{}: {:.6}", dimension, self.get(dimension))?;
        }
        write!(f, "volume: {:.6}", self.volume())
    }
}
