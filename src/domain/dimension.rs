use std::fmt;

/// Smallest length any side of a [`Cuboid`](crate::Cuboid) may take.
pub const MIN_DIMENSION_VALUE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Height,
    Width,
    Depth,
}

impl Dimension {
    /// Order in which `resize` assigns and `Display` renders.
    pub const ALL: [Dimension; 3] = [Dimension::Height, Dimension::Width, Dimension::Depth];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Height => "height",
            Dimension::Width => "width",
            Dimension::Depth => "depth",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
