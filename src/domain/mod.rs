// Domain layer: the cuboid value type and the ports the demo driver reads from.

pub mod dimension;
pub mod model;
pub mod ports;
