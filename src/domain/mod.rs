// Domain layer: value types and ports (interfaces). No filesystem access here.

pub mod model;
pub mod ports;
