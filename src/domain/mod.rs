// Domain layer: patch models and ports (interfaces).

pub mod model;
pub mod ports;
