// Domain layer: models and ports. No transport or filesystem code lives here.

pub mod model;
pub mod ports;
