// Domain layer: models and ports (interfaces). No knowledge of reqwest or
// the filesystem layout beyond paths.

pub mod model;
pub mod ports;
