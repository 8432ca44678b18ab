// Domain layer: the install plan, its outcome, and the config port.

pub mod model;
pub mod ports;
