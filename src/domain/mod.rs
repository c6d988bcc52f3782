// Domain layer: edit model and the storage port. No I/O here.

pub mod model;
pub mod ports;
