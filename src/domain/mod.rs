// Domain layer: response model and the client port. No I/O here.

pub mod model;
pub mod ports;
