// Domain layer: content records and the ports the rest of the crate talks through.

pub mod model;
pub mod ports;
