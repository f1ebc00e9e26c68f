// Domain layer: profile data model and the ports to external systems.

pub mod model;
pub mod ports;
pub mod profile;
