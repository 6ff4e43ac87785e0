// Domain layer: cart models and the ports external collaborators are consumed through.

pub mod model;
pub mod ports;
