// Domain layer: the keyword record and the ports the controller and adapters meet at.

pub mod model;
pub mod ports;
