// Domain layer: postcode value types and the rule port. No dependency on config or logging setup.

pub mod model;
pub mod ports;
