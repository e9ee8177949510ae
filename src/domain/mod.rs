// Domain layer: models and ports. The only external type referenced is the
// structured-document value the roster is decoded from.

pub mod model;
pub mod ports;
