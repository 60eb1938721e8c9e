// Domain layer: the component contract and the selection vocabulary. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
