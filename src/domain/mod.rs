// Domain layer: core model and ports (interfaces). No dependencies beyond
// std/serde and the async plumbing the ports need.

pub mod model;
pub mod ports;
