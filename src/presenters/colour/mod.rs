#[allow(clippy::module_inception)]
pub mod colour;
pub mod magma;
