#[allow(clippy::module_inception)]
pub mod generate_field;
pub mod generate_field_rayon;
pub mod generate_field_serial;
pub mod ports;
