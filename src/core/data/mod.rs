pub mod complex;
pub mod grid;
pub mod point;
pub mod region;
pub mod resolution;
