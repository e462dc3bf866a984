pub mod colour;
pub mod logging;
pub mod terminal;
