pub mod cli;
pub mod script;
pub mod terminal;
