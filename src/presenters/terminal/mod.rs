pub mod layout;
pub mod presenter;
