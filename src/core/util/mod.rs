pub mod linspace;
pub mod scale_label;
