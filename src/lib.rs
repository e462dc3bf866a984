pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use crate::core::actions::generate_field::generate_field::{generate, generate_field, GeneratorKind};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::grid::{Grid, GridError};
pub use crate::core::data::region::{Region, RegionError};
pub use crate::core::data::resolution::Resolution;
pub use crate::core::fractals::mandelbrot::errors::FieldError;
pub use crate::core::fractals::mandelbrot::params::FieldParams;
pub use crate::core::util::scale_label::scale_label;

pub use crate::controllers::viewport::drivers::RunSummary;
pub use crate::controllers::viewport::{
    AnimationConfig, ClickEvent, ConfigError, Frame, ModeConfig, ModeKind, RenderEvent, RunError,
    ViewerEvent, ViewportConfig, ViewportController, ViewportError,
};

pub use crate::input::cli::args::{Cli, Command};
pub use crate::input::cli::commands::run_viewer::RunViewerCommand;
