use std::error::Error;
use std::fmt;

use crate::controllers::viewport::config::ModeKind;
use crate::core::data::region::RegionError;
use crate::core::fractals::mandelbrot::errors::FieldError;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewportError {
    Field(FieldError),
    WrongMode { expected: ModeKind, actual: ModeKind },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(err) => write!(f, "field generation failed: {}", err),
            Self::WrongMode { expected, actual } => {
                write!(
                    f,
                    "operation needs {} mode but the viewport is {}",
                    expected, actual
                )
            }
        }
    }
}

impl Error for ViewportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field(err) => Some(err),
            Self::WrongMode { .. } => None,
        }
    }
}

impl From<FieldError> for ViewportError {
    fn from(err: FieldError) -> Self {
        Self::Field(err)
    }
}

impl From<RegionError> for ViewportError {
    fn from(err: RegionError) -> Self {
        Self::Field(FieldError::InvalidRegion(err))
    }
}

/// Why a driver loop stopped early.
#[derive(Debug)]
pub enum RunError {
    Viewport(ViewportError),
    Presenter(Box<dyn Error>),
    Input(Box<dyn Error>),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(err) => write!(f, "viewport error: {}", err),
            Self::Presenter(err) => write!(f, "presenter error: {}", err),
            Self::Input(err) => write!(f, "input error: {}", err),
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            Self::Presenter(err) => Some(err.as_ref()),
            Self::Input(err) => Some(err.as_ref()),
        }
    }
}

impl From<ViewportError> for RunError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}
