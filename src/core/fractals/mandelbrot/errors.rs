use std::{error::Error, fmt};

use crate::core::data::region::RegionError;
use crate::core::fractals::mandelbrot::algorithm::SampleError;

/// Rejections raised before any escape-time computation starts.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    InvalidRegion(RegionError),
    InvalidResolution { width: u32, height: u32 },
    InvalidIterationBudget,
    Sample(SampleError),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRegion(err) => write!(f, "invalid region: {}", err),
            Self::InvalidResolution { width, height } => {
                write!(f, "resolution must be positive: {}x{}", width, height)
            }
            Self::InvalidIterationBudget => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::Sample(err) => write!(f, "sampling failed: {}", err),
        }
    }
}

impl Error for FieldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRegion(err) => Some(err),
            Self::Sample(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RegionError> for FieldError {
    fn from(err: RegionError) -> Self {
        Self::InvalidRegion(err)
    }
}

impl From<SampleError> for FieldError {
    fn from(err: SampleError) -> Self {
        Self::Sample(err)
    }
}
