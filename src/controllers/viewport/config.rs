use std::error::Error;
use std::fmt;
use std::time::Duration;

use crate::core::actions::generate_field::generate_field::GeneratorKind;
use crate::core::data::complex::Complex;
use crate::core::data::region::{Region, RegionError};
use crate::core::data::resolution::Resolution;

const INTERACTIVE_SIZE: u32 = 800;
const INTERACTIVE_MAX_ITERATIONS: u32 = 200;
const INTERACTIVE_ZOOM_FACTOR: f64 = 0.25;

const ANIMATED_SIZE: u32 = 400;
const ANIMATED_MAX_ITERATIONS: u32 = 400;
const ANIMATED_ZOOM_FACTOR: f64 = 0.7;
const ANIMATED_TARGET: Complex = Complex {
    real: -0.585,
    imag: -0.447,
};
const ANIMATED_STEPS: u32 = 30;
const ANIMATED_FRAME_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ModeKind {
    Interactive,
    Animated,
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interactive => write!(f, "interactive"),
            Self::Animated => write!(f, "animated"),
        }
    }
}

/// Fixed-target zoom sequence.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationConfig {
    pub target: Complex,
    pub steps: u32,
    pub frame_delay: Duration,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            target: ANIMATED_TARGET,
            steps: ANIMATED_STEPS,
            frame_delay: ANIMATED_FRAME_DELAY,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ModeConfig {
    Interactive,
    Animated(AnimationConfig),
}

impl ModeConfig {
    #[must_use]
    pub fn kind(&self) -> ModeKind {
        match self {
            Self::Interactive => ModeKind::Interactive,
            Self::Animated(_) => ModeKind::Animated,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ConfigError {
    InvalidRegion(RegionError),
    InvalidResolution { width: u32, height: u32 },
    InvalidIterationBudget,
    InvalidZoomFactor(f64),
    NonFiniteTarget(Complex),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRegion(err) => write!(f, "invalid initial region: {}", err),
            Self::InvalidResolution { width, height } => {
                write!(f, "resolution must be positive: {}x{}", width, height)
            }
            Self::InvalidIterationBudget => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidZoomFactor(factor) => {
                write!(f, "zoom factor must be between 0 and 1 (exclusive): {}", factor)
            }
            Self::NonFiniteTarget(target) => {
                write!(
                    f,
                    "zoom target must be finite: ({}, {})",
                    target.real, target.imag
                )
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRegion(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RegionError> for ConfigError {
    fn from(err: RegionError) -> Self {
        Self::InvalidRegion(err)
    }
}

/// Startup settings for a [`ViewportController`].
///
/// `Default` is the click-to-zoom preset; [`ViewportConfig::animated`] is the
/// fixed-target zoom sequence.
///
/// [`ViewportController`]: crate::controllers::viewport::ViewportController
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportConfig {
    pub initial_region: Region,
    pub resolution: Resolution,
    pub max_iterations: u32,
    pub zoom_factor: f64,
    pub generator: GeneratorKind,
    pub mode: ModeConfig,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            initial_region: Region::FULL_VIEW,
            resolution: Resolution {
                width: INTERACTIVE_SIZE,
                height: INTERACTIVE_SIZE,
            },
            max_iterations: INTERACTIVE_MAX_ITERATIONS,
            zoom_factor: INTERACTIVE_ZOOM_FACTOR,
            generator: GeneratorKind::default(),
            mode: ModeConfig::Interactive,
        }
    }
}

impl ViewportConfig {
    #[must_use]
    pub fn animated() -> Self {
        Self {
            initial_region: Region::FULL_VIEW,
            resolution: Resolution {
                width: ANIMATED_SIZE,
                height: ANIMATED_SIZE,
            },
            max_iterations: ANIMATED_MAX_ITERATIONS,
            zoom_factor: ANIMATED_ZOOM_FACTOR,
            generator: GeneratorKind::default(),
            mode: ModeConfig::Animated(AnimationConfig::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let region = self.initial_region;
        Region::new(region.xmin(), region.xmax(), region.ymin(), region.ymax())?;

        if self.resolution.is_empty() {
            return Err(ConfigError::InvalidResolution {
                width: self.resolution.width,
                height: self.resolution.height,
            });
        }

        if self.max_iterations == 0 {
            return Err(ConfigError::InvalidIterationBudget);
        }

        if !(self.zoom_factor > 0.0 && self.zoom_factor < 1.0) {
            return Err(ConfigError::InvalidZoomFactor(self.zoom_factor));
        }

        if let ModeConfig::Animated(animation) = self.mode {
            if !animation.target.is_finite() {
                return Err(ConfigError::NonFiniteTarget(animation.target));
            }
        }

        Ok(())
    }
}
