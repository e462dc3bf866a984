use std::time::Instant;

use log::{debug, trace, warn};

use crate::controllers::viewport::config::{
    AnimationConfig, ConfigError, ModeConfig, ModeKind, ViewportConfig,
};
use crate::controllers::viewport::data::frame::Frame;
use crate::controllers::viewport::errors::ViewportError;
use crate::controllers::viewport::events::click::ClickEvent;
use crate::controllers::viewport::state::{AnimationState, InteractiveState, ViewState};
use crate::controllers::viewport::zoom::ZoomPolicy;
use crate::core::actions::generate_field::generate_field::{GeneratorKind, generate_field};
use crate::core::data::complex::Complex;
use crate::core::data::region::Region;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::params::FieldParams;
use crate::core::util::scale_label::scale_label;

/// Owns the live region and turns zoom triggers into freshly generated frames.
///
/// The region only changes after a frame for the new region has been
/// generated successfully; on any error the region, the state and the step
/// counter are left as they were.
#[derive(Debug)]
pub struct ViewportController {
    initial_region: Region,
    region: Region,
    resolution: Resolution,
    max_iterations: u32,
    generator: GeneratorKind,
    zoom: ZoomPolicy,
    animation: Option<AnimationConfig>,
    state: ViewState,
    generation: u64,
}

impl ViewportController {
    pub fn new(config: ViewportConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let (animation, state) = match config.mode {
            ModeConfig::Interactive => (
                None,
                ViewState::Interactive(InteractiveState::Regenerating),
            ),
            ModeConfig::Animated(animation) => (
                Some(animation),
                ViewState::Animated(AnimationState::initial(animation.steps)),
            ),
        };

        Ok(Self {
            initial_region: config.initial_region,
            region: config.initial_region,
            resolution: config.resolution,
            max_iterations: config.max_iterations,
            generator: config.generator,
            zoom: ZoomPolicy::new(config.zoom_factor),
            animation,
            state,
            generation: 0,
        })
    }

    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    #[must_use]
    pub fn mode(&self) -> ModeKind {
        match self.state {
            ViewState::Interactive(_) => ModeKind::Interactive,
            ViewState::Animated(_) => ModeKind::Animated,
        }
    }

    #[must_use]
    pub fn animation(&self) -> Option<AnimationConfig> {
        self.animation
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Generates the initial view of an interactive session and waits for
    /// clicks afterwards.
    pub fn start(&mut self) -> Result<Frame, ViewportError> {
        self.expect_mode(ModeKind::Interactive)?;

        let frame = self.build_frame(self.region, None)?;
        self.state = ViewState::Interactive(InteractiveState::Idle);

        Ok(frame)
    }

    /// Zooms around the clicked point.
    ///
    /// Clicks outside the plotted area or outside the current region are
    /// ignored and produce no frame.
    pub fn on_click(&mut self, click: ClickEvent) -> Result<Option<Frame>, ViewportError> {
        let ViewState::Interactive(previous) = self.state else {
            return Err(ViewportError::WrongMode {
                expected: ModeKind::Interactive,
                actual: self.mode(),
            });
        };

        let Some(center) = click.point().filter(|point| self.region.contains_point(*point))
        else {
            trace!("ignoring click {:?} outside {}", click, self.region);
            return Ok(None);
        };

        self.state = ViewState::Interactive(InteractiveState::Regenerating);

        match self.zoom_to(center, None) {
            Ok(frame) => {
                self.state = ViewState::Interactive(InteractiveState::Idle);
                Ok(Some(frame))
            }
            Err(err) => {
                warn!("zoom to ({}, {}) rejected: {}", center.real, center.imag, err);
                self.state = ViewState::Interactive(previous);
                Err(err)
            }
        }
    }

    /// Produces the next frame of the animated zoom, or `None` once every
    /// step has been produced.
    pub fn advance(&mut self) -> Result<Option<Frame>, ViewportError> {
        let (ViewState::Animated(state), Some(animation)) = (self.state, self.animation) else {
            return Err(ViewportError::WrongMode {
                expected: ModeKind::Animated,
                actual: self.mode(),
            });
        };

        let AnimationState::Stepping(step) = state else {
            return Ok(None);
        };

        let frame = self.zoom_to(animation.target, Some(step)).inspect_err(|err| {
            warn!("animation step {} rejected: {}", step, err);
        })?;

        self.state = ViewState::Animated(AnimationState::after(step, animation.steps));

        Ok(Some(frame))
    }

    /// Returns to the initial region. An animation restarts from step zero.
    pub fn reset(&mut self) -> Result<Frame, ViewportError> {
        let frame = self.build_frame(self.initial_region, None)?;

        self.region = self.initial_region;
        self.state = match (self.state, self.animation) {
            (ViewState::Animated(_), Some(animation)) => {
                ViewState::Animated(AnimationState::initial(animation.steps))
            }
            _ => ViewState::Interactive(InteractiveState::Idle),
        };

        debug!("viewport reset to {}", self.region);

        Ok(frame)
    }

    fn zoom_to(&mut self, center: Complex, step: Option<u32>) -> Result<Frame, ViewportError> {
        let next_region = self.zoom.zoom(&self.region, center)?;
        let frame = self.build_frame(next_region, step)?;

        debug!("zoomed from {} to {}", self.region, next_region);
        self.region = next_region;

        Ok(frame)
    }

    fn build_frame(&mut self, region: Region, step: Option<u32>) -> Result<Frame, ViewportError> {
        let params = FieldParams::new(region, self.resolution, self.max_iterations)?;

        let start = Instant::now();
        let grid = generate_field(&params, self.generator)?;
        let generation_duration = start.elapsed();

        self.generation += 1;

        debug!(
            "frame {} generated in {:?} ({}x{}, {} iterations)",
            self.generation,
            generation_duration,
            self.resolution.width,
            self.resolution.height,
            self.max_iterations
        );

        Ok(Frame {
            generation: self.generation,
            step,
            region,
            grid,
            max_iterations: self.max_iterations,
            scale_label: scale_label(&region),
            generation_duration,
        })
    }

    fn expect_mode(&self, expected: ModeKind) -> Result<(), ViewportError> {
        let actual = self.mode();

        if actual != expected {
            return Err(ViewportError::WrongMode { expected, actual });
        }

        Ok(())
    }
}
