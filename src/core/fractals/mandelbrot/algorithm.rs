use std::error::Error;
use std::fmt;

use crate::core::actions::generate_field::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::params::FieldParams;
use crate::core::util::linspace::linspace;

/// Magnitude above which an orbit is known to diverge.
pub const ESCAPE_RADIUS: f64 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SampleError {
    PointOutsideGrid { point: Point, resolution: Resolution },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideGrid { point, resolution } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} grid",
                    point.x, point.y, resolution.width, resolution.height
                )
            }
        }
    }
}

impl Error for SampleError {}

/// Number of iterations of `z = z² + c`, starting from zero, that `c`
/// survives before `|z| > 2` is observed.
///
/// The magnitude is tested at the top of each iteration, before squaring, so
/// `c = 0` never escapes and `c = 2` escapes at step 2. Returns
/// `max_iterations` when no escape is seen.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        if z.magnitude() > ESCAPE_RADIUS {
            return iteration;
        }
        z = z * z + c;
    }

    max_iterations
}

/// Escape-time sampler for one region at one resolution.
///
/// The axis samples are computed once up front; `compute` only looks them up.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    resolution: Resolution,
    max_iterations: u32,
    real_samples: Vec<f64>,
    imag_samples: Vec<f64>,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(params: &FieldParams) -> Self {
        let region = params.region();
        let resolution = params.resolution();

        Self {
            resolution,
            max_iterations: params.max_iterations(),
            real_samples: linspace(region.xmin(), region.xmax(), resolution.width),
            imag_samples: linspace(region.ymin(), region.ymax(), resolution.height),
        }
    }

    /// The complex point sampled at `pixel`.
    pub fn point_at(&self, pixel: Point) -> Result<Complex, SampleError> {
        match (
            self.real_samples.get(pixel.x as usize),
            self.imag_samples.get(pixel.y as usize),
        ) {
            (Some(&real), Some(&imag)) => Ok(Complex { real, imag }),
            _ => Err(SampleError::PointOutsideGrid {
                point: pixel,
                resolution: self.resolution,
            }),
        }
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = SampleError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = self.point_at(pixel)?;

        Ok(escape_time(c, self.max_iterations))
    }
}
