use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RegionError {
    NonFiniteBounds {
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
    },
    InvalidSize {
        width: f64,
        height: f64,
    },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteBounds {
                xmin,
                xmax,
                ymin,
                ymax,
            } => {
                write!(
                    f,
                    "region bounds must be finite: x [{}, {}], y [{}, {}]",
                    xmin, xmax, ymin, ymax
                )
            }
            Self::InvalidSize { width, height } => {
                write!(f, "region size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for RegionError {}

/// Visible rectangle of the complex plane.
///
/// Always satisfies `xmin < xmax` and `ymin < ymax` with finite bounds. A
/// region is a value: zooming produces a new one rather than editing it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Region {
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
}

impl Region {
    /// The whole set: x [-2, 1], y [-1.5, 1.5].
    pub const FULL_VIEW: Region = Region {
        xmin: -2.0,
        xmax: 1.0,
        ymin: -1.5,
        ymax: 1.5,
    };

    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self, RegionError> {
        if !(xmin.is_finite() && xmax.is_finite() && ymin.is_finite() && ymax.is_finite()) {
            return Err(RegionError::NonFiniteBounds {
                xmin,
                xmax,
                ymin,
                ymax,
            });
        }

        let width = xmax - xmin;
        let height = ymax - ymin;

        // Compare the bounds directly: a subtraction can round to a positive
        // value only when the bounds are already ordered.
        if xmin >= xmax || ymin >= ymax {
            return Err(RegionError::InvalidSize { width, height });
        }

        Ok(Self {
            xmin,
            xmax,
            ymin,
            ymax,
        })
    }

    /// Region of the given extent centred on `center`.
    pub fn centered_on(center: Complex, width: f64, height: f64) -> Result<Self, RegionError> {
        let half_width = width / 2.0;
        let half_height = height / 2.0;

        Self::new(
            center.real - half_width,
            center.real + half_width,
            center.imag - half_height,
            center.imag + half_height,
        )
    }

    #[must_use]
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    #[must_use]
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    #[must_use]
    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    #[must_use]
    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: (self.xmin + self.xmax) / 2.0,
            imag: (self.ymin + self.ymax) / 2.0,
        }
    }

    /// Inclusive on every edge. Non-finite points are never contained.
    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.xmin <= point.real
            && point.real <= self.xmax
            && self.ymin <= point.imag
            && point.imag <= self.ymax
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x [{}, {}] y [{}, {}]",
            self.xmin, self.xmax, self.ymin, self.ymax
        )
    }
}
