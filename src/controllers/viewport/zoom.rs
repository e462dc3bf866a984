use crate::core::data::complex::Complex;
use crate::core::data::region::{Region, RegionError};

/// Fixed-factor shrink of both axes around a chosen centre.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomPolicy {
    factor: f64,
}

impl ZoomPolicy {
    /// `factor` must lie in `(0, 1)`; validated by the viewport config.
    #[must_use]
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }

    /// The next region: `factor` times the extent of `region`, centred on
    /// `center`. Fails once the extent can no longer be represented around
    /// `center` at double precision.
    pub fn zoom(&self, region: &Region, center: Complex) -> Result<Region, RegionError> {
        Region::centered_on(
            center,
            region.width() * self.factor,
            region.height() * self.factor,
        )
    }
}
