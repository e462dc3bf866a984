use crate::core::data::region::Region;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::errors::FieldError;

/// Validated inputs for one escape-time field.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FieldParams {
    region: Region,
    resolution: Resolution,
    max_iterations: u32,
}

impl FieldParams {
    pub fn new(region: Region, resolution: Resolution, max_iterations: u32) -> Result<Self, FieldError> {
        // A `Region` is checked on construction; check again so params built
        // from any source share one rejection path.
        Region::new(region.xmin(), region.xmax(), region.ymin(), region.ymax())?;

        if resolution.is_empty() {
            return Err(FieldError::InvalidResolution {
                width: resolution.width,
                height: resolution.height,
            });
        }

        if max_iterations == 0 {
            return Err(FieldError::InvalidIterationBudget);
        }

        Ok(Self {
            region,
            resolution,
            max_iterations,
        })
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
