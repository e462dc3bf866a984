use std::time::Instant;

use log::trace;

use crate::core::actions::generate_field::generate_field_rayon::generate_field_rayon;
use crate::core::actions::generate_field::generate_field_serial::generate_field_serial;
use crate::core::data::grid::Grid;
use crate::core::data::region::Region;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::errors::FieldError;
use crate::core::fractals::mandelbrot::params::FieldParams;

/// How the pixels of a field are scheduled. Both produce identical grids.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum GeneratorKind {
    Serial,
    #[default]
    Parallel,
}

/// Escape-time grid of `region` sampled at `width` x `height` points.
///
/// Every input is validated before any point is evaluated; on error no grid
/// is produced.
pub fn generate(
    region: &Region,
    width: u32,
    height: u32,
    max_iterations: u32,
) -> Result<Grid, FieldError> {
    let params = FieldParams::new(*region, Resolution { width, height }, max_iterations)?;

    generate_field(&params, GeneratorKind::Serial)
}

pub fn generate_field(params: &FieldParams, kind: GeneratorKind) -> Result<Grid, FieldError> {
    let algorithm = MandelbrotAlgorithm::new(params);
    let resolution = params.resolution();
    let start = Instant::now();

    let cells = match kind {
        GeneratorKind::Serial => generate_field_serial(resolution, &algorithm)?,
        GeneratorKind::Parallel => generate_field_rayon(resolution, &algorithm)?,
    };

    trace!(
        "generated {}x{} field ({:?}) in {:?}",
        resolution.width,
        resolution.height,
        kind,
        start.elapsed()
    );

    Ok(Grid::from_field(resolution, cells))
}
