use rayon::prelude::*;

use crate::core::actions::generate_field::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;

/// Evaluates `algorithm` at every pixel using rayon's work-stealing pool.
///
/// Rows are computed independently and stitched back together in order, so
/// the output is identical to [`generate_field_serial`].
///
/// [`generate_field_serial`]: super::generate_field_serial::generate_field_serial
pub fn generate_field_rayon<Alg>(
    resolution: Resolution,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let row_width = resolution.width as usize;

    let rows: Result<Vec<Vec<Alg::Success>>, Alg::Failure> = (0..resolution.height)
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(row_width);

            for x in 0..resolution.width {
                row.push(algorithm.compute(Point { x, y })?);
            }

            Ok(row)
        })
        .collect();

    // Flatten rows into row-major order
    rows.map(|r| r.into_iter().flatten().collect())
}
