use crate::core::actions::generate_field::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;

/// Evaluates `algorithm` at every pixel, row by row, on the calling thread.
pub fn generate_field_serial<Alg: FractalAlgorithm>(
    resolution: Resolution,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    (0..resolution.height)
        .flat_map(|y| (0..resolution.width).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
