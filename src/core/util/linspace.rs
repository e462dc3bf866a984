/// `count` evenly spaced samples over `[start, stop]`, both ends included.
///
/// Samples are computed as `start + i * step` with the final sample pinned to
/// `stop`, so the values match numpy's `linspace` bit for bit. A single sample
/// is `start`; zero samples is an empty vector.
#[must_use]
pub fn linspace(start: f64, stop: f64, count: u32) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / f64::from(count - 1);
            let mut samples: Vec<f64> = (0..count)
                .map(|i| start + f64::from(i) * step)
                .collect();

            if let Some(last) = samples.last_mut() {
                *last = stop;
            }

            samples
        }
    }
}
