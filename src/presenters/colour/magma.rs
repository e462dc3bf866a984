use crate::core::data::grid::Grid;
use crate::presenters::colour::colour::Colour;

// Samples of matplotlib's "magma" palette at t = 0, 1/8, ..., 1.
const MAGMA_STOPS: [Colour; 9] = [
    Colour { r: 0, g: 0, b: 4 },
    Colour { r: 28, g: 16, b: 68 },
    Colour { r: 79, g: 18, b: 123 },
    Colour { r: 129, g: 37, b: 129 },
    Colour { r: 181, g: 54, b: 122 },
    Colour { r: 229, g: 80, b: 100 },
    Colour { r: 251, g: 135, b: 97 },
    Colour { r: 254, g: 194, b: 135 },
    Colour { r: 252, g: 253, b: 191 },
];

/// Magma gradient stretched over a value range, the way an image plot
/// auto-scales to its data: the lowest count is near black, the highest
/// (usually the set interior) is pale yellow.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MagmaColourMap {
    min: u32,
    max: u32,
}

impl MagmaColourMap {
    #[must_use]
    pub fn new(min: u32, max: u32) -> Self {
        Self {
            min: min.min(max),
            max: max.max(min),
        }
    }

    /// Scaled to the counts actually present in `grid`.
    #[must_use]
    pub fn for_grid(grid: &Grid) -> Self {
        let (min, max) = grid.value_range().unwrap_or((0, 0));
        Self::new(min, max)
    }

    #[must_use]
    pub fn map(&self, value: u32) -> Colour {
        let span = self.max - self.min;
        if span == 0 {
            return MAGMA_STOPS[0];
        }

        let clamped = value.clamp(self.min, self.max);
        let t = f64::from(clamped - self.min) / f64::from(span);

        let scaled = t * (MAGMA_STOPS.len() - 1) as f64;
        let index = (scaled.floor() as usize).min(MAGMA_STOPS.len() - 2);
        let local_t = scaled - index as f64;

        lerp(MAGMA_STOPS[index], MAGMA_STOPS[index + 1], local_t)
    }
}

fn lerp(from: Colour, to: Colour, t: f64) -> Colour {
    let channel = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;

    Colour {
        r: channel(from.r, to.r),
        g: channel(from.g, to.g),
        b: channel(from.b, to.b),
    }
}
