use crate::core::data::complex::Complex;

/// A click as reported by the display, already in plane coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ClickEvent {
    Plane { x: f64, y: f64 },
    /// The click landed outside the plotted area.
    Outside,
}

impl ClickEvent {
    #[must_use]
    pub fn point(&self) -> Option<Complex> {
        match *self {
            Self::Plane { x, y } => Some(Complex { real: x, imag: y }),
            Self::Outside => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewerEvent {
    Click(ClickEvent),
    Reset,
}
