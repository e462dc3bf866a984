//! Loops that connect a [`ViewportController`] to its ports.
//!
//! [`ViewportController`]: crate::controllers::viewport::ViewportController

pub mod animated;
pub mod interactive;

/// What a driver did before it returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub frames_presented: u32,
    pub ignored_clicks: u32,
    pub failed_updates: u32,
}
