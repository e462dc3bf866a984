use std::time::Duration;

use crate::core::data::grid::Grid;
use crate::core::data::region::Region;

/// One generated view, handed to a presenter and then dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub generation: u64,
    /// Zero-based animation step that produced this frame, if any.
    pub step: Option<u32>,
    pub region: Region,
    pub grid: Grid,
    pub max_iterations: u32,
    pub scale_label: String,
    pub generation_duration: Duration,
}
