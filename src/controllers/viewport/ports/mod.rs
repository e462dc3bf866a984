//! Port definitions for the viewport controller.
//!
//! Traits the drivers use to reach the display, the input device and the
//! clock, so the controller itself never depends on a terminal or window.

pub mod event_source;
pub mod pacer;
pub mod presenter;
