//! Viewport controller for click-driven and animated zooming.
//!
//! The controller owns the visible region and regenerates the escape-time
//! field whenever it changes. It is driven from outside:
//! - **Interactive**: the host forwards clicks to `on_click`
//! - **Animated**: the host calls `advance` on its own schedule
//!
//! Frames leave through the `PresenterPort`; the drivers in `drivers` wire a
//! controller to concrete ports.

pub mod config;
mod controller;
pub mod data;
pub mod drivers;
pub mod errors;
pub mod events;
pub mod ports;
pub mod state;
pub mod zoom;

pub use config::{AnimationConfig, ConfigError, ModeConfig, ModeKind, ViewportConfig};
pub use controller::ViewportController;
pub use data::frame::Frame;
pub use errors::{RunError, ViewportError};
pub use events::click::{ClickEvent, ViewerEvent};
pub use events::render_event::RenderEvent;
pub use ports::{event_source::EventSourcePort, pacer::PacerPort, presenter::PresenterPort};
