use std::error::Error;

use log::{info, warn};

use crate::controllers::viewport::events::render_event::RenderEvent;
use crate::controllers::viewport::ports::presenter::PresenterPort;

/// Headless presenter: reports each frame through the logger.
#[derive(Debug, Default)]
pub struct LogPresenter {
    frames_seen: u64,
}

impl LogPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn frames_seen(&self) -> u64 {
        self.frames_seen
    }
}

impl PresenterPort for LogPresenter {
    fn present(&mut self, event: RenderEvent) -> Result<(), Box<dyn Error>> {
        match event {
            RenderEvent::Frame(frame) => {
                self.frames_seen += 1;

                let total = frame.grid.cells().len().max(1);
                let interior = frame.grid.count_equal_to(frame.max_iterations);

                info!(
                    "frame {}{}: {} | {} | interior {:.1}% | {:?}",
                    frame.generation,
                    frame
                        .step
                        .map(|step| format!(" (step {})", step + 1))
                        .unwrap_or_default(),
                    frame.region,
                    frame.scale_label,
                    100.0 * interior as f64 / total as f64,
                    frame.generation_duration
                );
            }
            RenderEvent::Error(err) => warn!("frame rejected: {}", err),
        }

        Ok(())
    }
}
