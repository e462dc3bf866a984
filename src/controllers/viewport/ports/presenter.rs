use std::error::Error;

use crate::controllers::viewport::events::render_event::RenderEvent;

pub trait PresenterPort {
    fn present(&mut self, event: RenderEvent) -> Result<(), Box<dyn Error>>;
}
