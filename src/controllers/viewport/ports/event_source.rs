use std::error::Error;

use crate::controllers::viewport::events::click::ViewerEvent;

pub trait EventSourcePort {
    /// Blocks until the next event. `None` once the source is closed.
    fn next_event(&mut self) -> Result<Option<ViewerEvent>, Box<dyn Error>>;
}
