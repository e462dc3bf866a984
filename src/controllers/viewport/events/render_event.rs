use crate::controllers::viewport::data::frame::Frame;
use crate::controllers::viewport::errors::ViewportError;

#[derive(Debug)]
pub enum RenderEvent {
    Frame(Frame),
    Error(ViewportError),
}
