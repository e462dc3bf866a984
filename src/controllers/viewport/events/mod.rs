pub mod click;
pub mod render_event;
