use std::error::Error;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use log::trace;

use crate::controllers::viewport::events::click::{ClickEvent, ViewerEvent};
use crate::controllers::viewport::ports::event_source::EventSourcePort;
use crate::controllers::viewport::ports::pacer::{Pace, PacerPort};
use crate::presenters::terminal::layout::SharedMapping;

#[derive(Debug, Copy, Clone, PartialEq)]
enum Translated {
    Viewer(ViewerEvent),
    Quit,
    Ignored,
}

/// Mouse and keyboard input from the terminal.
///
/// Left clicks are mapped onto the plane through the mapping recorded by the
/// terminal presenter. `r` resets the view; `q`, Esc and Ctrl-C close.
pub struct TerminalEvents {
    mapping: SharedMapping,
}

impl TerminalEvents {
    pub fn new(mapping: SharedMapping) -> Self {
        Self { mapping }
    }

    fn translate(&self, event: Event) -> Translated {
        match event {
            Event::Key(key) => translate_key(key),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    let click = match self.mapping.get() {
                        Some(mapping) => mapping.click_at(mouse.column, mouse.row),
                        None => ClickEvent::Outside,
                    };
                    Translated::Viewer(ViewerEvent::Click(click))
                }
                _ => Translated::Ignored,
            },
            _ => Translated::Ignored,
        }
    }
}

fn translate_key(key: KeyEvent) -> Translated {
    if key.kind != KeyEventKind::Press {
        return Translated::Ignored;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Translated::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Translated::Quit,
        KeyCode::Char('r') => Translated::Viewer(ViewerEvent::Reset),
        _ => Translated::Ignored,
    }
}

impl EventSourcePort for TerminalEvents {
    fn next_event(&mut self) -> Result<Option<ViewerEvent>, Box<dyn Error>> {
        loop {
            match self.translate(event::read()?) {
                Translated::Viewer(event) => return Ok(Some(event)),
                Translated::Quit => return Ok(None),
                Translated::Ignored => continue,
            }
        }
    }
}

impl PacerPort for TerminalEvents {
    /// Waits out the delay while watching for a quit key.
    fn pause(&mut self, delay: Duration) -> Result<Pace, Box<dyn Error>> {
        let deadline = Instant::now() + delay;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !event::poll(remaining)? {
                return Ok(Pace::Continue);
            }

            match self.translate(event::read()?) {
                Translated::Quit => return Ok(Pace::Stop),
                other => trace!("ignoring {:?} during animation", other),
            }
        }
    }
}
