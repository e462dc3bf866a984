use std::error::Error;
use std::io::{self, BufRead};

use log::warn;

use crate::controllers::viewport::events::click::{ClickEvent, ViewerEvent};
use crate::controllers::viewport::ports::event_source::EventSourcePort;

/// Viewer events read one per line.
///
/// `x y` clicks the plane at (`x`, `y`), `outside` clicks off the image and
/// `r` or `reset` restores the initial view. Blank lines and lines starting
/// with `#` are skipped; end of input closes the viewer.
pub struct ScriptEvents<R: BufRead> {
    reader: R,
    line_number: usize,
}

impl ScriptEvents<io::StdinLock<'static>> {
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> ScriptEvents<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
        }
    }
}

fn parse_line(line: &str) -> Option<ViewerEvent> {
    match line {
        "outside" => return Some(ViewerEvent::Click(ClickEvent::Outside)),
        "r" | "reset" => return Some(ViewerEvent::Reset),
        _ => {}
    }

    let mut parts = line.split_whitespace();
    let x = parts.next()?.parse::<f64>().ok()?;
    let y = parts.next()?.parse::<f64>().ok()?;
    if parts.next().is_some() {
        return None;
    }

    Some(ViewerEvent::Click(ClickEvent::Plane { x, y }))
}

impl<R: BufRead> EventSourcePort for ScriptEvents<R> {
    fn next_event(&mut self) -> Result<Option<ViewerEvent>, Box<dyn Error>> {
        let mut line = String::new();

        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            match parse_line(trimmed) {
                Some(event) => return Ok(Some(event)),
                None => warn!("line {}: cannot parse {:?}", self.line_number, trimmed),
            }
        }
    }
}
