use std::error::Error;
use std::time::Duration;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Pace {
    Continue,
    Stop,
}

pub trait PacerPort {
    /// Waits between two animation frames.
    fn pause(&mut self, delay: Duration) -> Result<Pace, Box<dyn Error>>;
}

/// Blocks the calling thread for the whole delay.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleepPacer;

impl PacerPort for ThreadSleepPacer {
    fn pause(&mut self, delay: Duration) -> Result<Pace, Box<dyn Error>> {
        std::thread::sleep(delay);
        Ok(Pace::Continue)
    }
}
