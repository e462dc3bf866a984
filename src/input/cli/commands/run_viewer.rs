use std::cell::Cell;
use std::error::Error;
use std::io::BufRead;
use std::rc::Rc;

use log::{debug, info};

use crate::controllers::viewport::config::{ModeKind, ViewportConfig};
use crate::controllers::viewport::drivers::animated::run_animated;
use crate::controllers::viewport::drivers::interactive::run_interactive;
use crate::controllers::viewport::drivers::RunSummary;
use crate::controllers::viewport::errors::RunError;
use crate::controllers::viewport::ports::event_source::EventSourcePort;
use crate::controllers::viewport::ports::pacer::{PacerPort, ThreadSleepPacer};
use crate::controllers::viewport::ports::presenter::PresenterPort;
use crate::controllers::viewport::state::{AnimationState, ViewState};
use crate::controllers::viewport::ViewportController;
use crate::input::script::events::ScriptEvents;
use crate::input::terminal::events::TerminalEvents;
use crate::input::terminal::session::TerminalSession;
use crate::presenters::logging::presenter::LogPresenter;
use crate::presenters::terminal::layout::SharedMapping;
use crate::presenters::terminal::presenter::TerminalPresenter;

const INTERACTIVE_HINT: &str = "click: zoom  r: reset  q: quit";
const ANIMATED_HINT: &str = "q: quit";

/// Builds a controller from `config` and runs it against the terminal, or
/// against the logger and stdin when headless.
pub struct RunViewerCommand {
    config: ViewportConfig,
    headless: bool,
}

impl RunViewerCommand {
    pub fn new(config: ViewportConfig, headless: bool) -> Self {
        Self { config, headless }
    }

    pub fn execute(&self) -> Result<RunSummary, Box<dyn Error>> {
        if self.headless {
            self.execute_headless(ScriptEvents::stdin())
        } else {
            self.execute_in_terminal()
        }
    }

    /// Frames go to the logger; interactive clicks are read from `input`.
    pub fn execute_headless<R: BufRead>(
        &self,
        input: ScriptEvents<R>,
    ) -> Result<RunSummary, Box<dyn Error>> {
        let mut controller = ViewportController::new(self.config)?;
        let mut presenter = LogPresenter::new();
        let mut events = input;
        let mut pacer = ThreadSleepPacer;

        info!(
            "running {} viewer headless at {}x{}, {} iterations",
            controller.mode(),
            controller.resolution().width,
            controller.resolution().height,
            controller.max_iterations()
        );

        let summary = drive(&mut controller, &mut presenter, &mut events, &mut pacer)?;

        Ok(summary)
    }

    fn execute_in_terminal(&self) -> Result<RunSummary, Box<dyn Error>> {
        let mut controller = ViewportController::new(self.config)?;
        let mapping: SharedMapping = Rc::new(Cell::new(None));
        let hint = match controller.mode() {
            ModeKind::Interactive => INTERACTIVE_HINT,
            ModeKind::Animated => ANIMATED_HINT,
        };

        let _session = TerminalSession::enter()?;
        let mut presenter = TerminalPresenter::stdout(Rc::clone(&mapping)).with_hint(hint);
        let mut events = TerminalEvents::new(mapping);

        let summary = match controller.mode() {
            ModeKind::Interactive => run_interactive(&mut controller, &mut presenter, &mut events)?,
            ModeKind::Animated => {
                let summary = run_animated(&mut controller, &mut presenter, &mut events)?;

                // Keep the last frame on screen until the user quits.
                if controller.state() == ViewState::Animated(AnimationState::Done) {
                    debug!("animation complete, waiting for quit");
                    while events.next_event()?.is_some() {}
                }

                summary
            }
        };

        Ok(summary)
    }
}

fn drive<P, E, T>(
    controller: &mut ViewportController,
    presenter: &mut P,
    events: &mut E,
    pacer: &mut T,
) -> Result<RunSummary, RunError>
where
    P: PresenterPort + ?Sized,
    E: EventSourcePort + ?Sized,
    T: PacerPort + ?Sized,
{
    match controller.mode() {
        ModeKind::Interactive => run_interactive(controller, presenter, events),
        ModeKind::Animated => run_animated(controller, presenter, pacer),
    }
}
