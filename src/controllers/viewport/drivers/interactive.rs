use log::{debug, info, warn};

use crate::controllers::viewport::controller::ViewportController;
use crate::controllers::viewport::drivers::RunSummary;
use crate::controllers::viewport::errors::RunError;
use crate::controllers::viewport::events::click::ViewerEvent;
use crate::controllers::viewport::events::render_event::RenderEvent;
use crate::controllers::viewport::ports::event_source::EventSourcePort;
use crate::controllers::viewport::ports::presenter::PresenterPort;

/// Presents the initial view, then zooms on every click until `events` is
/// closed.
///
/// A rejected zoom is reported to the presenter and the session carries on
/// with the previous view.
pub fn run_interactive<P, E>(
    controller: &mut ViewportController,
    presenter: &mut P,
    events: &mut E,
) -> Result<RunSummary, RunError>
where
    P: PresenterPort + ?Sized,
    E: EventSourcePort + ?Sized,
{
    let mut summary = RunSummary::default();

    let frame = controller.start()?;
    presenter
        .present(RenderEvent::Frame(frame))
        .map_err(RunError::Presenter)?;
    summary.frames_presented += 1;

    while let Some(event) = events.next_event().map_err(RunError::Input)? {
        let result = match event {
            ViewerEvent::Click(click) => controller.on_click(click),
            ViewerEvent::Reset => controller.reset().map(Some),
        };

        match result {
            Ok(Some(frame)) => {
                presenter
                    .present(RenderEvent::Frame(frame))
                    .map_err(RunError::Presenter)?;
                summary.frames_presented += 1;
            }
            Ok(None) => {
                debug!("event {:?} left the view unchanged", event);
                summary.ignored_clicks += 1;
            }
            Err(err) => {
                warn!("keeping previous view: {}", err);
                summary.failed_updates += 1;
                presenter
                    .present(RenderEvent::Error(err))
                    .map_err(RunError::Presenter)?;
            }
        }
    }

    info!(
        "interactive session closed after {} frames",
        summary.frames_presented
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::viewport::config::{ModeConfig, ViewportConfig};
    use crate::controllers::viewport::data::frame::Frame;
    use crate::controllers::viewport::errors::ViewportError;
    use crate::controllers::viewport::events::click::ClickEvent;
    use crate::core::data::region::Region;
    use crate::core::data::resolution::Resolution;
    use std::collections::VecDeque;
    use std::error::Error;
    use std::fmt;

    #[derive(Default)]
    struct RecordingPresenter {
        frames: Vec<Frame>,
        errors: Vec<ViewportError>,
    }

    impl PresenterPort for RecordingPresenter {
        fn present(&mut self, event: RenderEvent) -> Result<(), Box<dyn Error>> {
            match event {
                RenderEvent::Frame(frame) => self.frames.push(frame),
                RenderEvent::Error(err) => self.errors.push(err),
            }
            Ok(())
        }
    }

    struct ScriptedEvents {
        events: VecDeque<ViewerEvent>,
    }

    impl ScriptedEvents {
        fn new(events: Vec<ViewerEvent>) -> Self {
            Self {
                events: events.into(),
            }
        }
    }

    impl EventSourcePort for ScriptedEvents {
        fn next_event(&mut self) -> Result<Option<ViewerEvent>, Box<dyn Error>> {
            Ok(self.events.pop_front())
        }
    }

    #[derive(Debug)]
    struct DisplayGone;

    impl fmt::Display for DisplayGone {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "display gone")
        }
    }

    impl Error for DisplayGone {}

    struct FailingPresenter;

    impl PresenterPort for FailingPresenter {
        fn present(&mut self, _: RenderEvent) -> Result<(), Box<dyn Error>> {
            Err(Box::new(DisplayGone))
        }
    }

    fn controller() -> ViewportController {
        ViewportController::new(ViewportConfig {
            resolution: Resolution {
                width: 16,
                height: 16,
            },
            max_iterations: 25,
            mode: ModeConfig::Interactive,
            ..ViewportConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn presents_initial_view_and_one_frame_per_accepted_click() {
        let mut controller = controller();
        let mut presenter = RecordingPresenter::default();
        let mut events = ScriptedEvents::new(vec![
            ViewerEvent::Click(ClickEvent::Plane { x: -0.5, y: 0.0 }),
            ViewerEvent::Click(ClickEvent::Outside),
            ViewerEvent::Click(ClickEvent::Plane { x: -0.5, y: 0.1 }),
        ]);

        let summary = run_interactive(&mut controller, &mut presenter, &mut events).unwrap();

        assert_eq!(
            summary,
            RunSummary {
                frames_presented: 3,
                ignored_clicks: 1,
                failed_updates: 0,
            }
        );
        assert_eq!(presenter.frames.len(), 3);
        assert_eq!(
            presenter.frames[0].region,
            Region::new(-2.0, 1.0, -1.5, 1.5).unwrap()
        );
        assert_eq!(presenter.frames[2].region, controller.region());
    }

    #[test]
    fn reset_event_presents_initial_region() {
        let mut controller = controller();
        let mut presenter = RecordingPresenter::default();
        let mut events = ScriptedEvents::new(vec![
            ViewerEvent::Click(ClickEvent::Plane { x: 0.2, y: 0.2 }),
            ViewerEvent::Reset,
        ]);

        run_interactive(&mut controller, &mut presenter, &mut events).unwrap();

        assert_eq!(presenter.frames.len(), 3);
        assert_eq!(presenter.frames[2].region, presenter.frames[0].region);
    }

    #[test]
    fn rejected_zoom_is_presented_and_session_continues() {
        let initial = Region::new(1.0, 1.0 + 1e-15, 1.0, 1.0 + 1e-15).unwrap();
        let mut controller = ViewportController::new(ViewportConfig {
            initial_region: initial,
            resolution: Resolution {
                width: 8,
                height: 8,
            },
            max_iterations: 20,
            zoom_factor: 0.01,
            mode: ModeConfig::Interactive,
            ..ViewportConfig::default()
        })
        .unwrap();
        let mut presenter = RecordingPresenter::default();
        let mut events = ScriptedEvents::new(vec![
            ViewerEvent::Click(ClickEvent::Plane { x: 1.0, y: 1.0 }),
            ViewerEvent::Reset,
        ]);

        let summary = run_interactive(&mut controller, &mut presenter, &mut events).unwrap();

        assert_eq!(
            summary,
            RunSummary {
                frames_presented: 2,
                ignored_clicks: 0,
                failed_updates: 1,
            }
        );
        assert_eq!(presenter.errors.len(), 1);
        assert_eq!(presenter.frames.len(), 2);
        assert_eq!(presenter.frames[1].region, initial);
        assert_eq!(controller.region(), initial);
    }

    #[test]
    fn presenter_failure_stops_the_session() {
        let mut controller = controller();
        let mut events = ScriptedEvents::new(vec![]);

        let result = run_interactive(&mut controller, &mut FailingPresenter, &mut events);

        assert!(matches!(result, Err(RunError::Presenter(_))));
    }
}
