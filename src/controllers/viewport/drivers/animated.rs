use log::info;

use crate::controllers::viewport::config::ModeKind;
use crate::controllers::viewport::controller::ViewportController;
use crate::controllers::viewport::drivers::RunSummary;
use crate::controllers::viewport::errors::{RunError, ViewportError};
use crate::controllers::viewport::events::render_event::RenderEvent;
use crate::controllers::viewport::ports::pacer::{Pace, PacerPort};
use crate::controllers::viewport::ports::presenter::PresenterPort;

/// Steps the animated zoom to completion, pausing after every frame.
///
/// A failed step is reported to the presenter and ends the run: the step
/// would fail again with the same inputs.
pub fn run_animated<P, T>(
    controller: &mut ViewportController,
    presenter: &mut P,
    pacer: &mut T,
) -> Result<RunSummary, RunError>
where
    P: PresenterPort + ?Sized,
    T: PacerPort + ?Sized,
{
    let Some(animation) = controller.animation() else {
        return Err(RunError::Viewport(ViewportError::WrongMode {
            expected: ModeKind::Animated,
            actual: controller.mode(),
        }));
    };

    let mut summary = RunSummary::default();

    loop {
        let frame = match controller.advance() {
            Ok(Some(frame)) => frame,
            Ok(None) => break,
            Err(err) => {
                presenter
                    .present(RenderEvent::Error(err.clone()))
                    .map_err(RunError::Presenter)?;
                return Err(RunError::Viewport(err));
            }
        };

        presenter
            .present(RenderEvent::Frame(frame))
            .map_err(RunError::Presenter)?;
        summary.frames_presented += 1;

        if pacer.pause(animation.frame_delay).map_err(RunError::Input)? == Pace::Stop {
            info!("animation stopped after {} frames", summary.frames_presented);
            return Ok(summary);
        }
    }

    info!("animation finished after {} frames", summary.frames_presented);

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::viewport::config::{AnimationConfig, ModeConfig, ViewportConfig};
    use crate::core::data::complex::Complex;
    use crate::core::data::region::Region;
    use crate::core::data::resolution::Resolution;
    use std::error::Error;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingPresenter {
        steps: Vec<Option<u32>>,
        errors: usize,
    }

    impl PresenterPort for RecordingPresenter {
        fn present(&mut self, event: RenderEvent) -> Result<(), Box<dyn Error>> {
            match event {
                RenderEvent::Frame(frame) => self.steps.push(frame.step),
                RenderEvent::Error(_) => self.errors += 1,
            }
            Ok(())
        }
    }

    struct CountingPacer {
        pauses: Vec<Duration>,
        stop_after: Option<usize>,
    }

    impl PacerPort for CountingPacer {
        fn pause(&mut self, delay: Duration) -> Result<Pace, Box<dyn Error>> {
            self.pauses.push(delay);

            match self.stop_after {
                Some(limit) if self.pauses.len() >= limit => Ok(Pace::Stop),
                _ => Ok(Pace::Continue),
            }
        }
    }

    fn controller(steps: u32) -> ViewportController {
        ViewportController::new(ViewportConfig {
            resolution: Resolution {
                width: 10,
                height: 10,
            },
            max_iterations: 20,
            mode: ModeConfig::Animated(AnimationConfig {
                steps,
                frame_delay: Duration::from_millis(7),
                ..AnimationConfig::default()
            }),
            ..ViewportConfig::animated()
        })
        .unwrap()
    }

    #[test]
    fn runs_every_step_in_order_and_pauses_between_frames() {
        let mut controller = controller(6);
        let mut presenter = RecordingPresenter::default();
        let mut pacer = CountingPacer {
            pauses: Vec::new(),
            stop_after: None,
        };

        let summary = run_animated(&mut controller, &mut presenter, &mut pacer).unwrap();

        assert_eq!(summary.frames_presented, 6);
        assert_eq!(
            presenter.steps,
            (0..6).map(Some).collect::<Vec<Option<u32>>>()
        );
        assert_eq!(pacer.pauses, vec![Duration::from_millis(7); 6]);
    }

    #[test]
    fn pacer_can_stop_the_animation_early() {
        let mut controller = controller(10);
        let mut presenter = RecordingPresenter::default();
        let mut pacer = CountingPacer {
            pauses: Vec::new(),
            stop_after: Some(2),
        };

        let summary = run_animated(&mut controller, &mut presenter, &mut pacer).unwrap();

        assert_eq!(summary.frames_presented, 2);
        assert_eq!(presenter.steps, vec![Some(0), Some(1)]);
    }

    #[test]
    fn failed_step_is_presented_and_ends_the_run() {
        let mut controller = ViewportController::new(ViewportConfig {
            initial_region: Region::new(1.0, 1.0 + 1e-15, 1.0, 1.0 + 1e-15).unwrap(),
            resolution: Resolution {
                width: 8,
                height: 8,
            },
            max_iterations: 20,
            zoom_factor: 0.01,
            mode: ModeConfig::Animated(AnimationConfig {
                target: Complex {
                    real: 1.0,
                    imag: 1.0,
                },
                steps: 3,
                frame_delay: Duration::ZERO,
            }),
            ..ViewportConfig::animated()
        })
        .unwrap();
        let mut presenter = RecordingPresenter::default();
        let mut pacer = CountingPacer {
            pauses: Vec::new(),
            stop_after: None,
        };

        let result = run_animated(&mut controller, &mut presenter, &mut pacer);

        assert!(matches!(result, Err(RunError::Viewport(ViewportError::Field(_)))));
        assert_eq!(presenter.errors, 1);
        assert!(presenter.steps.is_empty());
        assert!(pacer.pauses.is_empty());
    }

    #[test]
    fn interactive_controller_is_rejected() {
        let mut controller = ViewportController::new(ViewportConfig::default()).unwrap();
        let mut presenter = RecordingPresenter::default();
        let mut pacer = CountingPacer {
            pauses: Vec::new(),
            stop_after: None,
        };

        let result = run_animated(&mut controller, &mut presenter, &mut pacer);

        assert!(matches!(
            result,
            Err(RunError::Viewport(ViewportError::WrongMode { .. }))
        ));
        assert_eq!(presenter.errors, 0);
    }
}
