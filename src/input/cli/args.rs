use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::controllers::viewport::config::{
    AnimationConfig, ConfigError, ModeConfig, ViewportConfig,
};
use crate::core::actions::generate_field::generate_field::GeneratorKind;
use crate::core::data::complex::Complex;
use crate::core::data::region::Region;

#[derive(Parser, Debug, Clone)]
#[command(name = "mandelbrot_zoom")]
#[command(about = "Explore the Mandelbrot set in the terminal by zooming in on it")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The subcommand to run; click-to-zoom with its defaults when none was
    /// given.
    #[must_use]
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Interactive(ViewArgs::default()))
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Click on the image to zoom in around that point
    Interactive(ViewArgs),
    /// Zoom in on a fixed point over a number of frames
    Animate(AnimateArgs),
}

impl Command {
    #[must_use]
    pub fn view(&self) -> &ViewArgs {
        match self {
            Self::Interactive(view) => view,
            Self::Animate(animate) => &animate.view,
        }
    }

    pub fn to_config(&self) -> Result<ViewportConfig, ConfigError> {
        match self {
            Self::Interactive(view) => view.apply(ViewportConfig::default()),
            Self::Animate(animate) => animate.to_config(),
        }
    }
}

/// Settings shared by both modes. Anything left out keeps the mode's preset.
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Left edge of the initial view
    #[arg(long, allow_negative_numbers = true)]
    pub xmin: Option<f64>,

    /// Right edge of the initial view
    #[arg(long, allow_negative_numbers = true)]
    pub xmax: Option<f64>,

    /// Bottom edge of the initial view
    #[arg(long, allow_negative_numbers = true)]
    pub ymin: Option<f64>,

    /// Top edge of the initial view
    #[arg(long, allow_negative_numbers = true)]
    pub ymax: Option<f64>,

    /// Samples per row
    #[arg(long)]
    pub width: Option<u32>,

    /// Samples per column
    #[arg(long)]
    pub height: Option<u32>,

    /// Iteration budget per sample
    #[arg(long)]
    pub max_iterations: Option<u32>,

    /// Fraction of the view kept by each zoom, between 0 and 1
    #[arg(long)]
    pub zoom_factor: Option<f64>,

    /// Generate on the calling thread instead of the rayon pool
    #[arg(long, default_value_t = false)]
    pub serial: bool,

    /// Log frames instead of drawing them; interactive mode reads clicks
    /// from stdin
    #[arg(long, default_value_t = false)]
    pub headless: bool,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl ViewArgs {
    /// Logger filter used when `RUST_LOG` is unset. Headless runs report
    /// frames at `info`; the terminal viewer keeps quiet unless writing to a
    /// log file, since log lines would tear the drawn image.
    #[must_use]
    pub fn default_log_filter(&self) -> &'static str {
        match (self.headless, self.log_file.is_some()) {
            (true, _) => "info",
            (false, true) => "warn",
            (false, false) => "off",
        }
    }

    fn apply(&self, preset: ViewportConfig) -> Result<ViewportConfig, ConfigError> {
        let region = preset.initial_region;
        let initial_region = Region::new(
            self.xmin.unwrap_or(region.xmin()),
            self.xmax.unwrap_or(region.xmax()),
            self.ymin.unwrap_or(region.ymin()),
            self.ymax.unwrap_or(region.ymax()),
        )?;

        let mut resolution = preset.resolution;
        resolution.width = self.width.unwrap_or(resolution.width);
        resolution.height = self.height.unwrap_or(resolution.height);

        let config = ViewportConfig {
            initial_region,
            resolution,
            max_iterations: self.max_iterations.unwrap_or(preset.max_iterations),
            zoom_factor: self.zoom_factor.unwrap_or(preset.zoom_factor),
            generator: if self.serial {
                GeneratorKind::Serial
            } else {
                GeneratorKind::Parallel
            },
            mode: preset.mode,
        };

        config.validate()?;

        Ok(config)
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct AnimateArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Real part of the zoom target
    #[arg(long, allow_negative_numbers = true)]
    pub target_x: Option<f64>,

    /// Imaginary part of the zoom target
    #[arg(long, allow_negative_numbers = true)]
    pub target_y: Option<f64>,

    /// Number of zoom steps
    #[arg(long)]
    pub steps: Option<u32>,

    /// Pause between frames in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

impl AnimateArgs {
    pub fn to_config(&self) -> Result<ViewportConfig, ConfigError> {
        let preset = ViewportConfig::animated();
        let defaults = match preset.mode {
            ModeConfig::Animated(animation) => animation,
            ModeConfig::Interactive => AnimationConfig::default(),
        };

        let animation = AnimationConfig {
            target: Complex {
                real: self.target_x.unwrap_or(defaults.target.real),
                imag: self.target_y.unwrap_or(defaults.target.imag),
            },
            steps: self.steps.unwrap_or(defaults.steps),
            frame_delay: self
                .delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.frame_delay),
        };

        self.view.apply(ViewportConfig {
            mode: ModeConfig::Animated(animation),
            ..preset
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::viewport::config::ModeKind;
    use crate::core::data::region::RegionError;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn no_subcommand_runs_interactive_preset() {
        let cli = parse(&["mandelbrot_zoom"]);

        let config = cli.command().to_config().unwrap();
        assert_eq!(config, ViewportConfig::default());
    }

    #[test]
    fn interactive_overrides_apply() {
        let cli = parse(&[
            "mandelbrot_zoom",
            "interactive",
            "--xmin",
            "-1.5",
            "--ymax",
            "1",
            "--width",
            "120",
            "--max-iterations",
            "80",
            "--zoom-factor",
            "0.5",
            "--serial",
            "--headless",
        ]);
        let command = cli.command();

        let config = command.to_config().unwrap();
        assert_eq!(config.initial_region, Region::new(-1.5, 1.0, -1.5, 1.0).unwrap());
        assert_eq!(config.resolution.width, 120);
        assert_eq!(config.resolution.height, 800);
        assert_eq!(config.max_iterations, 80);
        assert_eq!(config.zoom_factor, 0.5);
        assert_eq!(config.generator, GeneratorKind::Serial);
        assert!(command.view().headless);
    }

    #[test]
    fn animate_uses_animated_preset() {
        let cli = parse(&["mandelbrot_zoom", "animate"]);

        let config = cli.command().to_config().unwrap();
        assert_eq!(config, ViewportConfig::animated());
    }

    #[test]
    fn animate_overrides_target_steps_and_delay() {
        let cli = parse(&[
            "mandelbrot_zoom",
            "animate",
            "--target-x",
            "-0.75",
            "--target-y",
            "0.1",
            "--steps",
            "5",
            "--delay-ms",
            "0",
            "--zoom-factor",
            "0.5",
        ]);

        let config = cli.command().to_config().unwrap();
        assert_eq!(config.mode.kind(), ModeKind::Animated);
        assert_eq!(config.zoom_factor, 0.5);

        let ModeConfig::Animated(animation) = config.mode else {
            panic!("animate must produce animation settings");
        };
        assert_eq!(animation.target, Complex { real: -0.75, imag: 0.1 });
        assert_eq!(animation.steps, 5);
        assert_eq!(animation.frame_delay, Duration::ZERO);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let cli = parse(&["mandelbrot_zoom", "interactive", "--xmin", "2"]);

        assert!(matches!(
            cli.command().to_config(),
            Err(ConfigError::InvalidRegion(RegionError::InvalidSize { .. }))
        ));
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let zero_iterations = parse(&["mandelbrot_zoom", "interactive", "--max-iterations", "0"]);
        let big_factor = parse(&["mandelbrot_zoom", "animate", "--zoom-factor", "1.5"]);

        assert_eq!(
            zero_iterations.command().to_config(),
            Err(ConfigError::InvalidIterationBudget)
        );
        assert_eq!(
            big_factor.command().to_config(),
            Err(ConfigError::InvalidZoomFactor(1.5))
        );
    }

    fn allows(filter: &str, level: log::Level) -> bool {
        let logger = env_logger::Builder::new().parse_filters(filter).build();
        let metadata = log::Metadata::builder()
            .level(level)
            .target("mandelbrot_zoom::presenters::logging::presenter")
            .build();

        log::Log::enabled(&logger, &metadata)
    }

    #[test]
    fn headless_default_filter_lets_frame_reports_through() {
        let cli = parse(&["mandelbrot_zoom", "animate", "--headless"]);
        let filter = cli.command().view().default_log_filter();

        assert_eq!(filter, "info");
        assert!(allows(filter, log::Level::Info));
        assert!(!allows(filter, log::Level::Debug));
    }

    #[test]
    fn terminal_default_filter_is_quiet_unless_logging_to_file() {
        let quiet = parse(&["mandelbrot_zoom", "interactive"]);
        let to_file = parse(&["mandelbrot_zoom", "interactive", "--log-file", "zoom.log"]);

        assert_eq!(quiet.command().view().default_log_filter(), "off");
        assert!(!allows("off", log::Level::Error));

        let filter = to_file.command().view().default_log_filter();
        assert_eq!(filter, "warn");
        assert!(allows(filter, log::Level::Warn));
        assert!(!allows(filter, log::Level::Info));
    }

    #[test]
    fn unknown_flags_fail_to_parse() {
        assert!(Cli::try_parse_from(["mandelbrot_zoom", "interactive", "--bogus"]).is_err());
    }
}
