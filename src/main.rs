use std::error::Error;
use std::fs::File;

use clap::Parser;
use env_logger::{Env, Target};
use log::info;

use mandelbrot_zoom::{Cli, RunViewerCommand};

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let command = cli.command();
    let view = command.view();

    let mut logger =
        env_logger::Builder::from_env(Env::default().default_filter_or(view.default_log_filter()));
    if let Some(path) = &view.log_file {
        logger.target(Target::Pipe(Box::new(File::create(path)?)));
    }
    logger.init();

    let config = command.to_config()?;
    let summary = RunViewerCommand::new(config, view.headless).execute()?;

    info!(
        "presented {} frames ({} ignored clicks, {} failed updates)",
        summary.frames_presented, summary.ignored_clicks, summary.failed_updates
    );

    Ok(())
}
