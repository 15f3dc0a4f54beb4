//! contour-render: draw the zero isoline of a scalar field.

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use contour_render::{pipeline, Args, JobConfig};
use isoline::IsolineConfig;
use isoline_render::RenderConfig;

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr so SVG/JSON on stdout stay clean.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let job = JobConfig::from_args(&args)?;
    let isoline = job.isoline_config(IsolineConfig::from_env());
    let render = job.render_config(RenderConfig::from_env());

    info!(
        field = %job.field,
        x_range = ?job.x_range,
        y_range = ?job.y_range,
        resolution = job.resolution,
        format = ?job.format,
        "Starting contour job"
    );

    pipeline::run(&job, &isoline, &render)?;

    Ok(())
}
