//! Command-line arguments.

use crate::config::OutputFormat;
use crate::fields::FieldPreset;
use clap::Parser;
use std::path::PathBuf;

/// Every job setting is optional here so that a flag only overrides the
/// job file (or the built-in default) when it is actually given.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "contour-render")]
#[command(about = "Sample a scalar field and draw its zero isoline with marching squares")]
pub struct Args {
    /// YAML job file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Field to sample
    #[arg(short, long, value_enum)]
    pub field: Option<FieldPreset>,

    /// Lower x bound (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub x_min: Option<f64>,

    /// Upper x bound (exclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub x_max: Option<f64>,

    /// Lower y bound (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub y_min: Option<f64>,

    /// Upper y bound (exclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub y_max: Option<f64>,

    /// Sample spacing along both axes
    #[arg(short, long)]
    pub resolution: Option<f64>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output path (SVG and JSON go to stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Extract contours with the rayon row-parallel path
    #[arg(long)]
    pub parallel: bool,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}
