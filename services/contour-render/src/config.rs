//! Job configuration.
//!
//! Settings are layered, later layers winning:
//!
//! 1. Built-in defaults (the `sin(x)*cos(y)` demo over `(-5, 5)` at 0.5)
//! 2. Environment (`ISOLINE_*`, `RENDER_*`, optionally from `.env`)
//! 3. YAML job file given with `--config`
//! 4. Command-line flags

use crate::cli::Args;
use crate::fields::FieldPreset;
use anyhow::{Context, Result};
use clap::ValueEnum;
use isoline::IsolineConfig;
use isoline_render::RenderConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File written for PNG output when no `--output` is given.
pub const DEFAULT_PNG_OUTPUT: &str = "contours.png";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
    Json,
}

/// One sampling-and-render job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobConfig {
    pub field: FieldPreset,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub resolution: f64,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub parallel: bool,

    /// Overrides the sampler's `ISOLINE_MAX_GRID_POINTS` cap
    pub max_grid_points: Option<usize>,

    pub render: RenderOverrides,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            field: FieldPreset::SinCos,
            x_range: (-5.0, 5.0),
            y_range: (-5.0, 5.0),
            resolution: 0.5,
            format: OutputFormat::Png,
            output: None,
            parallel: false,
            max_grid_points: None,
            render: RenderOverrides::default(),
        }
    }
}

/// Render settings a job file may override. Unset fields keep the value
/// from the environment or the renderer default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOverrides {
    pub pixels_per_cell: Option<f32>,
    pub margin: Option<f32>,
    pub line_width: Option<f32>,
    pub line_color: Option<String>,
    pub background: Option<String>,
    pub flip_y: Option<bool>,
}

impl RenderOverrides {
    pub fn apply(&self, config: &mut RenderConfig) {
        if let Some(ppc) = self.pixels_per_cell {
            config.pixels_per_cell = ppc;
        }
        if let Some(margin) = self.margin {
            config.margin = margin;
        }
        if let Some(width) = self.line_width {
            config.line_width = width;
        }
        if let Some(color) = &self.line_color {
            config.line_color = color.clone();
        }
        if let Some(background) = &self.background {
            config.background = background.clone();
        }
        if let Some(flip_y) = self.flip_y {
            config.flip_y = flip_y;
        }
    }
}

impl JobConfig {
    /// Load a YAML job file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read job file: {}", path.display()))?;
        Self::from_yaml(&contents)
            .with_context(|| format!("Failed to parse job file: {}", path.display()))
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        // An empty document means "all defaults".
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents).context("invalid job YAML")
    }

    /// Job file named by `--config` (if any), then command-line overrides.
    pub fn from_args(args: &Args) -> Result<Self> {
        let mut job = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        job.apply_args(args);
        Ok(job)
    }

    /// Overlay the flags that were actually given.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(field) = args.field {
            self.field = field;
        }
        if let Some(x_min) = args.x_min {
            self.x_range.0 = x_min;
        }
        if let Some(x_max) = args.x_max {
            self.x_range.1 = x_max;
        }
        if let Some(y_min) = args.y_min {
            self.y_range.0 = y_min;
        }
        if let Some(y_max) = args.y_max {
            self.y_range.1 = y_max;
        }
        if let Some(resolution) = args.resolution {
            self.resolution = resolution;
        }
        if let Some(format) = args.format {
            self.format = format;
        }
        if let Some(output) = &args.output {
            self.output = Some(output.clone());
        }
        self.parallel |= args.parallel;
    }

    /// Isoline configuration for this job on top of `base`.
    pub fn isoline_config(&self, base: IsolineConfig) -> IsolineConfig {
        let mut config = base;
        if let Some(max) = self.max_grid_points {
            config.sampler.max_points = max;
        }
        config.extractor.parallel |= self.parallel;
        config
    }

    /// Render configuration for this job on top of `base`.
    pub fn render_config(&self, base: RenderConfig) -> RenderConfig {
        let mut config = base;
        self.render.apply(&mut config);
        config
    }

    /// Where output goes; `None` means stdout.
    pub fn output_path(&self) -> Option<PathBuf> {
        match (&self.output, self.format) {
            (Some(path), _) => Some(path.clone()),
            (None, OutputFormat::Png) => Some(PathBuf::from(DEFAULT_PNG_OUTPUT)),
            (None, _) => None,
        }
    }
}
