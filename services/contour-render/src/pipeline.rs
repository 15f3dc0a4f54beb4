//! Sample, extract, encode, write.

use crate::config::{JobConfig, OutputFormat};
use anyhow::{Context, Result};
use isoline::{ContourExtractor, Grid, GridSampler, IsolineConfig, Segment};
use isoline_render::{render_png, render_svg, ContourExport, RenderConfig};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// A sampled grid and the zero-level segments found in it.
#[derive(Debug, Clone)]
pub struct ContourRun {
    pub grid: Grid,
    pub segments: Vec<Segment>,
}

/// Sample the job's field and extract its zero isoline.
pub fn extract(job: &JobConfig, config: &IsolineConfig) -> Result<ContourRun> {
    config.validate().context("Invalid isoline configuration")?;

    let field = job.field;
    let sampler = GridSampler::new(config.sampler.clone());
    let grid = sampler
        .sample(
            &|x: f64, y: f64| field.evaluate(x, y),
            job.x_range,
            job.y_range,
            job.resolution,
        )
        .with_context(|| format!("Failed to sample field '{}'", field))?;

    let extractor = ContourExtractor::new(config.extractor.clone());
    let segments = extractor.extract(&grid);

    info!(
        field = %field,
        formula = field.formula(),
        rows = grid.rows(),
        cols = grid.cols(),
        num_segments = segments.len(),
        parallel = extractor.uses_parallel(grid.rows()),
        "Extracted contours"
    );

    Ok(ContourRun { grid, segments })
}

/// Encode a run in the job's output format.
pub fn encode(job: &JobConfig, run: &ContourRun, render: &RenderConfig) -> Result<Vec<u8>> {
    let (rows, cols) = run.grid.shape();
    let bytes = match job.format {
        OutputFormat::Png => render_png(&run.segments, rows, cols, render)
            .context("Failed to render PNG")?,
        OutputFormat::Svg => render_svg(&run.segments, rows, cols, render)
            .context("Failed to render SVG")?
            .into_bytes(),
        OutputFormat::Json => ContourExport::new(*run.grid.spec(), run.segments.clone())
            .to_json_pretty()
            .context("Failed to serialize segments")?
            .into_bytes(),
    };
    Ok(bytes)
}

/// Write to `path`, or to stdout when `path` is `None`.
pub fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, bytes)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            info!(path = %path.display(), bytes = bytes.len(), "Wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(bytes)
                .and_then(|_| stdout.flush())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}

/// Run a whole job.
pub fn run(job: &JobConfig, isoline: &IsolineConfig, render: &RenderConfig) -> Result<ContourRun> {
    let run = extract(job, isoline)?;
    let bytes = encode(job, &run, render)?;
    write_output(job.output_path().as_deref(), &bytes)?;
    Ok(run)
}
