//! Tests for job configuration and the end-to-end pipeline.

use clap::Parser;
use contour_render::{encode, extract, run, Args, FieldPreset, JobConfig, OutputFormat};
use isoline::{IsolineConfig, Point, Segment};
use isoline_render::{png::PNG_SIGNATURE, ContourExport, RenderConfig};
use std::path::PathBuf;
use test_utils::write_temp_file;

fn parse(args: &[&str]) -> Args {
    let mut argv = vec!["contour-render"];
    argv.extend_from_slice(args);
    Args::try_parse_from(argv).unwrap()
}

fn linear_job() -> JobConfig {
    JobConfig {
        field: FieldPreset::Linear,
        x_range: (0.0, 2.0),
        y_range: (0.0, 2.0),
        resolution: 1.0,
        ..Default::default()
    }
}

// ============================================================================
// YAML job files
// ============================================================================

#[test]
fn test_yaml_job_file() {
    let file = write_temp_file(
        r##"
field: circle
x_range: [-2, 2]
y_range: [-1.5, 1.5]
resolution: 0.25
format: svg
parallel: true
max_grid_points: 10000
render:
  line_color: "#FF0000"
  flip_y: false
"##,
        "yaml",
    );

    let job = JobConfig::from_file(file.path()).unwrap();
    assert_eq!(job.field, FieldPreset::Circle);
    assert_eq!(job.x_range, (-2.0, 2.0));
    assert_eq!(job.y_range, (-1.5, 1.5));
    assert_eq!(job.resolution, 0.25);
    assert_eq!(job.format, OutputFormat::Svg);
    assert!(job.parallel);
    assert_eq!(job.max_grid_points, Some(10000));

    let render = job.render_config(RenderConfig::default());
    assert_eq!(render.line_color, "#FF0000");
    assert!(!render.flip_y);
    assert_eq!(render.line_width, RenderConfig::default().line_width);
}

#[test]
fn test_partial_yaml_keeps_demo_defaults() {
    let job = JobConfig::from_yaml("resolution: 0.1\n").unwrap();
    assert_eq!(job.resolution, 0.1);
    assert_eq!(job.field, FieldPreset::SinCos);
    assert_eq!(job.x_range, (-5.0, 5.0));
}

#[test]
fn test_bad_yaml_reports_path() {
    let file = write_temp_file("field: [not, a, field]\n", "yaml");
    let err = JobConfig::from_file(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse job file"));
}

#[test]
fn test_missing_file() {
    let err = JobConfig::from_file(&PathBuf::from("/nonexistent/job.yaml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read job file"));
}

// ============================================================================
// Layering
// ============================================================================

#[test]
fn test_flags_override_job_file() {
    let file = write_temp_file("field: circle\nresolution: 0.25\nx_range: [-2, 2]\n", "yaml");
    let path = file.path().to_str().unwrap().to_string();

    let args = parse(&["--config", &path, "--field", "saddle", "--x-max", "3"]);
    let job = JobConfig::from_args(&args).unwrap();

    assert_eq!(job.field, FieldPreset::Saddle);
    assert_eq!(job.x_range, (-2.0, 3.0));
    // Not given on the command line, so the file wins.
    assert_eq!(job.resolution, 0.25);
}

#[test]
fn test_no_config_no_flags_is_demo() {
    let job = JobConfig::from_args(&parse(&[])).unwrap();
    assert_eq!(job, JobConfig::default());
}

// ============================================================================
// Pipeline
// ============================================================================

#[test]
fn test_extract_linear_field() {
    let run = extract(&linear_job(), &IsolineConfig::default()).unwrap();
    assert_eq!(run.grid.shape(), (2, 2));
    assert_eq!(
        run.segments,
        vec![Segment::new(Point::new(0.5, 1.0), Point::new(1.0, 0.5))]
    );
}

#[test]
fn test_extract_demo_parallel_matches_serial() {
    let job = JobConfig::default();
    let serial = extract(&job, &IsolineConfig::default()).unwrap();

    let mut config = IsolineConfig::default();
    config.extractor.parallel = true;
    config.extractor.parallel_min_rows = 1;
    let parallel = extract(&job, &config).unwrap();

    assert_eq!(serial.grid.shape(), (20, 20));
    assert!(!serial.segments.is_empty());
    assert_eq!(serial.segments, parallel.segments);
}

#[test]
fn test_extract_invalid_range() {
    let job = JobConfig {
        x_range: (1.0, -1.0),
        ..Default::default()
    };
    let err = extract(&job, &IsolineConfig::default()).unwrap_err();
    assert!(format!("{err:#}").contains("invalid range"));
}

#[test]
fn test_extract_respects_grid_cap() {
    let job = JobConfig {
        max_grid_points: Some(100),
        ..Default::default()
    };
    let config = job.isoline_config(IsolineConfig::default());
    assert!(extract(&job, &config).is_err());
}

#[test]
fn test_encode_json() {
    let job = JobConfig {
        format: OutputFormat::Json,
        ..linear_job()
    };
    let run = extract(&job, &IsolineConfig::default()).unwrap();
    let bytes = encode(&job, &run, &RenderConfig::default()).unwrap();

    let export: ContourExport = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(export.segment_count, 1);
    assert_eq!(export.grid.rows, 2);
    assert_eq!(export.segments, run.segments);
}

#[test]
fn test_run_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("linear.png");
    let job = JobConfig {
        output: Some(output.clone()),
        ..linear_job()
    };

    run(&job, &IsolineConfig::default(), &RenderConfig::default()).unwrap();

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(&bytes[..8], &PNG_SIGNATURE);
}

#[test]
fn test_run_writes_svg() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("saddle.svg");
    let args = parse(&[
        "--field",
        "saddle",
        "--x-min",
        "-1",
        "--x-max",
        "1",
        "--y-min",
        "-1",
        "--y-max",
        "1",
        "--resolution",
        "1",
        "--format",
        "svg",
        "--output",
        output.to_str().unwrap(),
    ]);
    let job = JobConfig::from_args(&args).unwrap();
    let result = run(&job, &IsolineConfig::default(), &RenderConfig::default()).unwrap();

    let svg = std::fs::read_to_string(&output).unwrap();
    assert_eq!(svg.matches("<line ").count(), result.segments.len());
    assert_eq!(result.segments.len(), 1);
}
