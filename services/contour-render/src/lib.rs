//! Command-line driver for the isoline pipeline.
//!
//! The binary wires a named [`fields::FieldPreset`] through the grid sampler
//! and the contour extractor, then writes the segments as PNG, SVG or JSON.

pub mod cli;
pub mod config;
pub mod fields;
pub mod pipeline;

pub use cli::Args;
pub use config::{JobConfig, OutputFormat, RenderOverrides};
pub use fields::FieldPreset;
pub use pipeline::{encode, extract, run, write_output, ContourRun};
