//! Built-in scalar fields selectable from the command line or a job file.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named analytic field `f(x, y)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldPreset {
    /// `sin(x) * cos(y)`
    #[default]
    SinCos,
    /// `x + y - 1`
    Linear,
    /// `x^2 + y^2 - 1`, zero on the unit circle
    Circle,
    /// `x * y`
    Saddle,
}

impl FieldPreset {
    pub fn evaluate(self, x: f64, y: f64) -> f64 {
        match self {
            FieldPreset::SinCos => x.sin() * y.cos(),
            FieldPreset::Linear => x + y - 1.0,
            FieldPreset::Circle => x * x + y * y - 1.0,
            FieldPreset::Saddle => x * y,
        }
    }

    /// Human-readable formula, used in log output.
    pub fn formula(self) -> &'static str {
        match self {
            FieldPreset::SinCos => "sin(x)*cos(y)",
            FieldPreset::Linear => "x+y-1",
            FieldPreset::Circle => "x^2+y^2-1",
            FieldPreset::Saddle => "x*y",
        }
    }
}

impl fmt::Display for FieldPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldPreset::SinCos => "sin-cos",
            FieldPreset::Linear => "linear",
            FieldPreset::Circle => "circle",
            FieldPreset::Saddle => "saddle",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate() {
        assert_eq!(FieldPreset::Linear.evaluate(0.0, 0.0), -1.0);
        assert_eq!(FieldPreset::Linear.evaluate(1.0, 1.0), 1.0);
        assert_eq!(FieldPreset::Circle.evaluate(1.0, 0.0), 0.0);
        assert_eq!(FieldPreset::Saddle.evaluate(-2.0, 3.0), -6.0);
        assert_eq!(FieldPreset::SinCos.evaluate(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_cli_names_match_display() {
        for preset in FieldPreset::value_variants() {
            let name = preset.to_possible_value().unwrap().get_name().to_string();
            assert_eq!(name, preset.to_string());
            assert_eq!(FieldPreset::from_str(&name, false).unwrap(), *preset);
        }
    }

    #[test]
    fn test_serde_names() {
        let preset: FieldPreset = serde_yaml::from_str("sin-cos").unwrap();
        assert_eq!(preset, FieldPreset::SinCos);
        assert_eq!(serde_yaml::to_string(&FieldPreset::Circle).unwrap().trim(), "circle");
    }
}
