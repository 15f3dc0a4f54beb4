//! Configuration for grid sampling and contour extraction.

use crate::error::{IsolineError, Result};
use serde::{Deserialize, Serialize};

/// Default cap on `rows * cols` for a sampled grid (4096 x 4096).
pub const DEFAULT_MAX_GRID_POINTS: usize = 4096 * 4096;

/// Default number of cell rows before the extractor goes parallel.
pub const DEFAULT_PARALLEL_MIN_ROWS: usize = 256;

/// Top-level configuration for the isoline pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IsolineConfig {
    #[serde(default)]
    pub sampler: SamplerConfig,
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

/// Limits applied by the grid sampler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Largest grid (in sample points) the sampler will allocate.
    pub max_points: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            max_points: DEFAULT_MAX_GRID_POINTS,
        }
    }
}

/// Options for the contour extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Allow splitting cell rows across the rayon pool.
    pub parallel: bool,

    /// Minimum number of cell rows before the parallel path is used.
    pub parallel_min_rows: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            parallel_min_rows: DEFAULT_PARALLEL_MIN_ROWS,
        }
    }
}

impl IsolineConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable variables keep their defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("ISOLINE_MAX_GRID_POINTS") {
            if let Ok(points) = val.parse() {
                config.sampler.max_points = points;
            }
        }

        if let Ok(val) = std::env::var("ISOLINE_PARALLEL") {
            config.extractor.parallel = val.to_lowercase() == "true" || val == "1";
        }

        if let Ok(val) = std::env::var("ISOLINE_PARALLEL_MIN_ROWS") {
            if let Ok(rows) = val.parse() {
                config.extractor.parallel_min_rows = rows;
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.sampler.max_points < 4 {
            return Err(IsolineError::invalid_config(
                "sampler.max_points must allow at least one 2x2 cell",
            ));
        }

        if self.extractor.parallel_min_rows == 0 {
            return Err(IsolineError::invalid_config(
                "extractor.parallel_min_rows must be > 0",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = IsolineConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.extractor.parallel);
        assert_eq!(config.sampler.max_points, DEFAULT_MAX_GRID_POINTS);
    }

    #[test]
    fn test_validate_rejects_tiny_cap() {
        let mut config = IsolineConfig::default();
        config.sampler.max_points = 3;
        assert!(matches!(
            config.validate(),
            Err(IsolineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_min_rows() {
        let mut config = IsolineConfig::default();
        config.extractor.parallel_min_rows = 0;
        assert!(config.validate().is_err());
    }
}
