use serde::{Deserialize, Serialize};

use crate::error::{ImportError, Result};
use crate::model::StitchConfig;

/// Highest supported number of decimals.
pub const MAX_PRECISION: u32 = 9;

/// Parameters of entity import.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Number of decimals coordinates are rounded to.
    pub precision: u32,
    /// Stitching parameters of the model the entities are imported into.
    pub stitch: StitchConfig,
}

impl ImportConfig {
    /// Creates a configuration rounding to `precision` decimals, with a
    /// stitch tolerance one decimal finer.
    ///
    /// # Errors
    ///
    /// Returns `ImportError::InvalidConfig` if `precision` exceeds
    /// [`MAX_PRECISION`].
    pub fn with_precision(precision: u32) -> Result<Self> {
        let config = Self {
            precision,
            stitch: StitchConfig::default(),
        };
        config.validate()?;
        Ok(Self {
            stitch: StitchConfig {
                tolerance: 0.1 / config.scale(),
                ..config.stitch
            },
            ..config
        })
    }

    /// Checks the configuration before use.
    ///
    /// # Errors
    ///
    /// Returns `ImportError::InvalidConfig` for a precision above
    /// [`MAX_PRECISION`] or a tolerance that is not a positive number.
    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(ImportError::InvalidConfig(format!(
                "precision {} exceeds {MAX_PRECISION} decimals",
                self.precision
            ))
            .into());
        }
        let tolerance = self.stitch.tolerance;
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ImportError::InvalidConfig(format!(
                "stitch tolerance must be positive, got {tolerance}"
            ))
            .into());
        }
        Ok(())
    }

    /// `10^precision`.
    pub(crate) fn scale(&self) -> f64 {
        f64::from(10_u32.pow(self.precision.min(MAX_PRECISION)))
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            precision: 3,
            stitch: StitchConfig::default(),
        }
    }
}
