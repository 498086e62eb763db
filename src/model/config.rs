use serde::{Deserialize, Serialize};

use crate::math::TOLERANCE;

/// Parameters of the stitching algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StitchConfig {
    /// Maximum distance between two endpoints considered coincident.
    pub tolerance: f64,
    /// Reverse fragments whose endpoints only match an open path backwards.
    ///
    /// When disabled, importers must deliver fragments in a consistent
    /// orientation; reverse-oriented fragments stay separate paths.
    pub reverse_fragments: bool,
}

impl Default for StitchConfig {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE,
            reverse_fragments: true,
        }
    }
}
