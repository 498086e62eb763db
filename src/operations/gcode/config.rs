use serde::{Deserialize, Serialize};

/// Formatting of the G-code program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GcodeConfig {
    /// Digits after the decimal point of every coordinate.
    pub decimals: usize,
    /// Text placed before the path name in the comment opening each block.
    pub comment_prefix: String,
}

impl Default for GcodeConfig {
    fn default() -> Self {
        Self {
            decimals: 5,
            comment_prefix: "Block-name: ".to_owned(),
        }
    }
}
