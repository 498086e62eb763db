mod emit_model;
mod emit_path;

pub use emit_model::{EmitModel, EmittedPath};
pub use emit_path::EmitPath;

use std::fmt;

use crate::math::Vector;

/// A single machine command in absolute coordinates.
#[derive(Debug, Clone, Copy)]
pub enum MachineMove {
    /// Positioning move with the tool lifted.
    Rapid { to: Vector },
    /// Straight cutting move.
    Linear { to: Vector },
    /// Circular cutting move. `center_offset` is the arc center relative
    /// to the start of the move.
    Circular {
        to: Vector,
        center_offset: Vector,
        clockwise: bool,
    },
}

impl MachineMove {
    /// Position of the tool after the move.
    #[must_use]
    pub fn target(&self) -> Vector {
        match self {
            Self::Rapid { to } | Self::Linear { to } | Self::Circular { to, .. } => *to,
        }
    }
}

impl fmt::Display for MachineMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rapid { to } => write!(f, "rapid {to}"),
            Self::Linear { to } => write!(f, "line {to}"),
            Self::Circular {
                to,
                center_offset,
                clockwise,
            } => {
                let dir = if *clockwise { "cw" } else { "ccw" };
                write!(f, "arc {dir} {to} offset {center_offset}")
            }
        }
    }
}
