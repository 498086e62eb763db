mod arc;
mod line;

pub use arc::Arc;
pub use line::Line;

use std::fmt;

use crate::error::Result;
use crate::math::{bulge_to_arc, Vector};

/// An atomic curve segment of a tool path.
#[derive(Debug, Clone, Copy)]
pub enum Move {
    /// A straight segment.
    Line(Line),
    /// A circular arc.
    Arc(Arc),
}

impl Move {
    /// Creates a straight move.
    #[must_use]
    pub fn line(start: Vector, end: Vector) -> Self {
        Self::Line(Line::new(start, end))
    }

    /// Creates a circular move.
    #[must_use]
    pub fn arc(start: Vector, end: Vector, center: Vector, clockwise: bool) -> Self {
        Self::Arc(Arc::new(start, end, center, clockwise))
    }

    /// Builds the move for a bulge-encoded segment `start -> end`.
    ///
    /// A zero bulge yields a [`Move::Line`]; anything else an arc whose
    /// direction follows the bulge sign.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateArc` if a non-zero bulge does not
    /// describe a finite arc (coincident endpoints, non-finite bulge).
    pub fn from_bulge(start: Vector, end: Vector, bulge: f64) -> Result<Self> {
        if bulge == 0.0 {
            return Ok(Self::line(start, end));
        }
        let geometry = bulge_to_arc(start, end, bulge)?;
        Ok(Self::arc(start, end, geometry.center, bulge < 0.0))
    }

    #[must_use]
    pub fn start(&self) -> Vector {
        match self {
            Self::Line(line) => line.start(),
            Self::Arc(arc) => arc.start(),
        }
    }

    #[must_use]
    pub fn end(&self) -> Vector {
        match self {
            Self::Line(line) => line.end(),
            Self::Arc(arc) => arc.end(),
        }
    }

    /// Reverses the direction of travel in place.
    pub fn reverse(&mut self) {
        match self {
            Self::Line(line) => line.reverse(),
            Self::Arc(arc) => arc.reverse(),
        }
    }

    /// Unit direction of travel when leaving the start point.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateVector` for a zero-length line or
    /// an arc whose start coincides with its center.
    pub fn tangent_start(&self) -> Result<Vector> {
        match self {
            Self::Line(line) => line.tangent(),
            Self::Arc(arc) => arc.tangent_at(arc.start()),
        }
    }

    /// Unit direction of travel when arriving at the end point.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Move::tangent_start`].
    pub fn tangent_end(&self) -> Result<Vector> {
        match self {
            Self::Line(line) => line.tangent(),
            Self::Arc(arc) => arc.tangent_at(arc.end()),
        }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        match self {
            Self::Line(line) => line.length(),
            Self::Arc(arc) => arc.length(),
        }
    }

    /// Structural comparison with [`crate::math::TOLERANCE`]: same variant, same
    /// endpoints, and for arcs the same center and direction.
    #[must_use]
    pub fn approx_eq(&self, other: &Move) -> bool {
        match (self, other) {
            (Self::Line(a), Self::Line(b)) => {
                a.start().approx_eq(b.start()) && a.end().approx_eq(b.end())
            }
            (Self::Arc(a), Self::Arc(b)) => {
                a.start().approx_eq(b.start())
                    && a.end().approx_eq(b.end())
                    && a.center().approx_eq(b.center())
                    && a.is_clockwise() == b.is_clockwise()
            }
            _ => false,
        }
    }
}

impl From<Line> for Move {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Arc> for Move {
    fn from(arc: Arc) -> Self {
        Self::Arc(arc)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line(line) => line.fmt(f),
            Self::Arc(arc) => arc.fmt(f),
        }
    }
}
