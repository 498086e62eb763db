use thiserror::Error;

use crate::math::Vector;

/// Top-level error type for the pathcam tool-path engine.
#[derive(Debug, Error)]
pub enum PathcamError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Import(#[from] ImportError),
}

/// Errors raised by vector and arc computations on degenerate input.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("zero-length vector")]
    DegenerateVector,

    #[error("degenerate arc: bulge {bulge} does not describe an arc")]
    DegenerateArc { bulge: f64 },
}

/// Errors related to path assembly.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("discontinuous move: path ends at {end} but move starts at {start}")]
    DiscontinuousMove { end: Vector, start: Vector },

    #[error("path has no moves")]
    EmptyPath,
}

/// Errors related to entity import.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("invalid entity: {0}")]
    InvalidEntity(String),

    #[error("invalid import configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience type alias for results using [`PathcamError`].
pub type Result<T> = std::result::Result<T, PathcamError>;
