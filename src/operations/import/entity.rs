use crate::math::Vector;

/// A polyline vertex. `bulge` describes the segment to the next vertex.
#[derive(Debug, Clone, Copy)]
pub struct PolylineVertex {
    pub point: Vector,
    pub bulge: f64,
}

impl PolylineVertex {
    /// Creates a new vertex with the given coordinates and bulge.
    #[must_use]
    pub fn new(x: f64, y: f64, bulge: f64) -> Self {
        Self {
            point: Vector::new(x, y),
            bulge,
        }
    }

    /// Creates a vertex followed by a straight segment.
    #[must_use]
    pub fn line(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }
}

/// A drawing entity as delivered by a CAD reader.
///
/// Coordinates are planar; arc angles are in degrees, counter-clockwise
/// from the positive X axis.
#[derive(Debug, Clone)]
pub enum Entity {
    Line {
        start: Vector,
        end: Vector,
    },
    Polyline {
        vertices: Vec<PolylineVertex>,
        closed: bool,
    },
    Arc {
        center: Vector,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Circle {
        center: Vector,
        radius: f64,
    },
    /// Not machined; counted as unsupported on import.
    Spline {
        degree: u32,
        control_points: Vec<Vector>,
        closed: bool,
    },
}

impl Entity {
    /// Entity type name for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Line { .. } => "line",
            Self::Polyline { .. } => "polyline",
            Self::Arc { .. } => "arc",
            Self::Circle { .. } => "circle",
            Self::Spline { .. } => "spline",
        }
    }
}
