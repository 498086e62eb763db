pub mod arc_2d;
pub mod polar;
mod vector;

pub use arc_2d::{arc_to_bulge, bulge_to_arc, ArcGeometry};
pub use polar::{cartesian, polar, radians};
pub use vector::Vector;

/// Backing 2D vector type from nalgebra.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Default tolerance for point coincidence, matching the default import
/// precision of three decimals.
pub const TOLERANCE: f64 = 1e-4;
