use super::Vector;

/// Converts an angle in degrees to radians.
#[must_use]
pub fn radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts polar coordinates to a cartesian vector.
#[must_use]
pub fn cartesian(angle: f64, radius: f64) -> Vector {
    Vector::new(radius * angle.cos(), radius * angle.sin())
}

/// Converts a cartesian vector to polar coordinates `(angle, radius)`.
///
/// The angle is the raw `atan2` result in `(-π, π]`.
#[must_use]
pub fn polar(v: Vector) -> (f64, f64) {
    (v.y().atan2(v.x()), v.length())
}
