use std::f64::consts::TAU;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::{Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// A 2D point or displacement.
///
/// Vectors have no `PartialEq`. Coincidence is tolerance-based and goes
/// through [`Vector::approx_eq`] or [`Vector::approx_eq_within`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector(Vector2);

impl Vector {
    /// Creates a vector from its components.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self(Vector2::new(x, y))
    }

    /// The zero vector.
    #[must_use]
    pub fn zero() -> Self {
        Self(Vector2::zeros())
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Euclidean norm.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.0.norm()
    }

    /// Distance between two points.
    #[must_use]
    pub fn distance(&self, other: Vector) -> f64 {
        (*self - other).length()
    }

    /// Rotates the vector by -90°: `(x, y) -> (y, -x)`.
    #[must_use]
    pub fn normal(&self) -> Self {
        Self::new(self.0.y, -self.0.x)
    }

    /// Returns the vector scaled to unit length.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateVector` if the vector has zero length.
    pub fn unit(&self) -> Result<Self> {
        let len = self.length();
        if len == 0.0 || !len.is_finite() {
            return Err(GeometryError::DegenerateVector.into());
        }
        Ok(*self / len)
    }

    #[must_use]
    pub fn dot(&self, other: Vector) -> f64 {
        self.0.dot(&other.0)
    }

    /// Angle of the vector from the positive X axis, normalized to `[0, 2π)`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        let angle = self.0.y.atan2(self.0.x);
        if angle >= 0.0 {
            angle
        } else if angle + TAU < TAU {
            angle + TAU
        } else {
            // Tiny negative angles round up to TAU.
            0.0
        }
    }

    /// Tests coincidence with [`TOLERANCE`].
    #[must_use]
    pub fn approx_eq(&self, other: Vector) -> bool {
        self.approx_eq_within(other, TOLERANCE)
    }

    /// Tests coincidence: `|self - other| < tolerance`.
    #[must_use]
    pub fn approx_eq_within(&self, other: Vector, tolerance: f64) -> bool {
        (*self - other).length() < tolerance
    }

    /// Bitwise component equality, used where drift must be detected exactly.
    #[must_use]
    pub fn exact_eq(&self, other: Vector) -> bool {
        self.0 == other.0
    }

    /// Returns true if both components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.x.is_finite() && self.0.y.is_finite()
    }
}

impl From<Vector2> for Vector {
    fn from(v: Vector2) -> Self {
        Self(v)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Self(self.0 * rhs)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        Self(self.0 / rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Self(-self.0)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.0.x, self.0.y)
    }
}
