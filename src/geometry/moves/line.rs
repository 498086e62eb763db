use std::fmt;

use crate::error::Result;
use crate::math::Vector;

/// A straight cut from `start` to `end`.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    start: Vector,
    end: Vector,
}

impl Line {
    #[must_use]
    pub fn new(start: Vector, end: Vector) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn start(&self) -> Vector {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Vector {
        self.end
    }

    /// Displacement from start to end.
    #[must_use]
    pub fn vector(&self) -> Vector {
        self.end - self.start
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.vector().length()
    }

    /// Unit direction of travel, identical at both ends.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateVector` for a zero-length line.
    pub fn tangent(&self) -> Result<Vector> {
        self.vector().unit()
    }

    /// Swaps start and end in place.
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.start, &mut self.end);
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line<{} -- {}>", self.start, self.end)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn reverse_swaps_endpoints() {
        let (v, w) = (Vector::new(0.0, 0.0), Vector::new(1.0, 1.0));
        let mut line = Line::new(w, v);
        line.reverse();
        assert!(line.start().exact_eq(v));
        assert!(line.end().exact_eq(w));
    }

    #[test]
    fn tangent_is_unit_direction() {
        let line = Line::new(Vector::new(1.0, 1.0), Vector::new(4.0, 5.0));
        let t = line.tangent().unwrap();
        assert_abs_diff_eq!(t.x(), 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(t.y(), 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(line.length(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_length_line_has_no_tangent() {
        let p = Vector::new(2.0, 2.0);
        assert!(Line::new(p, p).tangent().is_err());
    }
}
