use std::f64::consts::TAU;
use std::fmt;

use crate::error::Result;
use crate::math::Vector;

/// A circular cut from `start` to `end` around `center`.
///
/// Both endpoints lie on the same circle: `|start - center| ≈ |end - center|`.
/// Arcs built from the bulge conversion satisfy this by construction.
#[derive(Debug, Clone, Copy)]
pub struct Arc {
    start: Vector,
    end: Vector,
    center: Vector,
    clockwise: bool,
}

impl Arc {
    #[must_use]
    pub fn new(start: Vector, end: Vector, center: Vector, clockwise: bool) -> Self {
        Self {
            start,
            end,
            center,
            clockwise,
        }
    }

    #[must_use]
    pub fn start(&self) -> Vector {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Vector {
        self.end
    }

    #[must_use]
    pub fn center(&self) -> Vector {
        self.center
    }

    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }

    /// Radius measured at the start point.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.start.distance(self.center)
    }

    /// Signed included angle in radians: positive counter-clockwise.
    ///
    /// An arc whose endpoints coincide is a full turn.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        let delta = (self.end - self.center).angle() - (self.start - self.center).angle();
        if self.clockwise {
            if delta >= 0.0 {
                delta - TAU
            } else {
                delta
            }
        } else if delta <= 0.0 {
            delta + TAU
        } else {
            delta
        }
    }

    /// Bulge of this arc between its endpoints: `tan(sweep / 4)`.
    #[must_use]
    pub fn bulge(&self) -> f64 {
        (self.sweep() / 4.0).tan()
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.radius() * self.sweep().abs()
    }

    /// Unit direction of travel at `point`, a point on the arc.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateVector` if `point` is the center.
    pub fn tangent_at(&self, point: Vector) -> Result<Vector> {
        let normal = (point - self.center).normal();
        let tangent = if self.clockwise { normal } else { -normal };
        tangent.unit()
    }

    /// Swaps start and end and flips the direction in place.
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.start, &mut self.end);
        self.clockwise = !self.clockwise;
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = if self.clockwise { "CW" } else { "CCW" };
        write!(
            f,
            "Arc<{} ~ {} center={} {dir}>",
            self.start, self.end, self.center
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn upper_half() -> Arc {
        // CCW from (1,0) to (-1,0) through (0,1).
        Arc::new(
            Vector::new(1.0, 0.0),
            Vector::new(-1.0, 0.0),
            Vector::zero(),
            false,
        )
    }

    #[test]
    fn reverse_flips_direction() {
        let mut arc = Arc::new(
            Vector::new(-1.0, 0.0),
            Vector::new(1.0, 0.0),
            Vector::zero(),
            true,
        );
        arc.reverse();
        let expected = upper_half();
        assert!(arc.start().exact_eq(expected.start()));
        assert!(arc.end().exact_eq(expected.end()));
        assert_eq!(arc.is_clockwise(), expected.is_clockwise());
    }

    #[test]
    fn sweep_sign_follows_direction() {
        let mut arc = upper_half();
        assert_abs_diff_eq!(arc.sweep(), PI, epsilon = 1e-12);
        arc.reverse();
        assert_abs_diff_eq!(arc.sweep(), -PI, epsilon = 1e-12);
    }

    #[test]
    fn quarter_arc_sweep_and_bulge() {
        let ccw = Arc::new(Vector::new(1.0, 0.0), Vector::new(0.0, 1.0), Vector::zero(), false);
        assert_abs_diff_eq!(ccw.sweep(), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(ccw.bulge(), (PI / 8.0).tan(), epsilon = 1e-12);

        // Clockwise the long way round.
        let cw = Arc::new(Vector::new(1.0, 0.0), Vector::new(0.0, 1.0), Vector::zero(), true);
        assert_abs_diff_eq!(cw.sweep(), -3.0 * FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(cw.length(), 3.0 * FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn coincident_endpoints_is_full_turn() {
        let p = Vector::new(2.0, 0.0);
        let arc = Arc::new(p, p, Vector::zero(), false);
        assert_abs_diff_eq!(arc.sweep(), TAU, epsilon = 1e-12);
    }

    #[test]
    fn tangent_follows_travel_direction() {
        let arc = upper_half();
        let t_start = arc.tangent_at(arc.start()).unwrap();
        assert!(t_start.approx_eq(Vector::new(0.0, 1.0)));
        let t_end = arc.tangent_at(arc.end()).unwrap();
        assert!(t_end.approx_eq(Vector::new(0.0, -1.0)));

        let mut reversed = arc;
        reversed.reverse();
        let t = reversed.tangent_at(reversed.start()).unwrap();
        assert!(t.approx_eq(Vector::new(0.0, 1.0)));
    }

    #[test]
    fn tangent_at_center_fails() {
        let arc = upper_half();
        assert!(arc.tangent_at(arc.center()).is_err());
    }
}
