use std::f64::consts::{FRAC_PI_2, TAU};

use super::moves::Move;
use crate::math::{cartesian, Vector};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    /// Lower-left corner.
    pub lower: Vector,
    /// Upper-right corner.
    pub upper: Vector,
}

impl Bounds {
    /// A zero-size box around a single point.
    #[must_use]
    pub fn from_point(p: Vector) -> Self {
        Self { lower: p, upper: p }
    }

    /// Bounding box of a single move. Arcs include every axis-extreme
    /// point of their circle that they sweep over.
    #[must_use]
    pub fn of_move(m: &Move) -> Self {
        let mut bounds = Self::from_point(m.start());
        bounds.include(m.end());
        if let Move::Arc(arc) = m {
            let start_angle = (arc.start() - arc.center()).angle();
            let sweep = arc.sweep();
            let radius = arc.radius();
            for k in 0..4 {
                let theta = f64::from(k) * FRAC_PI_2;
                let travelled = if sweep >= 0.0 {
                    (theta - start_angle).rem_euclid(TAU)
                } else {
                    (start_angle - theta).rem_euclid(TAU)
                };
                if travelled <= sweep.abs() {
                    bounds.include(arc.center() + cartesian(theta, radius));
                }
            }
        }
        bounds
    }

    /// Grows the box to contain `p`.
    pub fn include(&mut self, p: Vector) {
        self.lower = Vector::new(self.lower.x().min(p.x()), self.lower.y().min(p.y()));
        self.upper = Vector::new(self.upper.x().max(p.x()), self.upper.y().max(p.y()));
    }

    /// Smallest box containing both.
    #[must_use]
    pub fn union(&self, other: &Bounds) -> Self {
        let mut merged = *self;
        merged.include(other.lower);
        merged.include(other.upper);
        merged
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper.x() - self.lower.x()
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.upper.y() - self.lower.y()
    }
}
