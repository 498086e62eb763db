/// Conversions between the two arc encodings found in drawings.
///
/// CAD entities describe an arc by center, radius and angles. Polyline
/// segments and machine controllers describe it by its endpoints and a
/// signed curvature, the bulge: `bulge = tan(included_angle / 4)`.
/// - `bulge = 0`: straight line
/// - `bulge > 0`: counter-clockwise arc
/// - `bulge < 0`: clockwise arc
/// - `|bulge| = 1`: semicircle
use std::f64::consts::FRAC_PI_2;

use super::{cartesian, Vector};
use crate::error::{GeometryError, Result};

/// Center-radius-angle form of a circular arc.
///
/// Angles are in radians in `[0, 2π)`; the arc runs counter-clockwise from
/// `start_angle` to `end_angle`.
#[derive(Debug, Clone, Copy)]
pub struct ArcGeometry {
    pub center: Vector,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Converts center-radius-angle form to `(start, end, bulge)`.
///
/// Angles are in radians. The bulge is positive when `end_angle > start_angle`.
#[must_use]
pub fn arc_to_bulge(
    center: Vector,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> (Vector, Vector, f64) {
    let start = cartesian(start_angle, radius) + center;
    let end = cartesian(end_angle, radius) + center;
    let bulge = ((end_angle - start_angle) / 4.0).tan();
    (start, end, bulge)
}

/// Converts a bulge-encoded segment `p1 -> p2` to center-radius-angle form.
///
/// For a negative bulge the returned angles are swapped so that the arc
/// still reads counter-clockwise, from `p2` to `p1`.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateArc` if `bulge` is zero or not finite,
/// if the chord has zero length, or if the computed radius is not finite.
/// A zero bulge is a straight segment and must be handled by the caller.
pub fn bulge_to_arc(p1: Vector, p2: Vector, bulge: f64) -> Result<ArcGeometry> {
    if bulge == 0.0 || !bulge.is_finite() {
        return Err(GeometryError::DegenerateArc { bulge }.into());
    }

    let chord = p2 - p1;
    let half_chord = chord.length() / 2.0;
    if half_chord == 0.0 {
        return Err(GeometryError::DegenerateArc { bulge }.into());
    }

    // Half of the included angle.
    let theta2 = 2.0 * bulge.atan();
    let r = half_chord / theta2.sin();
    if !r.is_finite() {
        return Err(GeometryError::DegenerateArc { bulge }.into());
    }

    let center = cartesian(FRAC_PI_2 - theta2 + chord.angle(), r) + p1;
    let (start_angle, end_angle) = if bulge < 0.0 {
        ((p2 - center).angle(), (p1 - center).angle())
    } else {
        ((p1 - center).angle(), (p2 - center).angle())
    };

    Ok(ArcGeometry {
        center,
        radius: r.abs(),
        start_angle,
        end_angle,
    })
}
