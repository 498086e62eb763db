use std::fmt;

use super::bounds::Bounds;
use super::moves::Move;
use crate::error::{PathError, Result};
use crate::math::{Vector, TOLERANCE};

/// An ordered sequence of moves where each move starts where the previous
/// one ended.
///
/// The continuity invariant is enforced by [`Path::append`] and
/// [`Path::join`]; every method that mutates the sequence preserves it.
#[derive(Debug, Clone, Default)]
pub struct Path {
    moves: Vec<Move>,
}

impl Path {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path holding a single move.
    #[must_use]
    pub fn from_move(m: Move) -> Self {
        Self { moves: vec![m] }
    }

    /// Creates a path of straight moves through `points`.
    #[must_use]
    pub fn polyline(points: &[Vector]) -> Self {
        let moves = points
            .windows(2)
            .map(|pair| Move::line(pair[0], pair[1]))
            .collect();
        Self { moves }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[must_use]
    pub fn into_moves(self) -> Vec<Move> {
        self.moves
    }

    /// Start point of the first move.
    #[must_use]
    pub fn start(&self) -> Option<Vector> {
        self.moves.first().map(Move::start)
    }

    /// End point of the last move.
    #[must_use]
    pub fn end(&self) -> Option<Vector> {
        self.moves.last().map(Move::end)
    }

    /// Appends a move using the default [`TOLERANCE`].
    ///
    /// # Errors
    ///
    /// See [`Path::append_within`].
    pub fn append(&mut self, m: Move) -> Result<()> {
        self.append_within(m, TOLERANCE)
    }

    /// Appends a move. An empty path accepts any move.
    ///
    /// # Errors
    ///
    /// Returns `PathError::DiscontinuousMove` if the move does not start
    /// within `tolerance` of the current end. The path is left unchanged.
    pub fn append_within(&mut self, m: Move, tolerance: f64) -> Result<()> {
        if let Some(end) = self.end() {
            if !end.approx_eq_within(m.start(), tolerance) {
                return Err(PathError::DiscontinuousMove {
                    end,
                    start: m.start(),
                }
                .into());
            }
        }
        self.moves.push(m);
        Ok(())
    }

    /// Joins another path using the default [`TOLERANCE`].
    ///
    /// # Errors
    ///
    /// See [`Path::join_within`].
    pub fn join(&mut self, other: Path) -> Result<()> {
        self.join_within(other, TOLERANCE)
    }

    /// Concatenates `other` after this path.
    ///
    /// # Errors
    ///
    /// Returns `PathError::DiscontinuousMove` if `other` does not start
    /// within `tolerance` of this path's end. This path is left unchanged.
    pub fn join_within(&mut self, other: Path, tolerance: f64) -> Result<()> {
        if let (Some(end), Some(start)) = (self.end(), other.start()) {
            if !end.approx_eq_within(start, tolerance) {
                return Err(PathError::DiscontinuousMove { end, start }.into());
            }
        }
        self.moves.extend(other.moves);
        Ok(())
    }

    /// Reverses the direction of travel: the move order is reversed and
    /// every move is reversed, in one sweep from both ends.
    pub fn reverse(&mut self) {
        let n = self.moves.len();
        for i in 0..n / 2 {
            let j = n - 1 - i;
            self.moves.swap(i, j);
            self.moves[i].reverse();
            self.moves[j].reverse();
        }
        if n % 2 == 1 {
            self.moves[n / 2].reverse();
        }
    }

    /// Returns true if the path ends where it starts, within [`TOLERANCE`].
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.is_closed_within(TOLERANCE)
    }

    /// Returns true if the path ends within `tolerance` of its start.
    /// An empty path is not closed.
    #[must_use]
    pub fn is_closed_within(&self, tolerance: f64) -> bool {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => start.approx_eq_within(end, tolerance),
            _ => false,
        }
    }

    /// Winding direction from the shoelace sum over move endpoints.
    ///
    /// Arcs contribute their chord only. Degenerate paths (zero area,
    /// open, self-intersecting) get a deterministic but meaningless answer.
    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        let sum: f64 = self
            .moves
            .iter()
            .map(|m| {
                let (start, end) = (m.start(), m.end());
                (end.x() - start.x()) * (end.y() + start.y())
            })
            .sum();
        sum > 0.0
    }

    /// Rotates a closed path so that the move starting nearest to `v`
    /// comes first. Open paths are left untouched.
    pub fn start_near(&mut self, v: Vector) {
        if !self.is_closed() {
            return;
        }
        let nearest = self
            .moves
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| v.distance(a.start()).total_cmp(&v.distance(b.start())))
            .map_or(0, |(i, _)| i);
        self.moves.rotate_left(nearest);
    }

    /// Points visited by the path: every start point, then the final end.
    #[must_use]
    pub fn points(&self) -> Vec<Vector> {
        let mut points: Vec<Vector> = self.moves.iter().map(Move::start).collect();
        points.extend(self.end());
        points
    }

    /// Checks the continuity invariant with [`TOLERANCE`].
    #[must_use]
    pub fn is_continuous(&self) -> bool {
        self.moves
            .windows(2)
            .all(|pair| pair[0].end().approx_eq(pair[1].start()))
    }

    /// Move-by-move structural comparison.
    #[must_use]
    pub fn approx_eq(&self, other: &Path) -> bool {
        self.moves.len() == other.moves.len()
            && self
                .moves
                .iter()
                .zip(&other.moves)
                .all(|(a, b)| a.approx_eq(b))
    }

    /// Total travelled length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.moves.iter().map(Move::length).sum()
    }

    /// Bounding box, or `None` for an empty path.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        self.moves
            .iter()
            .map(Bounds::of_move)
            .reduce(|acc, b| acc.union(&b))
    }

    /// Finds the first vertex the path passes through twice.
    ///
    /// Returns the move range `start..end` of the loop. Returning to the
    /// very first point at the end is an outer loop and is not reported.
    #[must_use]
    pub fn has_inner_loop(&self) -> Option<(usize, usize)> {
        for (i, m) in self.moves.iter().enumerate() {
            if let Some(j) = self.first_start_at(m.start(), i) {
                return Some((j, i));
            }
        }
        let end = self.end()?;
        match self.first_start_at(end, self.moves.len()) {
            Some(j) if j != 0 => Some((j, self.moves.len())),
            _ => None,
        }
    }

    /// Peels every inner loop off as its own path, in discovery order,
    /// followed by whatever remains.
    #[must_use]
    pub fn split_inner_loops(mut self) -> Vec<Path> {
        let mut split = Vec::new();
        while let Some((start, end)) = self.has_inner_loop() {
            let moves = self.moves.drain(start..end).collect();
            split.push(Path { moves });
        }
        if !self.is_empty() {
            split.push(self);
        }
        split
    }

    fn first_start_at(&self, point: Vector, before: usize) -> Option<usize> {
        self.moves[..before]
            .iter()
            .position(|m| m.start().approx_eq(point))
    }
}

impl From<Move> for Path {
    fn from(m: Move) -> Self {
        Self::from_move(m)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let points: Vec<String> = self.points().iter().map(ToString::to_string).collect();
        write!(f, "{}", points.join("->"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PathcamError;
    use approx::assert_abs_diff_eq;

    fn a() -> Vector {
        Vector::new(-1.0, -1.0)
    }
    fn b() -> Vector {
        Vector::new(1.0, -1.0)
    }
    fn c() -> Vector {
        Vector::new(1.0, 1.0)
    }
    fn d() -> Vector {
        Vector::new(-1.0, 1.0)
    }

    fn poly(points: &[Vector]) -> Path {
        Path::polyline(points)
    }

    #[test]
    fn start_and_end() {
        let p = poly(&[a(), b(), c()]);
        assert!(p.start().unwrap().exact_eq(a()));
        assert!(p.end().unwrap().exact_eq(c()));
        assert!(Path::new().start().is_none());
    }

    #[test]
    fn closed_square_and_open_triangle() {
        let square = poly(&[a(), b(), c(), d(), a()]);
        assert!(square.is_closed());
        assert_eq!(
            square.is_closed(),
            square.start().unwrap().approx_eq(square.end().unwrap())
        );

        let triangle = poly(&[a(), b(), c()]);
        assert!(!triangle.is_closed());
        assert_eq!(
            triangle.is_closed(),
            triangle.start().unwrap().approx_eq(triangle.end().unwrap())
        );

        assert!(!Path::new().is_closed());
    }

    #[test]
    fn square_orientation() {
        let ccw = poly(&[a(), b(), c(), d(), a()]);
        assert!(!ccw.is_clockwise());
        let cw = poly(&[a(), d(), c(), b(), a()]);
        assert!(cw.is_clockwise());
    }

    #[test]
    fn triangle_orientation() {
        assert!(!poly(&[a(), b(), c(), a()]).is_clockwise());
        assert!(poly(&[a(), c(), b(), a()]).is_clockwise());
    }

    #[test]
    fn append_continuous_move() {
        let mut p = poly(&[a(), b()]);
        p.append(Move::line(b(), c())).unwrap();
        assert!(p.approx_eq(&poly(&[a(), b(), c()])));
    }

    #[test]
    fn append_to_empty_path_is_unconditional() {
        let mut p = Path::new();
        p.append(Move::line(c(), d())).unwrap();
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn append_discontinuous_move_fails() {
        let mut p = poly(&[a(), b()]);
        let err = p.append(Move::line(c(), d())).unwrap_err();
        assert!(matches!(
            err,
            PathcamError::Path(PathError::DiscontinuousMove { .. })
        ));
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn append_within_tolerance_snaps_nothing() {
        let mut p = poly(&[a(), b()]);
        let near_b = b() + Vector::new(TOLERANCE / 10.0, 0.0);
        p.append(Move::line(near_b, c())).unwrap();
        assert!(p.is_continuous());
    }

    #[test]
    fn join_paths() {
        let mut p = poly(&[a(), b()]);
        p.join(poly(&[b(), c(), d()])).unwrap();
        assert!(p.approx_eq(&poly(&[a(), b(), c(), d()])));

        let mut q = poly(&[a(), b()]);
        assert!(q.join(poly(&[c(), d()])).is_err());
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn reverse_polyline() {
        let expected = poly(&[a(), b(), c(), a()]);
        let mut p = poly(&[a(), c(), b(), a()]);
        p.reverse();
        assert!(p.approx_eq(&expected));
    }

    #[test]
    fn reverse_keeps_continuity_with_arcs() {
        let mut p = poly(&[a(), b()]);
        p.append(Move::arc(b(), c(), Vector::new(1.0, 0.0), false))
            .unwrap();
        p.append(Move::line(c(), d())).unwrap();
        p.reverse();

        assert!(p.is_continuous());
        assert!(p.start().unwrap().exact_eq(d()));
        assert!(p.end().unwrap().exact_eq(a()));
        let Move::Arc(arc) = p.moves()[1] else {
            panic!("middle move should stay an arc");
        };
        assert!(arc.is_clockwise());
        assert!(arc.start().exact_eq(c()));
    }

    #[test]
    fn reverse_twice_is_identity() {
        for n in 1..=5 {
            let points: Vec<Vector> = (0..=n)
                .map(|i| Vector::new(f64::from(i), f64::from(i * i)))
                .collect();
            let original = poly(&points);
            let mut p = original.clone();
            p.reverse();
            assert!(!p.approx_eq(&original));
            p.reverse();
            assert!(p.approx_eq(&original), "failed for {n} moves");
        }
    }

    #[test]
    fn reverse_empty_path() {
        let mut p = Path::new();
        p.reverse();
        assert!(p.is_empty());
    }

    #[test]
    fn points_visited() {
        let pts = poly(&[a(), b(), c()]).points();
        assert_eq!(pts.len(), 3);
        assert!(pts[0].exact_eq(a()) && pts[1].exact_eq(b()) && pts[2].exact_eq(c()));
    }

    #[test]
    fn is_continuous_detects_gap() {
        let mut moves = poly(&[a(), b(), c(), d()]).into_moves();
        assert!(Path { moves: moves.clone() }.is_continuous());
        moves.push(Move::line(a(), b()));
        assert!(!Path { moves }.is_continuous());
    }

    #[test]
    fn start_near_rotates_closed_path() {
        let mut p = poly(&[a(), b(), c(), d(), a()]);
        p.start_near(Vector::new(0.9, 0.8));
        assert!(p.start().unwrap().exact_eq(c()));
        assert!(p.is_closed());
        assert!(p.is_continuous());
    }

    #[test]
    fn start_near_ignores_open_path() {
        let mut p = poly(&[a(), b(), c(), d()]);
        p.start_near(d());
        assert!(p.start().unwrap().exact_eq(a()));
    }

    #[test]
    fn inner_loop_detection() {
        let cases = [
            (vec![a(), b(), c(), d()], None, "no loop"),
            (vec![a(), b(), c(), d(), a()], None, "outer loop"),
            (vec![a(), b(), c(), a(), d()], Some((0, 3)), "start loop"),
            (vec![a(), b(), c(), d(), b()], Some((1, 4)), "end loop"),
            (vec![a(), b(), c(), b(), d()], Some((1, 3)), "inner loop"),
        ];
        for (points, expected, doc) in cases {
            assert_eq!(poly(&points).has_inner_loop(), expected, "{doc}");
        }
    }

    #[test]
    fn split_inner_loops() {
        let cases = [
            (vec![a(), b(), c(), d()], vec![vec![a(), b(), c(), d()]], "no loop"),
            (
                vec![a(), b(), c(), d(), a()],
                vec![vec![a(), b(), c(), d(), a()]],
                "outer loop",
            ),
            (
                vec![a(), b(), c(), a(), d()],
                vec![vec![a(), b(), c(), a()], vec![a(), d()]],
                "start loop",
            ),
            (
                vec![a(), b(), c(), d(), b()],
                vec![vec![b(), c(), d(), b()], vec![a(), b()]],
                "end loop",
            ),
            (
                vec![a(), b(), c(), b(), d()],
                vec![vec![b(), c(), b()], vec![a(), b(), d()]],
                "inner loop",
            ),
        ];
        for (input, expected, doc) in cases {
            let split = poly(&input).split_inner_loops();
            assert_eq!(split.len(), expected.len(), "{doc}");
            for (got, want) in split.iter().zip(&expected) {
                assert!(got.approx_eq(&poly(want)), "{doc}: got {got}");
            }
        }
    }

    #[test]
    fn bounds_and_length() {
        let p = poly(&[a(), b(), c(), d(), a()]);
        let bounds = p.bounds().unwrap();
        assert!(bounds.lower.approx_eq(a()));
        assert!(bounds.upper.approx_eq(c()));
        assert_abs_diff_eq!(p.length(), 8.0, epsilon = 1e-12);
        assert!(Path::new().bounds().is_none());
    }

    #[test]
    fn display_lists_points() {
        let p = poly(&[Vector::new(0.0, 0.0), Vector::new(1.0, 0.0)]);
        assert_eq!(p.to_string(), "(0.00, 0.00)->(1.00, 0.00)");
    }
}
