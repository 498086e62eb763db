mod config;
mod entity;

pub use config::{ImportConfig, MAX_PRECISION};
pub use entity::{Entity, PolylineVertex};

use std::f64::consts::TAU;
use std::fmt;

use tracing::{debug, info, warn};

use crate::error::{ImportError, Result};
use crate::geometry::{Arc, Move, Path};
use crate::math::{arc_to_bulge, radians, Vector};
use crate::model::{Model, StitchObserver};

/// Sweeps this close to a full turn are imported as circles.
const FULL_TURN_EPSILON: f64 = 1e-9;

/// Counts of what happened to the entities of one import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Entities added to the model as paths.
    pub imported: usize,
    /// Entities of a type that is not machined.
    pub unsupported: usize,
    /// Entities dropped because their geometry is degenerate.
    pub discarded: usize,
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "imported {}, unsupported {}, discarded {}",
            self.imported, self.unsupported, self.discarded
        )
    }
}

/// Converts drawing entities to moves and stitches them into a model.
///
/// Coordinates are rounded to `config.precision` decimals before moves are
/// built, so endpoints computed by different entity types coincide exactly
/// when they agree to that precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportEntities {
    config: ImportConfig,
}

impl ImportEntities {
    /// Creates a new import operation.
    #[must_use]
    pub fn new(config: ImportConfig) -> Self {
        Self { config }
    }

    /// Imports `entities` into a new model configured from `config.stitch`.
    ///
    /// # Errors
    ///
    /// Returns `ImportError::InvalidConfig` if the configuration is invalid.
    pub fn execute<I>(&self, entities: I) -> Result<(Model, ImportReport)>
    where
        I: IntoIterator<Item = Entity>,
    {
        let mut model = Model::with_config(self.config.stitch);
        let report = self.execute_into(entities, &mut model)?;
        Ok((model, report))
    }

    /// Imports `entities` into an existing model, which stitches them with
    /// its own configuration.
    ///
    /// # Errors
    ///
    /// Returns `ImportError::InvalidConfig` if the configuration is invalid.
    pub fn execute_into<I, O>(&self, entities: I, model: &mut Model<O>) -> Result<ImportReport>
    where
        I: IntoIterator<Item = Entity>,
        O: StitchObserver,
    {
        self.config.validate()?;

        let mut report = ImportReport::default();
        for (index, entity) in entities.into_iter().enumerate() {
            match self.convert(&entity) {
                Ok(Some(path)) => {
                    model.add_path(path)?;
                    report.imported += 1;
                }
                Ok(None) => {
                    debug!(index, kind = entity.kind(), "skipping unsupported entity");
                    report.unsupported += 1;
                }
                Err(err) => {
                    warn!(index, kind = entity.kind(), %err, "discarding entity");
                    report.discarded += 1;
                }
            }
        }

        info!(%report, paths = model.len(), "import finished");
        Ok(report)
    }

    /// Builds the path of one entity. `Ok(None)` marks an unsupported type.
    fn convert(&self, entity: &Entity) -> std::result::Result<Option<Path>, ImportError> {
        let path = match entity {
            Entity::Line { start, end } => self.line(*start, *end)?,
            Entity::Polyline { vertices, closed } => self.polyline(vertices, *closed)?,
            Entity::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => self.arc(*center, *radius, *start_angle, *end_angle)?,
            Entity::Circle { center, radius } => self.circle(*center, *radius)?,
            Entity::Spline { .. } => return Ok(None),
        };
        Ok(Some(path))
    }

    fn line(&self, start: Vector, end: Vector) -> std::result::Result<Path, ImportError> {
        let start = self.snap(start)?;
        let end = self.snap(end)?;
        if self.coincident(start, end) {
            return Err(invalid("zero-length line"));
        }
        Ok(Path::from_move(Move::line(start, end)))
    }

    fn polyline(
        &self,
        vertices: &[PolylineVertex],
        closed: bool,
    ) -> std::result::Result<Path, ImportError> {
        if vertices.len() < 2 {
            return Err(invalid("polyline needs at least two vertices"));
        }

        let points = vertices
            .iter()
            .map(|v| self.snap(v.point))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let n = points.len();
        let segments = if closed { n } else { n - 1 };
        let mut path = Path::new();
        for i in 0..segments {
            let (from, to) = (points[i], points[(i + 1) % n]);
            if self.coincident(from, to) {
                continue;
            }
            let m = Move::from_bulge(from, to, vertices[i].bulge)
                .map_err(|err| invalid(format!("segment {i}: {err}")))?;
            path.append_within(m, self.config.stitch.tolerance)
                .map_err(|err| invalid(format!("segment {i}: {err}")))?;
        }

        if path.is_empty() {
            return Err(invalid("polyline has no segment of non-zero length"));
        }
        Ok(path)
    }

    fn arc(
        &self,
        center: Vector,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> std::result::Result<Path, ImportError> {
        self.check_radius(radius)?;
        if !start_angle.is_finite() || !end_angle.is_finite() {
            return Err(invalid("non-finite arc angle"));
        }

        let start = radians(start_angle);
        let mut end = radians(end_angle);
        if end < start {
            end += TAU;
        }
        if end - start <= f64::EPSILON {
            return Err(invalid("zero-length arc"));
        }

        if end - start >= TAU - FULL_TURN_EPSILON {
            return self.circle(center, radius);
        }

        let center = self.snap(center)?;
        let (p1, p2, _) = arc_to_bulge(center, radius, start, end);
        let (p1, p2) = (self.snap(p1)?, self.snap(p2)?);
        if self.coincident(p1, p2) {
            return Err(invalid("arc shorter than precision"));
        }
        Ok(Path::from_move(Arc::new(p1, p2, center, false).into()))
    }

    /// A circle becomes two counter-clockwise semicircles starting at its
    /// rightmost point.
    fn circle(&self, center: Vector, radius: f64) -> std::result::Result<Path, ImportError> {
        self.check_radius(radius)?;

        let center = self.snap(center)?;
        let right = self.snap(center + Vector::new(radius, 0.0))?;
        let left = self.snap(center - Vector::new(radius, 0.0))?;
        if self.coincident(right, left) {
            return Err(invalid("circle radius below precision"));
        }

        let mut path = Path::from_move(Move::arc(right, left, center, false));
        path.append_within(
            Move::arc(left, right, center, false),
            self.config.stitch.tolerance,
        )
        .map_err(|err| invalid(err.to_string()))?;
        Ok(path)
    }

    fn check_radius(&self, radius: f64) -> std::result::Result<(), ImportError> {
        if radius.is_finite() && radius > self.config.stitch.tolerance {
            Ok(())
        } else {
            Err(invalid(format!("invalid radius {radius}")))
        }
    }

    /// Rounds both coordinates to the configured number of decimals.
    fn snap(&self, v: Vector) -> std::result::Result<Vector, ImportError> {
        if !v.is_finite() {
            return Err(invalid("non-finite coordinate"));
        }
        let scale = self.config.scale();
        Ok(Vector::new(
            (v.x() * scale).round() / scale,
            (v.y() * scale).round() / scale,
        ))
    }

    fn coincident(&self, a: Vector, b: Vector) -> bool {
        a.approx_eq_within(b, self.config.stitch.tolerance)
    }
}

fn invalid(reason: impl Into<String>) -> ImportError {
    ImportError::InvalidEntity(reason.into())
}
