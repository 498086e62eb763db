mod config;
mod observer;
mod stitch;

pub use config::StitchConfig;
pub use observer::{NoopObserver, RecordingObserver, StitchEvent, StitchObserver, TracingObserver};

use slotmap::SlotMap;

use crate::error::Result;
use crate::geometry::{Bounds, Path};

slotmap::new_key_type! {
    /// Unique identifier for a path owned by a [`Model`].
    pub struct PathId;
}

/// A drawing as a collection of maximal continuous paths.
///
/// Paths live in an arena and are addressed by [`PathId`]; a separate order
/// list fixes the scan order of the stitching algorithm, which is
/// significant: the first matching path wins.
///
/// After every insertion no two open paths share a joinable endpoint, and
/// every closed path runs counter-clockwise.
#[derive(Debug)]
pub struct Model<O = NoopObserver> {
    paths: SlotMap<PathId, Path>,
    order: Vec<PathId>,
    config: StitchConfig,
    observer: O,
}

impl Model {
    /// Creates an empty model with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StitchConfig::default())
    }

    /// Creates an empty model with the given configuration.
    #[must_use]
    pub fn with_config(config: StitchConfig) -> Self {
        Self::with_observer(config, NoopObserver)
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: StitchObserver> Model<O> {
    /// Creates an empty model that reports its decisions to `observer`.
    #[must_use]
    pub fn with_observer(config: StitchConfig, observer: O) -> Self {
        Self {
            paths: SlotMap::with_key(),
            order: Vec::new(),
            config,
            observer,
        }
    }

    #[must_use]
    pub fn config(&self) -> &StitchConfig {
        &self.config
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Number of paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Path ids in scan order.
    #[must_use]
    pub fn ids(&self) -> &[PathId] {
        &self.order
    }

    #[must_use]
    pub fn get(&self, id: PathId) -> Option<&Path> {
        self.paths.get(id)
    }

    /// Iterates over the paths in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> + '_ {
        self.order.iter().filter_map(|&id| self.paths.get(id))
    }

    /// Consumes the model, returning its paths in scan order.
    #[must_use]
    pub fn into_paths(mut self) -> Vec<Path> {
        self.order
            .iter()
            .filter_map(|&id| self.paths.remove(id))
            .collect()
    }

    /// Bounding box of every path, or `None` for an empty model.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        self.iter()
            .filter_map(Path::bounds)
            .reduce(|acc, b| acc.union(&b))
    }

    /// Routes every path of `other`, in its scan order, through the
    /// insertion algorithm of this model.
    ///
    /// This is the reduction step for drawings imported into separate
    /// models in parallel.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Model::add_path`].
    pub fn absorb<P: StitchObserver>(&mut self, other: Model<P>) -> Result<()> {
        for path in other.into_paths() {
            self.add_path(path)?;
        }
        Ok(())
    }

    fn notify(&mut self, event: StitchEvent) {
        self.observer.on_event(&event);
    }
}
