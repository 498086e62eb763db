use super::PathId;

/// A decision taken by the stitching algorithm for one incoming path.
///
/// `Reoriented` and `WindingNormalized` accompany the main decision and are
/// reported before and after it respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StitchEvent {
    /// No open path matched; the path was stored on its own.
    Isolated { id: PathId },
    /// The path arrived closed and was stored on its own.
    Closed { id: PathId },
    /// The path was placed in front of the open path `id`.
    Prepended { id: PathId },
    /// The path was attached after the open path `id`.
    Appended { id: PathId },
    /// The path joined both ends of `id`, closing it.
    LoopClosed { id: PathId },
    /// The path bridged `id` and `absorbed`; `absorbed` no longer exists.
    Bridged { id: PathId, absorbed: PathId },
    /// A fragment was reversed so that it could merge. `id` is `None` for
    /// the incoming path, which does not have an id yet.
    Reoriented { id: Option<PathId> },
    /// The closed path `id` was reversed to run counter-clockwise.
    WindingNormalized { id: PathId },
}

/// Receives stitching decisions from a [`super::Model`].
///
/// Any `FnMut(&StitchEvent)` closure is an observer.
pub trait StitchObserver {
    fn on_event(&mut self, event: &StitchEvent);
}

impl<F: FnMut(&StitchEvent)> StitchObserver for F {
    fn on_event(&mut self, event: &StitchEvent) {
        self(event);
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl StitchObserver for NoopObserver {
    fn on_event(&mut self, _event: &StitchEvent) {}
}

/// Forwards every event to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl StitchObserver for TracingObserver {
    fn on_event(&mut self, event: &StitchEvent) {
        tracing::debug!(?event, "stitch");
    }
}

/// Collects every event in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Vec<StitchEvent>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[StitchEvent] {
        &self.events
    }

    /// Removes and returns the recorded events.
    pub fn take(&mut self) -> Vec<StitchEvent> {
        std::mem::take(&mut self.events)
    }
}

impl StitchObserver for RecordingObserver {
    fn on_event(&mut self, event: &StitchEvent) {
        self.events.push(*event);
    }
}
