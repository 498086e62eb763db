use super::{Model, PathId, StitchEvent, StitchObserver};
use crate::error::{PathError, Result};
use crate::geometry::Path;

/// Open paths that the incoming path can attach to.
#[derive(Debug, Clone, Copy, Default)]
struct Neighbours {
    /// An open path ending where the incoming path starts.
    pre: Option<PathId>,
    /// An open path starting where the incoming path ends.
    post: Option<PathId>,
}

impl Neighbours {
    fn is_empty(self) -> bool {
        self.pre.is_none() && self.post.is_none()
    }
}

impl<O: StitchObserver> Model<O> {
    /// Inserts a path, merging it with the open paths it connects to.
    ///
    /// Closed paths are normalized to counter-clockwise winding and stored
    /// as-is. Open paths are matched against existing open paths by their
    /// endpoints (first match in scan order wins) and then:
    ///
    /// - stored on their own when nothing matches,
    /// - prepended to the path they lead into,
    /// - appended to the path they continue,
    /// - used to close a path whose both ends they touch,
    /// - used to bridge two paths into one, removing the second.
    ///
    /// Returns the id of the path that now contains the inserted moves.
    ///
    /// # Errors
    ///
    /// Returns `PathError::EmptyPath` if `path` has no moves.
    ///
    /// # Panics
    ///
    /// Panics if a join fails on endpoints the scan already matched, which
    /// means the tolerance handling is inconsistent.
    pub fn add_path(&mut self, mut path: Path) -> Result<PathId> {
        if path.is_empty() {
            return Err(PathError::EmptyPath.into());
        }
        let tolerance = self.config.tolerance;

        if path.is_closed_within(tolerance) {
            let id = self.push(path);
            self.notify(StitchEvent::Closed { id });
            self.normalize_winding(id);
            return Ok(id);
        }

        let mut found = self.scan(&path);
        if self.config.reverse_fragments {
            found = self.reorient(&mut path, found);
        }

        let id = match (found.pre, found.post) {
            (None, None) => {
                let id = self.push(path);
                self.notify(StitchEvent::Isolated { id });
                id
            }
            (None, Some(post)) => {
                let tail = std::mem::take(&mut self.paths[post]);
                join_matched(&mut path, tail, tolerance);
                self.paths[post] = path;
                self.notify(StitchEvent::Prepended { id: post });
                post
            }
            (Some(pre), None) => {
                join_matched(&mut self.paths[pre], path, tolerance);
                self.notify(StitchEvent::Appended { id: pre });
                pre
            }
            (Some(pre), Some(post)) if pre == post => {
                join_matched(&mut self.paths[pre], path, tolerance);
                self.notify(StitchEvent::LoopClosed { id: pre });
                pre
            }
            (Some(pre), Some(post)) => {
                join_matched(&mut self.paths[pre], path, tolerance);
                let tail = self.remove(post);
                join_matched(&mut self.paths[pre], tail, tolerance);
                self.notify(StitchEvent::Bridged {
                    id: pre,
                    absorbed: post,
                });
                pre
            }
        };

        if self.paths[id].is_closed_within(tolerance) {
            self.normalize_winding(id);
        }
        Ok(id)
    }

    /// Single pass over the open paths in scan order.
    fn scan(&self, path: &Path) -> Neighbours {
        let (Some(start), Some(end)) = (path.start(), path.end()) else {
            return Neighbours::default();
        };
        let tolerance = self.config.tolerance;
        let mut found = Neighbours::default();

        for &id in &self.order {
            if found.pre.is_some() && found.post.is_some() {
                break;
            }
            let candidate = &self.paths[id];
            if candidate.is_closed_within(tolerance) {
                continue;
            }
            let (Some(c_start), Some(c_end)) = (candidate.start(), candidate.end()) else {
                continue;
            };
            if found.pre.is_none() && c_end.approx_eq_within(start, tolerance) {
                found.pre = Some(id);
            }
            if found.post.is_none() && end.approx_eq_within(c_start, tolerance) {
                found.post = Some(id);
            }
        }
        found
    }

    /// Completes a forward scan with reverse-oriented matches.
    ///
    /// With no forward neighbour the incoming path itself is reversed and
    /// rescanned. With a neighbour on one side only, an open path touching
    /// the free end backwards is reversed to become the missing neighbour.
    fn reorient(&mut self, path: &mut Path, found: Neighbours) -> Neighbours {
        let tolerance = self.config.tolerance;
        match (found.pre, found.post) {
            (None, None) => {
                path.reverse();
                let reversed = self.scan(path);
                if reversed.is_empty() {
                    path.reverse();
                } else {
                    self.notify(StitchEvent::Reoriented { id: None });
                }
                reversed
            }
            (Some(pre), None) => {
                let Some(end) = path.end() else {
                    return found;
                };
                match self.find_open(pre, |c| {
                    c.end().is_some_and(|e| e.approx_eq_within(end, tolerance))
                }) {
                    Some(post) => {
                        self.reverse_existing(post);
                        Neighbours {
                            pre: Some(pre),
                            post: Some(post),
                        }
                    }
                    None => found,
                }
            }
            (None, Some(post)) => {
                let Some(start) = path.start() else {
                    return found;
                };
                match self.find_open(post, |c| {
                    c.start().is_some_and(|s| s.approx_eq_within(start, tolerance))
                }) {
                    Some(pre) => {
                        self.reverse_existing(pre);
                        Neighbours {
                            pre: Some(pre),
                            post: Some(post),
                        }
                    }
                    None => found,
                }
            }
            (Some(_), Some(_)) => found,
        }
    }

    /// First open path other than `exclude` satisfying `predicate`.
    fn find_open(&self, exclude: PathId, predicate: impl Fn(&Path) -> bool) -> Option<PathId> {
        let tolerance = self.config.tolerance;
        self.order.iter().copied().find(|&id| {
            let candidate = &self.paths[id];
            id != exclude && !candidate.is_closed_within(tolerance) && predicate(candidate)
        })
    }

    fn reverse_existing(&mut self, id: PathId) {
        self.paths[id].reverse();
        self.notify(StitchEvent::Reoriented { id: Some(id) });
    }

    fn normalize_winding(&mut self, id: PathId) {
        if self.paths[id].is_clockwise() {
            self.paths[id].reverse();
            self.notify(StitchEvent::WindingNormalized { id });
        }
    }

    fn push(&mut self, path: Path) -> PathId {
        let id = self.paths.insert(path);
        self.order.push(id);
        id
    }

    fn remove(&mut self, id: PathId) -> Path {
        self.order.retain(|&other| other != id);
        self.paths.remove(id).unwrap_or_default()
    }
}

/// Joins two paths whose endpoints the scan has already matched.
fn join_matched(target: &mut Path, other: Path, tolerance: f64) {
    if let Err(err) = target.join_within(other, tolerance) {
        panic!("stitching invariant violated after endpoint match: {err}");
    }
}
