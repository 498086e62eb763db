use tracing::warn;

use super::MachineMove;
use crate::geometry::{Move, Path};

/// Turns a path into machine commands.
///
/// The first command is a rapid to the start of the path. Every move then
/// becomes one cutting command. If a move does not start exactly where the
/// tool stands, a rapid to its start is inserted first.
#[derive(Debug)]
pub struct EmitPath<'a> {
    path: &'a Path,
}

impl<'a> EmitPath<'a> {
    /// Creates a new emit operation.
    #[must_use]
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    /// Executes the operation. An empty path yields no commands.
    #[must_use]
    pub fn execute(&self) -> Vec<MachineMove> {
        let Some(start) = self.path.start() else {
            return Vec::new();
        };

        let mut commands = Vec::with_capacity(self.path.len() + 1);
        commands.push(MachineMove::Rapid { to: start });

        let mut position = start;
        for m in self.path.moves() {
            if !m.start().exact_eq(position) {
                warn!(%position, next = %m.start(), "tool is not at move start, resynchronizing");
                commands.push(MachineMove::Rapid { to: m.start() });
            }
            commands.push(match m {
                Move::Line(line) => MachineMove::Linear { to: line.end() },
                Move::Arc(arc) => MachineMove::Circular {
                    to: arc.end(),
                    center_offset: arc.center() - arc.start(),
                    clockwise: arc.is_clockwise(),
                },
            });
            position = m.end();
        }
        commands
    }
}
