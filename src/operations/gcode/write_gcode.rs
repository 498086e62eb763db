use super::GcodeConfig;
use crate::math::Vector;
use crate::operations::emit::{EmittedPath, MachineMove};

/// Renders emitted paths as a G-code program.
///
/// Each path opens with a comment naming it, followed by one line per
/// command: `G0` rapid, `G1` linear, `G2` clockwise and `G3`
/// counter-clockwise arcs with `I`/`J` center offsets.
#[derive(Debug, Clone, Default)]
pub struct WriteGcode {
    config: GcodeConfig,
}

impl WriteGcode {
    /// Creates a new write operation.
    #[must_use]
    pub fn new(config: GcodeConfig) -> Self {
        Self { config }
    }

    /// Executes the operation.
    #[must_use]
    pub fn execute(&self, paths: &[EmittedPath]) -> String {
        let mut lines = Vec::new();
        for path in paths {
            lines.push(format!("({}{})", self.config.comment_prefix, path.name));
            lines.extend(path.moves.iter().map(|m| self.command(m)));
        }

        let mut program = lines.join("\n");
        if !program.is_empty() {
            program.push('\n');
        }
        program
    }

    fn command(&self, m: &MachineMove) -> String {
        match m {
            MachineMove::Rapid { to } => format!("G0 {}", self.xy(*to)),
            MachineMove::Linear { to } => format!("G1 {}", self.xy(*to)),
            MachineMove::Circular {
                to,
                center_offset,
                clockwise,
            } => format!(
                "{} {} I{} J{}",
                if *clockwise { "G2" } else { "G3" },
                self.xy(*to),
                self.number(center_offset.x()),
                self.number(center_offset.y()),
            ),
        }
    }

    fn xy(&self, v: Vector) -> String {
        format!("X{} Y{}", self.number(v.x()), self.number(v.y()))
    }

    /// Fixed-point formatting that never prints a negative zero.
    fn number(&self, value: f64) -> String {
        let text = format!("{value:.prec$}", prec = self.config.decimals);
        match text.strip_prefix('-') {
            Some(unsigned) if unsigned.bytes().all(|b| b == b'0' || b == b'.') => {
                unsigned.to_owned()
            }
            _ => text,
        }
    }
}
