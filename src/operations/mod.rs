pub mod emit;
pub mod gcode;
pub mod import;

pub use emit::{EmitModel, EmitPath, EmittedPath, MachineMove};
pub use gcode::{GcodeConfig, WriteGcode};
pub use import::{Entity, ImportConfig, ImportEntities, ImportReport, PolylineVertex};
