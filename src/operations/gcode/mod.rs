mod config;
mod write_gcode;

pub use config::GcodeConfig;
pub use write_gcode::WriteGcode;
