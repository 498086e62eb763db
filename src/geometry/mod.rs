pub mod bounds;
pub mod moves;
pub mod path;

pub use bounds::Bounds;
pub use moves::{Arc, Line, Move};
pub use path::Path;
