use super::{EmitPath, MachineMove};
use crate::model::{Model, StitchObserver};

/// Machine commands of one path, labelled for the output program.
#[derive(Debug, Clone)]
pub struct EmittedPath {
    pub name: String,
    pub moves: Vec<MachineMove>,
}

/// Emits every path of a model in model order.
#[derive(Debug)]
pub struct EmitModel<'a, O> {
    model: &'a Model<O>,
}

impl<'a, O: StitchObserver> EmitModel<'a, O> {
    /// Creates a new emit operation.
    #[must_use]
    pub fn new(model: &'a Model<O>) -> Self {
        Self { model }
    }

    /// Executes the operation. Paths are named by their position.
    #[must_use]
    pub fn execute(&self) -> Vec<EmittedPath> {
        self.model
            .iter()
            .enumerate()
            .map(|(index, path)| EmittedPath {
                name: index.to_string(),
                moves: EmitPath::new(path).execute(),
            })
            .collect()
    }
}
