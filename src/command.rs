use std::{collections::VecDeque, fmt};

use crate::{DataCollection, SubsetState};

/// An undoable operation on a [`DataCollection`].
pub trait Command: fmt::Debug {
    /// Get the label shown in the history.
    fn label(&self) -> &str;

    /// Apply the operation.
    fn execute(&mut self, data: &mut DataCollection);

    /// Revert the last [`Command::execute`].
    fn undo(&mut self, data: &mut DataCollection);
}

/// What [`ApplySubsetState`] changed, kept for undo.
#[derive(Debug, Clone, PartialEq)]
enum AppliedSubsetState {
    Replaced { index: usize, old: SubsetState },
    Created { previous_edit_subset: Option<usize> },
}

/// Apply a subset state to the edit subset of a data collection.
///
/// When there is no edit subset, a new subset group is created and becomes the edit subset.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplySubsetState {
    subset_state: SubsetState,
    applied: Option<AppliedSubsetState>,
}

impl ApplySubsetState {
    /// Create a new command.
    pub fn new(subset_state: SubsetState) -> Self {
        Self {
            subset_state,
            applied: None,
        }
    }

    /// Get the subset state.
    pub fn subset_state(&self) -> &SubsetState {
        &self.subset_state
    }
}

impl Command for ApplySubsetState {
    fn label(&self) -> &str {
        "Apply subset state"
    }

    fn execute(&mut self, data: &mut DataCollection) {
        let replaced = data.edit_subset().and_then(|index| {
            data.replace_subset_state(index, self.subset_state.clone())
                .map(|old| AppliedSubsetState::Replaced { index, old })
        });

        let applied = replaced.unwrap_or_else(|| {
            let previous_edit_subset = data.edit_subset();
            data.push_subset_group(self.subset_state.clone());
            AppliedSubsetState::Created {
                previous_edit_subset,
            }
        });

        self.applied = Some(applied);
    }

    fn undo(&mut self, data: &mut DataCollection) {
        match self.applied.take() {
            Some(AppliedSubsetState::Replaced { index, old }) => {
                data.replace_subset_state(index, old);
            }
            Some(AppliedSubsetState::Created {
                previous_edit_subset,
            }) => {
                data.pop_subset_group();
                data.set_edit_subset(previous_edit_subset);
            }
            None => log::warn!("Undoing \"{}\" which was never executed", self.label()),
        }
    }
}

/// The undo/redo history of a session.
#[derive(Debug, Default)]
pub struct CommandStack {
    undo: VecDeque<Box<dyn Command>>,
    redo: Vec<Box<dyn Command>>,
    capacity: Option<usize>,
}

impl CommandStack {
    /// Create an unbounded command stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a command stack keeping at most `capacity` undo entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::default()
        }
    }

    /// Execute a command and push it to the history.
    ///
    /// This clears the redo history.
    pub fn execute(&mut self, mut command: Box<dyn Command>, data: &mut DataCollection) {
        log::debug!("Executing \"{}\"", command.label());
        command.execute(data);

        self.redo.clear();
        self.undo.push_back(command);

        if let Some(capacity) = self.capacity {
            while self.undo.len() > capacity {
                self.undo.pop_front();
            }
        }
    }

    /// Undo the last command, returns `false` if there is nothing to undo.
    pub fn undo(&mut self, data: &mut DataCollection) -> bool {
        let Some(mut command) = self.undo.pop_back() else {
            return false;
        };

        log::debug!("Undoing \"{}\"", command.label());
        command.undo(data);
        self.redo.push(command);
        true
    }

    /// Redo the last undone command, returns `false` if there is nothing to redo.
    pub fn redo(&mut self, data: &mut DataCollection) -> bool {
        let Some(mut command) = self.redo.pop() else {
            return false;
        };

        log::debug!("Redoing \"{}\"", command.label());
        command.execute(data);
        self.undo.push_back(command);
        true
    }

    /// Get the number of commands that can be undone.
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    /// Get the number of commands that can be redone.
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Clear the history.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

/// The shared state a viewer acts on.
#[derive(Debug, Default)]
pub struct Session {
    pub data_collection: DataCollection,
    pub command_stack: CommandStack,
}

impl Session {
    /// Create a new session.
    pub fn new(data_collection: DataCollection, command_stack: CommandStack) -> Self {
        Self {
            data_collection,
            command_stack,
        }
    }

    /// Execute a command against the data collection.
    pub fn execute(&mut self, command: impl Command + 'static) {
        self.command_stack
            .execute(Box::new(command), &mut self.data_collection);
    }

    /// Undo the last command.
    pub fn undo(&mut self) -> bool {
        self.command_stack.undo(&mut self.data_collection)
    }

    /// Redo the last undone command.
    pub fn redo(&mut self) -> bool {
        self.command_stack.redo(&mut self.data_collection)
    }
}
