//! Undo/redo log
//!
//! Two stacks over a linear timeline: `undo` holds applied operations and
//! `redo` holds undone ones, most recent last in both. An entry lives in
//! exactly one of them.

use crate::operation::Operation;
use std::collections::VecDeque;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("Nothing to undo or redo")]
    EmptyHistory,
}

#[derive(Debug, Clone, Default)]
pub struct History {
    undo: VecDeque<Operation>,
    redo: Vec<Operation>,
    max_depth: Option<usize>,
}

impl History {
    /// Unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// History that keeps at most `max_depth` undo steps, evicting the
    /// oldest first. A depth of zero is treated as one.
    pub fn with_max_depth(max_depth: Option<usize>) -> Self {
        Self {
            max_depth: max_depth.map(|depth| depth.max(1)),
            ..Self::default()
        }
    }

    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Records a newly applied operation. Any undone future is discarded.
    pub fn push(&mut self, op: Operation) {
        self.redo.clear();
        self.push_undo(op);
    }

    pub fn pop_undo(&mut self) -> Result<&Operation, HistoryError> {
        let op = self.undo.pop_back().ok_or(HistoryError::EmptyHistory)?;
        self.redo.push(op);
        self.redo.last().ok_or(HistoryError::EmptyHistory)
    }

    pub fn pop_redo(&mut self) -> Result<&Operation, HistoryError> {
        let op = self.redo.pop().ok_or(HistoryError::EmptyHistory)?;
        self.push_undo(op);
        self.undo.back().ok_or(HistoryError::EmptyHistory)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Applied operations, oldest first.
    pub fn undo_stack(&self) -> impl DoubleEndedIterator<Item = &Operation> {
        self.undo.iter()
    }

    /// Undone operations, oldest undo first (the next redo is last).
    pub fn redo_stack(&self) -> impl DoubleEndedIterator<Item = &Operation> {
        self.redo.iter()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    fn push_undo(&mut self, op: Operation) {
        self.undo.push_back(op);

        if let Some(max) = self.max_depth {
            while self.undo.len() > max {
                if let Some(evicted) = self.undo.pop_front() {
                    tracing::debug!(op = %evicted.label(), max, "evicted oldest undo step");
                }
            }
        }
    }
}
