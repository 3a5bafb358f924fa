//! Thread-safe handle over one editing session.
//!
//! A single lock guards the buffer and history together. It is taken for
//! one call and released before the call returns.

use crate::config::EngineConfig;
use crate::invoker::Invoker;
use crate::operation::{Edit, EditError, Operation, Strategy};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<Invoker>>,
}

impl SharedSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        Self::from(Invoker::with_config(config))
    }

    pub fn execute(&self, edit: Edit) {
        self.inner.lock().execute(edit);
    }

    pub fn execute_operation(&self, op: Operation) -> Result<(), EditError> {
        self.inner.lock().execute_operation(op)
    }

    /// Returns a copy of the reverted operation, `None` if history was empty.
    pub fn undo(&self) -> Option<Operation> {
        self.inner.lock().undo().cloned()
    }

    pub fn redo(&self) -> Option<Operation> {
        self.inner.lock().redo().cloned()
    }

    pub fn content(&self) -> String {
        self.inner.lock().content().to_string()
    }

    pub fn set_strategy(&self, strategy: Strategy) {
        self.inner.lock().set_strategy(strategy);
    }

    /// Runs `f` against the session while holding the lock once.
    pub fn with<R>(&self, f: impl FnOnce(&Invoker) -> R) -> R {
        f(&self.inner.lock())
    }
}

impl From<Invoker> for SharedSession {
    fn from(invoker: Invoker) -> Self {
        Self {
            inner: Arc::new(Mutex::new(invoker)),
        }
    }
}
