use crate::buffer::Buffer;
use crate::config::EngineConfig;
use crate::history::History;
use crate::operation::{Edit, EditError, Operation, Strategy};
use tracing::{debug, info, warn};

/// Creates an empty session: empty buffer, unbounded history, delta strategy.
pub fn new_session() -> Invoker {
    Invoker::new()
}

/// Sole mutator of a [`Buffer`]. Every edit is routed through the
/// [`History`], so nothing changes the content without an undo entry.
#[derive(Debug, Clone, Default)]
pub struct Invoker {
    buffer: Buffer,
    history: History,
    strategy: Strategy,
}

impl Invoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            buffer: Buffer::new(),
            history: History::with_max_depth(config.max_depth),
            strategy: config.strategy,
        }
    }

    // ═══════════════════════════════════════════════════════════════
    // Accessors
    // ═══════════════════════════════════════════════════════════════

    pub fn content(&self) -> &str {
        self.buffer.content()
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        if strategy != self.strategy {
            info!(from = self.strategy.name(), to = strategy.name(), "strategy switched");
            self.strategy = strategy;
        }
    }

    // ═══════════════════════════════════════════════════════════════
    // Mutations
    // ═══════════════════════════════════════════════════════════════

    /// Records `edit` with the session strategy and applies it.
    pub fn execute(&mut self, edit: Edit) {
        let op = edit.into_operation(&self.buffer, self.strategy);
        self.record(op);
    }

    /// Applies a prebuilt operation and records it. Operations whose
    /// reversal data no longer matches the buffer are rejected untouched.
    pub fn execute_operation(&mut self, op: Operation) -> Result<(), EditError> {
        if let Err(e) = op.validate(&self.buffer) {
            warn!(op = %op.label(), "rejected: {}", e);
            return Err(e);
        }
        self.record(op);
        Ok(())
    }

    fn record(&mut self, op: Operation) {
        debug!(op = %op.label(), "execute");
        op.apply(&mut self.buffer);
        self.history.push(op);
    }

    /// The operation the next undo would revert.
    pub fn last_applied(&self) -> Option<&Operation> {
        self.history.undo_stack().next_back()
    }

    /// Reverts the most recent operation. Returns `None` when there is
    /// nothing to undo, leaving the buffer untouched.
    pub fn undo(&mut self) -> Option<&Operation> {
        match self.history.pop_undo() {
            Ok(op) => {
                debug!(op = %op.label(), "undo");
                op.revert(&mut self.buffer);
                Some(op)
            }
            Err(e) => {
                debug!("undo skipped: {}", e);
                None
            }
        }
    }

    /// Re-applies the most recently undone operation, if any.
    pub fn redo(&mut self) -> Option<&Operation> {
        match self.history.pop_redo() {
            Ok(op) => {
                debug!(op = %op.label(), "redo");
                op.apply(&mut self.buffer);
                Some(op)
            }
            Err(e) => {
                debug!("redo skipped: {}", e);
                None
            }
        }
    }

    /// Forgets every undo and redo step; the content stays as it is.
    pub fn clear_history(&mut self) {
        info!(
            undo = self.history.undo_len(),
            redo = self.history.redo_len(),
            "history cleared"
        );
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_then_undo() {
        let mut session = new_session();
        session.execute(Edit::insert("Hello, "));
        session.execute(Edit::insert("World!"));
        assert_eq!(session.content(), "Hello, World!");

        assert_eq!(session.undo(), Some(&Operation::insert("World!")));
        assert_eq!(session.content(), "Hello, ");
        session.undo();
        assert_eq!(session.content(), "");
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut session = new_session();
        assert_eq!(session.undo(), None);
        assert_eq!(session.redo(), None);
        assert_eq!(session.content(), "");
    }

    #[test]
    fn test_redo_reapplies() {
        let mut session = new_session();
        session.execute(Edit::insert("abc"));
        session.execute(Edit::erase(2));
        session.undo();
        session.undo();
        session.redo();
        assert_eq!(session.content(), "abc");
        session.redo();
        assert_eq!(session.content(), "a");
        assert_eq!(session.redo(), None);
    }

    #[test]
    fn test_strategy_switch_keeps_recorded_variants() {
        let mut session = new_session();
        session.execute(Edit::insert("ab"));
        session.set_strategy(Strategy::Snapshot);
        session.execute(Edit::insert("cd"));
        assert_eq!(
            session.last_applied().map(Operation::strategy),
            Some(Strategy::Snapshot)
        );

        session.undo();
        assert_eq!(session.content(), "ab");
        assert_eq!(session.undo(), Some(&Operation::insert("ab")));
        assert_eq!(session.content(), "");
    }

    #[test]
    fn test_with_config_bounds_history() {
        let config = EngineConfig {
            max_depth: Some(1),
            strategy: Strategy::Snapshot,
        };
        let mut session = Invoker::with_config(&config);
        session.execute(Edit::insert("A"));
        session.execute(Edit::insert("B"));
        session.undo();
        assert_eq!(session.content(), "A");
        assert_eq!(session.undo(), None);
        assert_eq!(session.content(), "A");
    }

    #[test]
    fn test_execute_operation_rejects_mismatched_erase() {
        let mut session = new_session();
        session.execute(Edit::insert("abc"));

        let result = session.execute_operation(Operation::Erase {
            text: "zz".into(),
            length: 2,
        });
        assert!(matches!(result, Err(EditError::InvalidOperation(_))));
        assert_eq!(session.content(), "abc");
        assert_eq!(session.history().undo_len(), 1);

        session.undo();
        assert_eq!(session.content(), "");
    }

    #[test]
    fn test_execute_operation_rejects_stale_snapshot() {
        let mut session = new_session();
        session.execute(Edit::insert("hello"));

        let result = session.execute_operation(Operation::Snapshot {
            prior: "zzz".into(),
            content: "x".into(),
        });
        assert!(matches!(result, Err(EditError::InvalidOperation(_))));
        assert_eq!(session.content(), "hello");
        assert_eq!(session.history().undo_len(), 1);
    }

    #[test]
    fn test_execute_operation_accepts_matching_data() {
        let mut session = new_session();
        session.execute(Edit::insert("hello"));
        session
            .execute_operation(Operation::Erase {
                text: "lo".into(),
                length: 2,
            })
            .unwrap();
        assert_eq!(session.content(), "hel");
        session.undo();
        assert_eq!(session.content(), "hello");
    }

    #[test]
    fn test_clear_history_keeps_content() {
        let mut session = new_session();
        session.execute(Edit::insert("keep"));
        session.clear_history();
        assert_eq!(session.undo(), None);
        assert_eq!(session.content(), "keep");
    }
}
