//! Reversible text editing: a buffer whose every edit is recorded so it can
//! be undone and redone, either by replaying inverse deltas or by restoring
//! snapshots of the prior content.
//!
//! The engine is [`buffer`], [`operation`], [`history`] and [`invoker`];
//! [`session`] shares one invoker across threads. The remaining modules make
//! up the terminal harness.

pub mod app;
pub mod buffer;
pub mod command;
pub mod config;
pub mod event;
pub mod history;
pub mod invoker;
pub mod logging;
pub mod mode;
pub mod operation;
pub mod session;
pub mod state;
pub mod ui;

pub use buffer::Buffer;
pub use history::{History, HistoryError};
pub use invoker::{new_session, Invoker};
pub use operation::{Edit, EditError, Operation, Strategy};
pub use session::SharedSession;
