use crate::buffer::Buffer;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// How an edit is recorded so it can be reversed later.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Store only the change and replay its inverse.
    #[default]
    Delta,
    /// Store the whole prior content and restore it.
    Snapshot,
}

impl Strategy {
    pub const fn name(&self) -> &'static str {
        match self {
            Strategy::Delta => "delta",
            Strategy::Snapshot => "snapshot",
        }
    }
}

impl FromStr for Strategy {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "delta" | "command" => Ok(Strategy::Delta),
            "snapshot" | "memento" => Ok(Strategy::Snapshot),
            other => Err(EditError::InvalidOperation(format!(
                "unknown strategy '{}'",
                other
            ))),
        }
    }
}

/// A caller's edit request, before anything is captured from the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Append text.
    Insert(String),
    /// Remove up to this many characters from the end.
    Erase(usize),
    /// Replace the whole content.
    Replace(String),
}

impl Edit {
    pub fn insert(text: impl Into<String>) -> Self {
        Edit::Insert(text.into())
    }

    pub fn erase(length: usize) -> Self {
        Edit::Erase(length)
    }

    pub fn replace(text: impl Into<String>) -> Self {
        Edit::Replace(text.into())
    }

    /// Builds an erase from user input, rejecting negative or non-numeric
    /// lengths before they can reach a buffer.
    pub fn parse_erase(length: &str) -> Result<Self, EditError> {
        let length = length.trim();
        length
            .parse::<i64>()
            .map_err(|_| EditError::InvalidOperation(format!("'{}' is not a length", length)))
            .and_then(|n| {
                usize::try_from(n).map_err(|_| {
                    EditError::InvalidOperation(format!("erase length {} is negative", n))
                })
            })
            .map(Edit::Erase)
    }

    /// Captures what reversal needs from the current buffer and produces the
    /// operation to apply.
    pub fn into_operation(self, buffer: &Buffer, strategy: Strategy) -> Operation {
        match (self, strategy) {
            (Edit::Insert(text), Strategy::Delta) => Operation::Insert { text },
            (Edit::Erase(length), Strategy::Delta) => Operation::Erase {
                text: buffer.tail(length).to_string(),
                length,
            },
            (Edit::Insert(text), Strategy::Snapshot) => {
                let prior = buffer.content().to_string();
                let content = format!("{}{}", prior, text);
                Operation::Snapshot { prior, content }
            }
            (Edit::Erase(length), Strategy::Snapshot) => {
                let prior = buffer.content().to_string();
                let keep = prior.len() - buffer.tail(length).len();
                let content = prior[..keep].to_string();
                Operation::Snapshot { prior, content }
            }
            (Edit::Replace(content), _) => Operation::Snapshot {
                prior: buffer.content().to_string(),
                content,
            },
        }
    }
}

/// A recorded, self-inverting change to a [`Buffer`].
///
/// Each variant carries exactly what it needs to undo itself, so nothing is
/// recomputed by diffing the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Appended `text`; reverted by erasing its length.
    Insert { text: String },
    /// Removed `text` from the end after a request for `length` characters
    /// (`text` is shorter when the request was clamped); reverted by
    /// re-inserting `text`.
    Erase { text: String, length: usize },
    /// Overwrote `prior` with `content`; reverted by restoring `prior`.
    Snapshot { prior: String, content: String },
}

impl Operation {
    pub fn insert(text: impl Into<String>) -> Self {
        Operation::Insert { text: text.into() }
    }

    /// Checks that the data this operation reverts with still describes
    /// `buffer`. Operations built by [`Edit::into_operation`] always pass.
    pub fn validate(&self, buffer: &Buffer) -> Result<(), EditError> {
        match self {
            Operation::Insert { .. } => Ok(()),
            Operation::Erase { text, length } => {
                let count = text.chars().count();
                if count > *length {
                    return Err(EditError::InvalidOperation(format!(
                        "erase of {} holds {} removed chars",
                        length, count
                    )));
                }
                if count < *length && buffer.len() != count {
                    return Err(EditError::InvalidOperation(format!(
                        "erase of {} clamped to {} chars on a longer buffer",
                        length, count
                    )));
                }
                if buffer.tail(count) != text.as_str() {
                    return Err(EditError::InvalidOperation(format!(
                        "erase text {:?} does not match the end of the buffer",
                        text
                    )));
                }
                Ok(())
            }
            Operation::Snapshot { prior, .. } if prior.as_str() != buffer.content() => {
                Err(EditError::InvalidOperation(
                    "snapshot prior content does not match the buffer".into(),
                ))
            }
            Operation::Snapshot { .. } => Ok(()),
        }
    }

    pub fn apply(&self, buffer: &mut Buffer) {
        match self {
            Operation::Insert { text } => buffer.insert(text),
            Operation::Erase { text, .. } => {
                buffer.erase(text.chars().count());
            }
            Operation::Snapshot { content, .. } => buffer.overwrite(content),
        }
    }

    pub fn revert(&self, buffer: &mut Buffer) {
        match self {
            Operation::Insert { text } => {
                buffer.erase(text.chars().count());
            }
            Operation::Erase { text, .. } => buffer.insert(text),
            Operation::Snapshot { prior, .. } => buffer.overwrite(prior),
        }
    }

    pub const fn strategy(&self) -> Strategy {
        match self {
            Operation::Insert { .. } | Operation::Erase { .. } => Strategy::Delta,
            Operation::Snapshot { .. } => Strategy::Snapshot,
        }
    }

    /// Short description for logs and the history pane.
    pub fn label(&self) -> String {
        match self {
            Operation::Insert { text } => format!("insert {:?}", text),
            Operation::Erase { text, length } if text.chars().count() < *length => {
                format!("erase {} (clamped to {:?})", length, text)
            }
            Operation::Erase { text, length } => format!("erase {} {:?}", length, text),
            Operation::Snapshot { prior, content } => format!(
                "snapshot {} → {} chars",
                prior.chars().count(),
                content.chars().count()
            ),
        }
    }
}
