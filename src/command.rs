use crate::operation::{Edit, EditError, Strategy};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),
    #[error("Invalid syntax: {0}")]
    InvalidSyntax(String),
    #[error("Empty command")]
    Empty,
    #[error(transparent)]
    Edit(#[from] EditError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Edit(Edit),
    Undo,
    Redo,
    Strategy(Strategy),
    History,
    Clear,
}

impl Command {
    /// Pure parser: &str → Result<Command, CommandError>
    ///
    /// Text arguments keep their inner spacing: everything after the first
    /// space following the verb is taken verbatim.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let trimmed = input.trim_start();
        if trimmed.trim_end().is_empty() {
            return Err(CommandError::Empty);
        }

        let (verb, rest) = match trimmed.split_once(' ') {
            Some((verb, rest)) => (verb, Some(rest).filter(|r| !r.trim().is_empty())),
            None => (trimmed.trim_end(), None),
        };

        match (verb, rest) {
            ("q" | "quit", None) => Ok(Command::Quit),
            ("h" | "help", None) => Ok(Command::Help),
            ("u" | "undo", None) => Ok(Command::Undo),
            ("r" | "redo", None) => Ok(Command::Redo),
            ("history", None) => Ok(Command::History),
            ("clear", None) => Ok(Command::Clear),
            ("i" | "insert", Some(text)) if !text.is_empty() => {
                Ok(Command::Edit(Edit::insert(text)))
            }
            ("i" | "insert", _) => Err(CommandError::InvalidSyntax(
                "insert requires text".into(),
            )),
            ("e" | "erase", None) => Ok(Command::Edit(Edit::erase(1))),
            ("e" | "erase", Some(n)) => Ok(Command::Edit(Edit::parse_erase(n)?)),
            ("set", text) => Ok(Command::Edit(Edit::replace(text.unwrap_or_default()))),
            ("strategy", Some(name)) => Ok(Command::Strategy(name.parse()?)),
            ("strategy", None) => Err(CommandError::InvalidSyntax(
                "strategy requires delta or snapshot".into(),
            )),
            (cmd, _) => Err(CommandError::Unknown(cmd.to_string())),
        }
    }

    pub const fn help() -> &'static [&'static str] {
        &[
            "Available commands:",
            "  :insert <text>    - Append text",
            "  :erase [n]        - Remove the last n characters (default 1)",
            "  :set [text]       - Replace the whole document (snapshot)",
            "  :undo, :redo      - Step through history",
            "  :strategy <name>  - Record edits as delta or snapshot",
            "  :history          - List undo and redo stacks",
            "  :clear            - Forget history, keep the text",
            "  :help             - Show this help",
            "  :q, :quit         - Exit application",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_commands() {
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
        assert_eq!(Command::parse("  q  "), Ok(Command::Quit));
    }

    #[test]
    fn test_history_commands() {
        assert_eq!(Command::parse("undo"), Ok(Command::Undo));
        assert_eq!(Command::parse("r"), Ok(Command::Redo));
        assert_eq!(Command::parse("history"), Ok(Command::History));
        assert_eq!(Command::parse("clear"), Ok(Command::Clear));
    }

    #[test]
    fn test_insert_keeps_spacing() {
        assert_eq!(
            Command::parse("insert Hello, "),
            Ok(Command::Edit(Edit::insert("Hello, ")))
        );
        assert_eq!(
            Command::parse("i  two  spaces"),
            Ok(Command::Edit(Edit::insert(" two  spaces")))
        );
        assert!(matches!(
            Command::parse("insert"),
            Err(CommandError::InvalidSyntax(_))
        ));
    }

    #[test]
    fn test_erase_command() {
        assert_eq!(Command::parse("erase"), Ok(Command::Edit(Edit::erase(1))));
        assert_eq!(Command::parse("erase 6"), Ok(Command::Edit(Edit::erase(6))));
        assert!(matches!(
            Command::parse("erase -2"),
            Err(CommandError::Edit(EditError::InvalidOperation(_)))
        ));
    }

    #[test]
    fn test_set_command() {
        assert_eq!(
            Command::parse("set fresh start"),
            Ok(Command::Edit(Edit::replace("fresh start")))
        );
        assert_eq!(Command::parse("set"), Ok(Command::Edit(Edit::replace(""))));
    }

    #[test]
    fn test_strategy_command() {
        assert_eq!(
            Command::parse("strategy snapshot"),
            Ok(Command::Strategy(Strategy::Snapshot))
        );
        assert!(matches!(
            Command::parse("strategy"),
            Err(CommandError::InvalidSyntax(_))
        ));
        assert!(matches!(
            Command::parse("strategy tree"),
            Err(CommandError::Edit(_))
        ));
    }

    #[test]
    fn test_unknown_and_empty() {
        assert_eq!(Command::parse("   "), Err(CommandError::Empty));
        assert_eq!(
            Command::parse("frobnicate now"),
            Err(CommandError::Unknown("frobnicate".into()))
        );
        assert_eq!(Command::parse("undo now"), Err(CommandError::Unknown("undo".into())));
    }
}
