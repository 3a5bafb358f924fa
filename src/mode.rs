use ratatui::style::Color;

/// Modal states inspired by Vim's philosophy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Insert,
    Command,
}

impl Mode {
    pub const fn name(&self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
            Mode::Command => "COMMAND",
        }
    }

    pub const fn color(&self) -> Color {
        match self {
            Mode::Normal => Color::Cyan,
            Mode::Insert => Color::Green,
            Mode::Command => Color::Yellow,
        }
    }

    /// Text shown before the input line; empty when there is no input line.
    pub const fn prompt(&self) -> &'static str {
        match self {
            Mode::Normal => "",
            Mode::Insert => "> ",
            Mode::Command => ":",
        }
    }

    pub const fn shows_cursor(&self) -> bool {
        matches!(self, Mode::Insert | Mode::Command)
    }

    pub const fn help_text(&self) -> &'static str {
        match self {
            Mode::Normal => "i:Insert | ::Command | u:Undo | r:Redo | x:Erase | q:Quit",
            Mode::Insert => "ESC:Normal | ↵:Commit | ^Z:Undo | ^Y:Redo",
            Mode::Command => "ESC:Cancel | ↵:Execute | :help",
        }
    }
}
