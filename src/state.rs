use unicode_width::UnicodeWidthStr;

/// Single-line input with a cursor, used by INSERT and COMMAND modes.
///
/// This is scratch space: nothing typed here touches the document until it
/// is committed as an edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prompt {
    content: String,
    /// Cursor position in chars.
    cursor: usize,
}

impl Prompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display columns between the start of the line and the cursor.
    pub fn cursor_column(&self) -> usize {
        self.content[..self.byte_offset(self.cursor)].width()
    }

    pub fn insert_char(mut self, c: char) -> Self {
        let at = self.byte_offset(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
        self
    }

    pub fn delete_char(mut self) -> Self {
        if self.cursor > 0 {
            let at = self.byte_offset(self.cursor - 1);
            self.content.remove(at);
            self.cursor -= 1;
        }
        self
    }

    pub fn move_left(mut self) -> Self {
        self.cursor = self.cursor.saturating_sub(1);
        self
    }

    pub fn move_right(mut self) -> Self {
        if self.cursor < self.content.chars().count() {
            self.cursor += 1;
        }
        self
    }

    pub fn move_start(mut self) -> Self {
        self.cursor = 0;
        self
    }

    pub fn move_end(mut self) -> Self {
        self.cursor = self.content.chars().count();
        self
    }

    /// Hands back the typed text and an empty prompt.
    pub fn take(self) -> (String, Self) {
        (self.content, Self::new())
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.content
            .char_indices()
            .nth(chars)
            .map_or(self.content.len(), |(idx, _)| idx)
    }
}

// ═══════════════════════════════════════════════════════════════
// Message log with functional append
// ═══════════════════════════════════════════════════════════════

const MAX_LOG_LINES: usize = 1000;

/// Bounded log of harness messages, oldest first.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    lines: Vec<String>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn with_message(mut self, msg: impl Into<String>) -> Self {
        self.lines.push(msg.into());

        if self.lines.len() > MAX_LOG_LINES {
            self.lines.drain(0..(self.lines.len() - MAX_LOG_LINES));
        }

        self
    }

    pub fn with_messages<I, S>(self, msgs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        msgs.into_iter().fold(self, MessageLog::with_message)
    }
}
