use crate::command::Command;
use crate::config::EngineConfig;
use crate::event::Event;
use crate::invoker::Invoker;
use crate::mode::Mode;
use crate::operation::Edit;
use crate::state::{MessageLog, Prompt};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};

/// Harness state with functional transitions over one editing session.
#[derive(Debug, Clone)]
pub struct App {
    mode: Mode,
    session: Invoker,
    log: MessageLog,
    prompt: Prompt,
    status: String,
    quit: bool,
}

impl App {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            mode: Mode::Normal,
            session: Invoker::with_config(config),
            log: MessageLog::new().with_message(format!(
                "Session started ({} strategy). Press 'i' to type, ':' for commands.",
                config.strategy.name()
            )),
            prompt: Prompt::new(),
            status: "Ready".into(),
            quit: false,
        }
    }

    // ═══════════════════════════════════════════════════════════════
    // Pure accessors (no side effects)
    // ═══════════════════════════════════════════════════════════════

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub fn session(&self) -> &Invoker {
        &self.session
    }

    pub fn messages(&self) -> &[String] {
        self.log.lines()
    }

    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub const fn should_quit(&self) -> bool {
        self.quit
    }

    // ═══════════════════════════════════════════════════════════════
    // Event handler: Self → Event → Result<Self>
    // ═══════════════════════════════════════════════════════════════

    pub fn handle_event(self, event: Event) -> Result<Self> {
        match event {
            Event::Key(key) => self.handle_key(key.code, key.modifiers),
            Event::Tick => Ok(self),
        }
    }

    fn handle_key(self, code: KeyCode, mods: KeyModifiers) -> Result<Self> {
        if mods.contains(KeyModifiers::CONTROL) {
            return self.handle_ctrl_key(code);
        }

        match self.mode {
            Mode::Normal => self.handle_normal_key(code),
            Mode::Insert => self.handle_insert_key(code),
            Mode::Command => self.handle_command_key(code),
        }
    }

    // ═══════════════════════════════════════════════════════════════
    // Mode: NORMAL
    // ═══════════════════════════════════════════════════════════════

    fn handle_normal_key(mut self, code: KeyCode) -> Result<Self> {
        match code {
            KeyCode::Char('i') => {
                self.mode = Mode::Insert;
                self.status = "Entered INSERT mode".into();
            }
            KeyCode::Char(':') => {
                self.mode = Mode::Command;
                self.prompt = Prompt::new();
                self.status = "Entered COMMAND mode".into();
            }
            KeyCode::Char('u') => self = self.undo(),
            KeyCode::Char('r') => self = self.redo(),
            KeyCode::Char('x') => self = self.execute(Edit::erase(1)),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
        Ok(self)
    }

    // ═══════════════════════════════════════════════════════════════
    // Mode: INSERT
    // ═══════════════════════════════════════════════════════════════

    fn handle_insert_key(mut self, code: KeyCode) -> Result<Self> {
        match code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                self.status = "Exited to NORMAL mode".into();
            }
            KeyCode::Enter => {
                let (text, prompt) = self.prompt.take();
                self.prompt = prompt;
                if !text.is_empty() {
                    self = self.execute(Edit::insert(text));
                }
            }
            code => self.prompt = edit_prompt(self.prompt, code),
        }
        Ok(self)
    }

    // ═══════════════════════════════════════════════════════════════
    // Mode: COMMAND
    // ═══════════════════════════════════════════════════════════════

    fn handle_command_key(mut self, code: KeyCode) -> Result<Self> {
        match code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                self.prompt = Prompt::new();
                self.status = "Command cancelled".into();
            }
            KeyCode::Backspace if self.prompt.content().is_empty() => {
                self.mode = Mode::Normal;
                self.status = "Command cancelled".into();
            }
            KeyCode::Enter => {
                let (text, prompt) = self.prompt.take();
                self.prompt = prompt;
                self.mode = Mode::Normal;
                self = self.execute_command(&text);
            }
            code => self.prompt = edit_prompt(self.prompt, code),
        }
        Ok(self)
    }

    // ═══════════════════════════════════════════════════════════════
    // Control key handlers
    // ═══════════════════════════════════════════════════════════════

    fn handle_ctrl_key(mut self, code: KeyCode) -> Result<Self> {
        match code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('z') => self = self.undo(),
            KeyCode::Char('y') => self = self.redo(),
            KeyCode::Char('w') if self.mode != Mode::Normal => {
                self.prompt = Prompt::new();
                self.status = "Input cleared".into();
            }
            KeyCode::Char('l') => {
                self.log = MessageLog::new();
                self.status = "Messages cleared".into();
            }
            _ => {}
        }
        Ok(self)
    }

    // ═══════════════════════════════════════════════════════════════
    // Session operations
    // ═══════════════════════════════════════════════════════════════

    fn execute(mut self, edit: Edit) -> Self {
        self.session.execute(edit);
        if let Some(op) = self.session.last_applied() {
            self.status = format!("Applied {}", op.label());
        }
        self
    }

    fn undo(mut self) -> Self {
        self.status = match self.session.undo() {
            Some(op) => format!("Undid {}", op.label()),
            None => "Nothing to undo".into(),
        };
        self
    }

    fn redo(mut self) -> Self {
        self.status = match self.session.redo() {
            Some(op) => format!("Redid {}", op.label()),
            None => "Nothing to redo".into(),
        };
        self
    }

    fn execute_command(mut self, text: &str) -> Self {
        match Command::parse(text) {
            Ok(Command::Quit) => {
                self.quit = true;
                self.status = "Quitting...".into();
            }
            Ok(Command::Help) => {
                self.log = self.log.with_messages(Command::help().iter().copied());
                self.status = "Help displayed".into();
            }
            Ok(Command::Edit(edit)) => self = self.execute(edit),
            Ok(Command::Undo) => self = self.undo(),
            Ok(Command::Redo) => self = self.redo(),
            Ok(Command::Strategy(strategy)) => {
                self.session.set_strategy(strategy);
                self.status = format!("Recording edits as {}", strategy.name());
            }
            Ok(Command::History) => {
                let history = self.session.history();
                let lines: Vec<String> = std::iter::once(format!(
                    "History: {} undo, {} redo",
                    history.undo_len(),
                    history.redo_len()
                ))
                .chain(history.undo_stack().rev().map(|op| format!("  undo {}", op.label())))
                .chain(history.redo_stack().rev().map(|op| format!("  redo {}", op.label())))
                .collect();
                self.log = self.log.with_messages(lines);
                self.status = "History listed".into();
            }
            Ok(Command::Clear) => {
                self.session.clear_history();
                self.status = "History cleared".into();
            }
            Err(e) => {
                self.status = format!("Error: {}", e);
            }
        }
        self
    }
}

/// Line-editing keys shared by INSERT and COMMAND modes.
fn edit_prompt(prompt: Prompt, code: KeyCode) -> Prompt {
    match code {
        KeyCode::Char(c) => prompt.insert_char(c),
        KeyCode::Backspace => prompt.delete_char(),
        KeyCode::Left => prompt.move_left(),
        KeyCode::Right => prompt.move_right(),
        KeyCode::Home => prompt.move_start(),
        KeyCode::End => prompt.move_end(),
        _ => prompt,
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn press(app: App, code: KeyCode) -> App {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
            .unwrap()
    }

    fn ctrl(app: App, c: char) -> App {
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::CONTROL,
        )))
        .unwrap()
    }

    fn type_str(app: App, text: &str) -> App {
        text.chars().fold(app, |app, c| press(app, KeyCode::Char(c)))
    }

    fn command(app: App, text: &str) -> App {
        let app = type_str(press(app, KeyCode::Char(':')), text);
        press(app, KeyCode::Enter)
    }

    #[test]
    fn test_insert_mode_commits_on_enter() {
        let mut app = press(App::default(), KeyCode::Char('i'));
        app = type_str(app, "Hello, ");
        assert_eq!(app.session().content(), "");

        app = press(app, KeyCode::Enter);
        app = press(type_str(app, "World!"), KeyCode::Enter);
        assert_eq!(app.session().content(), "Hello, World!");
        assert_eq!(app.session().history().undo_len(), 2);

        app = ctrl(app, 'z');
        assert_eq!(app.session().content(), "Hello, ");
        assert_eq!(app.mode(), Mode::Insert);
    }

    #[test]
    fn test_normal_mode_undo_redo() {
        let mut app = command(App::default(), "insert abc");
        app = press(app, KeyCode::Char('x'));
        assert_eq!(app.session().content(), "ab");

        app = press(app, KeyCode::Char('u'));
        assert_eq!(app.session().content(), "abc");
        app = press(app, KeyCode::Char('u'));
        app = press(app, KeyCode::Char('u'));
        assert_eq!(app.status(), "Nothing to undo");

        app = press(app, KeyCode::Char('r'));
        assert_eq!(app.session().content(), "abc");
    }

    #[test]
    fn test_commands_drive_session() {
        let mut app = command(App::default(), "strategy snapshot");
        app = command(app, "set draft one");
        app = command(app, "erase 4");
        assert_eq!(app.session().content(), "draft");
        app = command(app, "undo");
        assert_eq!(app.session().content(), "draft one");
        app = command(app, "history");
        assert!(app.messages().iter().any(|line| line.starts_with("History: 1 undo, 1 redo")));
        assert_eq!(app.mode(), Mode::Normal);
    }

    #[test]
    fn test_invalid_command_reports_error() {
        let app = command(App::default(), "erase -1");
        assert!(app.status().starts_with("Error: Invalid operation"));
        assert_eq!(app.session().content(), "");
    }

    #[test]
    fn test_backspace_on_empty_command_returns_to_normal() {
        let mut app = press(App::default(), KeyCode::Char(':'));
        app = press(type_str(app, "u"), KeyCode::Backspace);
        assert_eq!(app.mode(), Mode::Command);

        app = press(app, KeyCode::Backspace);
        assert_eq!(app.mode(), Mode::Normal);
        assert_eq!(app.status(), "Command cancelled");
    }

    #[test]
    fn test_quit() {
        assert!(press(App::default(), KeyCode::Char('q')).should_quit());
        assert!(command(App::default(), "quit").should_quit());
    }
}
