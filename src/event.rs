use anyhow::Result;
use crossterm::event::{self, KeyEvent, KeyEventKind};
use std::time::Duration;

/// Event stream abstraction
#[derive(Debug, Clone, Copy)]
pub enum Event {
    Key(KeyEvent),
    Tick,
}

/// Polls the terminal, yielding a tick when nothing arrives in time.
pub struct EventLoop {
    tick_rate: Duration,
}

impl EventLoop {
    pub fn new() -> Self {
        Self {
            tick_rate: Duration::from_millis(100),
        }
    }

    pub fn with_tick_rate(mut self, rate: Duration) -> Self {
        self.tick_rate = rate;
        self
    }

    pub fn next(&mut self) -> Result<Option<Event>> {
        if !event::poll(self.tick_rate)? {
            return Ok(Some(Event::Tick));
        }
        match event::read()? {
            // Releases would replay every keystroke on terminals that report them.
            event::Event::Key(key) if key.kind != KeyEventKind::Release => {
                Ok(Some(Event::Key(key)))
            }
            event::Event::Resize(_, _) => Ok(Some(Event::Tick)),
            _ => Ok(None),
        }
    }
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}
