//! Raw-mode keyboard input.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use morse_core::{Key, KeySource};

/// Restores cooked mode when dropped.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Non-blocking keyboard polling. Enter and Esc request a break; Ctrl+C
/// maps to a break too so raw mode always stays escapable.
pub struct Keyboard {
    poll_timeout: Duration,
}

impl Keyboard {
    pub fn new() -> Self {
        Self {
            poll_timeout: Duration::from_millis(20),
        }
    }

    fn map(event: KeyEvent) -> Option<Key> {
        if event.kind != KeyEventKind::Press {
            return None;
        }
        match event.code {
            KeyCode::Enter | KeyCode::Esc => Some(Key::Break),
            KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Key::Break)
            }
            KeyCode::Char(c)
                if !event
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(Key::Glyph(c.to_ascii_uppercase()))
            }
            _ => None,
        }
    }
}

impl KeySource for Keyboard {
    fn poll(&mut self) -> Option<Key> {
        // Terminal read errors are treated as silence; the drill loop
        // keeps its own time.
        match event::poll(self.poll_timeout) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) => Self::map(key),
                _ => None,
            },
            _ => None,
        }
    }
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}
