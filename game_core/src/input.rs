//! Keyboard input model

use crate::components::{PaddleIntent, Side};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    Serve,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` name; unrelated keys are `None`
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "w" | "W" => Some(Key::LeftUp),
            "s" | "S" => Some(Key::LeftDown),
            "ArrowUp" => Some(Key::RightUp),
            "ArrowDown" => Some(Key::RightDown),
            " " => Some(Key::Serve),
            _ => None,
        }
    }

    /// Arrow keys would otherwise scroll the page
    pub fn suppresses_default(self) -> bool {
        matches!(self, Key::RightUp | Key::RightDown)
    }
}

/// Held-key flags, one up/down pair per paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: PaddleIntent,
    pub right: PaddleIntent,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.set(key, true);
    }

    pub fn release(&mut self, key: Key) {
        self.set(key, false);
    }

    pub fn intent(&self, side: Side) -> PaddleIntent {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn set(&mut self, key: Key, held: bool) {
        match key {
            Key::LeftUp => self.left.up = held,
            Key::LeftDown => self.left.down = held,
            Key::RightUp => self.right.up = held,
            Key::RightDown => self.right.down = held,
            Key::Serve => {}
        }
    }
}
