//! Keyboard input handling

use game_core::{GameState, Key};

/// Handle key down event; returns true when the browser default should be
/// suppressed (arrow keys would scroll the page)
pub fn handle_key_down(game: &mut GameState, name: &str) -> bool {
    match Key::from_name(name) {
        Some(key) => {
            game.key_down(key);
            key.suppresses_default()
        }
        None => false,
    }
}

/// Handle key up event; releasing space serves
pub fn handle_key_up(game: &mut GameState, name: &str) {
    if let Some(key) = Key::from_name(name) {
        if let Some(result) = game.key_up(key) {
            if !result.success {
                log::debug!("serve ignored in {:?}", result.from_state);
            }
        }
    }
}
