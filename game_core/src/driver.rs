//! Frame driver: wall clock in, one update and one render out

use crate::game::GameState;
use crate::render::{draw_frame, Scoreboard, Surface};

/// Turns monotonic millisecond timestamps into per-frame `dt` seconds
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous call. The first frame has no previous
    /// timestamp and yields 0; a clock that steps backwards also yields 0.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) if now_ms > last => ((now_ms - last) / 1000.0) as f32,
            _ => 0.0,
        };
        self.last_ms = Some(self.last_ms.map_or(now_ms, |last| last.max(now_ms)));
        dt
    }
}

/// One animation frame: update from the clock, refresh the score, render
pub fn run_frame(
    game: &mut GameState,
    clock: &mut FrameClock,
    now_ms: f64,
    surface: &mut dyn Surface,
    scoreboard: &mut dyn Scoreboard,
) {
    let dt = clock.advance(now_ms);
    game.update(dt);

    if game.events.scored() {
        scoreboard.show(&game.score.to_string());
    }

    draw_frame(game, surface);
}
