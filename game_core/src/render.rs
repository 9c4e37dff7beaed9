//! Render step against an abstract 2D drawing surface

use crate::components::Side;
use crate::game::GameState;
use crate::geometry::Aabb;
use crate::params::Params;

/// Immediate-mode 2D target (a canvas 2D context in the browser)
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn set_fill(&mut self, color: &str);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
}

/// Text sink for the `"<left>|<right>"` score line
pub trait Scoreboard {
    fn show(&mut self, text: &str);
}

/// Clear the surface, then draw center line, left paddle, right paddle, ball
pub fn draw_frame(game: &GameState, surface: &mut dyn Surface) {
    let (width, height) = (surface.width(), surface.height());
    surface.clear_rect(0.0, 0.0, width, height);

    draw_middle_line(surface);

    for side in [Side::Left, Side::Right] {
        if let Some(paddle) = game.paddle(side) {
            draw_quad(surface, &paddle.aabb(), paddle.color);
        }
    }

    if let Some(ball) = game.ball() {
        draw_quad(surface, &ball.aabb(), ball.color);
    }
}

/// Dashed line down the middle; stops before a dash would run off the bottom
pub fn draw_middle_line(surface: &mut dyn Surface) {
    let x = surface.width() / 2.0 - Params::MID_LINE_HALF_WIDTH;
    let limit = surface.height() - Params::MID_LINE_SEGMENT;
    let mut y = 0.0;

    surface.set_fill(Params::FOREGROUND);
    while y < limit {
        surface.fill_rect(
            x,
            y,
            Params::MID_LINE_HALF_WIDTH * 2.0,
            Params::MID_LINE_SEGMENT,
        );
        y += Params::MID_LINE_SEGMENT + Params::MID_LINE_GAP;
    }
}

fn draw_quad(surface: &mut dyn Surface, quad: &Aabb, color: &str) {
    let size = quad.size();
    surface.set_fill(color);
    surface.fill_rect(quad.min.x, quad.min.y, size.x, size.y);
}
