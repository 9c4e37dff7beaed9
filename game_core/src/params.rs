use crate::components::Side;
use glam::Vec2;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface (canvas pixels)
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_HALF_WIDTH: f32 = 10.0;
    pub const PADDLE_HALF_HEIGHT: f32 = 50.0;
    pub const PADDLE_BORDER_PADDING: f32 = 20.0;
    pub const PADDLE_SPEED: f32 = 500.0; // pixels per second

    // Ball
    pub const BALL_HALF_SIZE: f32 = 10.0;
    pub const BALL_SPEED_LAUNCH: f32 = 400.0; // first rally only
    pub const BALL_SPEED_RESET: f32 = 500.0; // every rally after a point
    pub const BALL_SPEED_INCREMENT: f32 = 5.0; // added on each paddle hit

    // Collision response
    pub const BOUNCE_NUDGE: f32 = 3.0;
    pub const SCORE_MARGIN: f32 = 5.0;

    // Center line
    pub const MID_LINE_HALF_WIDTH: f32 = 10.0;
    pub const MID_LINE_SEGMENT: f32 = 20.0;
    pub const MID_LINE_GAP: f32 = 20.0;

    pub const FOREGROUND: &str = "#fff";

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub surface_width: f32,
    pub surface_height: f32,
    pub paddle_half_width: f32,
    pub paddle_half_height: f32,
    pub paddle_border_padding: f32,
    pub paddle_speed: f32,
    pub ball_half_size: f32,
    pub ball_speed_launch: f32,
    pub ball_speed_reset: f32,
    pub ball_speed_increment: f32,
    pub bounce_nudge: f32,
    pub score_margin: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_width: Params::SURFACE_WIDTH,
            surface_height: Params::SURFACE_HEIGHT,
            paddle_half_width: Params::PADDLE_HALF_WIDTH,
            paddle_half_height: Params::PADDLE_HALF_HEIGHT,
            paddle_border_padding: Params::PADDLE_BORDER_PADDING,
            paddle_speed: Params::PADDLE_SPEED,
            ball_half_size: Params::BALL_HALF_SIZE,
            ball_speed_launch: Params::BALL_SPEED_LAUNCH,
            ball_speed_reset: Params::BALL_SPEED_RESET,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            bounce_nudge: Params::BOUNCE_NUDGE,
            score_margin: Params::SCORE_MARGIN,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default tuning on a surface of the given pixel size
    pub fn for_surface(width: f32, height: f32) -> Self {
        Self {
            surface_width: width,
            surface_height: height,
            ..Self::default()
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.surface_width / 2.0, self.surface_height / 2.0)
    }

    pub fn paddle_half(&self) -> Vec2 {
        Vec2::new(self.paddle_half_width, self.paddle_half_height)
    }

    pub fn ball_half(&self) -> Vec2 {
        Vec2::splat(self.ball_half_size)
    }

    /// Get X position for paddle based on side
    pub fn paddle_x(&self, side: Side) -> f32 {
        let inset = self.paddle_border_padding + self.paddle_half_width;
        match side {
            Side::Left => inset,
            Side::Right => self.surface_width - inset,
        }
    }

    /// Clamp paddle Y to the surface minus border padding
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let min = self.paddle_half_height + self.paddle_border_padding;
        let max = self.surface_height - self.paddle_half_height - self.paddle_border_padding;
        y.clamp(min, max.max(min))
    }

    /// Ball X below which the right player scores
    pub fn left_goal_x(&self) -> f32 {
        self.paddle_x(Side::Left) + self.paddle_half_width - self.score_margin
    }

    /// Ball X above which the left player scores (mirror of the left goal)
    pub fn right_goal_x(&self) -> f32 {
        self.surface_width - self.paddle_x(Side::Left) - self.paddle_half_width + self.score_margin
    }
}
