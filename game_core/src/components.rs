use glam::Vec2;

use crate::geometry::{unit, Aabb};
use crate::rng::{choose, RandomSource};

/// Which half of the court a paddle (or a point) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,  // Center; only Y ever changes
    pub half: Vec2, // Fixed half-extent
    pub color: &'static str,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, half: Vec2) -> Self {
        Self {
            side,
            pos,
            half,
            color: crate::Params::FOREGROUND,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_half(self.pos, self.half)
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub half: Vec2,
    pub dir: Vec2,  // Unit direction
    pub speed: f32, // Pixels per second along `dir`
    pub color: &'static str,
}

impl Ball {
    pub fn new(pos: Vec2, half: Vec2, dir: Vec2, speed: f32) -> Self {
        Self {
            pos,
            half,
            dir,
            speed,
            color: crate::Params::FOREGROUND,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_half(self.pos, self.half)
    }

    pub fn velocity(&self) -> Vec2 {
        self.dir * self.speed
    }

    /// Reset ball to `center` with a fresh random direction
    pub fn reset(&mut self, center: Vec2, speed: f32, rng: &mut dyn RandomSource) {
        self.pos = center;
        self.dir = launch_direction(rng);
        self.speed = speed;
    }
}

/// Random serve direction: left or right, with a uniform vertical tilt
pub fn launch_direction(rng: &mut dyn RandomSource) -> Vec2 {
    let x = choose(rng, -1.0, 1.0);
    let y = rng.range(-1.0, 1.0);
    // |x| is always 1, so the fallback is unreachable in practice
    unit(Vec2::new(x, y)).unwrap_or(Vec2::X)
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    /// -1, 0 or 1 along Y; both flags held cancel out
    pub fn dir(&self) -> f32 {
        let mut dir = 0.0;
        if self.up {
            dir -= 1.0;
        }
        if self.down {
            dir += 1.0;
        }
        dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::tests::ScriptedRng;

    #[test]
    fn test_launch_direction_is_unit() {
        let mut rng = crate::GameRng::new(7);
        for _ in 0..100 {
            let dir = launch_direction(&mut rng);
            assert!((dir.length() - 1.0).abs() < 1e-5);
            assert!(dir.x != 0.0, "Serve always has a horizontal component");
        }
    }

    #[test]
    fn test_launch_direction_follows_source() {
        let mut rng = ScriptedRng::new(vec![0.0], vec![false]);
        assert_eq!(launch_direction(&mut rng), Vec2::X);

        let mut rng = ScriptedRng::new(vec![0.0], vec![true]);
        assert_eq!(launch_direction(&mut rng), Vec2::NEG_X);
    }

    #[test]
    fn test_ball_reset() {
        let mut rng = ScriptedRng::new(vec![0.5], vec![true]);
        let mut ball = Ball::new(Vec2::new(10.0, 10.0), Vec2::splat(10.0), Vec2::X, 900.0);
        ball.reset(Vec2::new(400.0, 300.0), 500.0, &mut rng);

        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ball.speed, 500.0);
        assert!((ball.dir.length() - 1.0).abs() < 1e-6);
        assert!(ball.dir.y > 0.0);
    }

    #[test]
    fn test_paddle_intent_dir() {
        let mut intent = PaddleIntent::new();
        assert_eq!(intent.dir(), 0.0);
        intent.up = true;
        assert_eq!(intent.dir(), -1.0);
        intent.down = true;
        assert_eq!(intent.dir(), 0.0);
        intent.up = false;
        assert_eq!(intent.dir(), 1.0);
    }
}
