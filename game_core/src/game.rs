//! Complete game session: the world plus everything `step` needs

use hecs::{Entity, World};
use log::info;

use crate::components::{launch_direction, Ball, Paddle, Side};
use crate::fsm::{PlayAction, PlayState, RoundFsm, TransitionResult};
use crate::input::{InputState, Key};
use crate::params::Config;
use crate::resources::{Events, Score, Time};
use crate::rng::{GameRng, RandomSource};
use crate::{create_ball, create_paddle, step};

/// Owns the simulation; the host drives it with key events and `update`
pub struct GameState {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub input: InputState,
    pub fsm: RoundFsm,
    rng: Box<dyn RandomSource>,
    left: Entity,
    right: Entity,
    ball: Entity,
}

impl GameState {
    /// Paddles centered, ball at the center with a random launch direction.
    ///
    /// The very first rally uses `ball_speed_launch`; later rallies use
    /// `ball_speed_reset`.
    pub fn new(config: Config, mut rng: Box<dyn RandomSource>) -> Self {
        let mut world = World::new();
        let center = config.center();

        let left = create_paddle(&mut world, &config, Side::Left, center.y);
        let right = create_paddle(&mut world, &config, Side::Right, center.y);

        let dir = launch_direction(rng.as_mut());
        let ball = create_ball(&mut world, &config, center, dir, config.ball_speed_launch);

        Self {
            world,
            time: Time::default(),
            config,
            score: Score::new(),
            events: Events::new(),
            input: InputState::new(),
            fsm: RoundFsm::new(),
            rng,
            left,
            right,
            ball,
        }
    }

    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::new(config, Box::new(GameRng::new(seed)))
    }

    /// Advance the simulation by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.score,
            &mut self.events,
            &self.input,
            &mut self.fsm,
            self.rng.as_mut(),
        );
    }

    pub fn key_down(&mut self, key: Key) {
        self.input.press(key);
    }

    /// Releasing the serve key starts the rally
    pub fn key_up(&mut self, key: Key) -> Option<TransitionResult> {
        self.input.release(key);
        match key {
            Key::Serve => Some(self.serve()),
            _ => None,
        }
    }

    pub fn serve(&mut self) -> TransitionResult {
        let result = self.fsm.transition(PlayAction::Serve);
        if result.success {
            info!("serve at {}", self.score);
        }
        result
    }

    pub fn play_state(&self) -> PlayState {
        self.fsm.state()
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        let entity = match side {
            Side::Left => self.left,
            Side::Right => self.right,
        };
        self.world.get::<&Paddle>(entity).ok().map(|paddle| *paddle)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    /// Overwrite the ball, e.g. to set up a specific rally
    pub fn set_ball(&mut self, ball: Ball) {
        if let Ok(mut current) = self.world.get::<&mut Ball>(self.ball) {
            *current = ball;
        }
    }

    pub fn set_paddle_y(&mut self, side: Side, y: f32) {
        let entity = match side {
            Side::Left => self.left,
            Side::Right => self.right,
        };
        if let Ok(mut paddle) = self.world.get::<&mut Paddle>(entity) {
            paddle.pos.y = self.config.clamp_paddle_y(y);
        }
    }
}
