pub mod components;
pub mod driver;
pub mod fsm;
pub mod game;
pub mod geometry;
pub mod input;
pub mod params;
pub mod render;
pub mod resources;
pub mod rng;
pub mod systems;

pub use components::*;
pub use driver::*;
pub use fsm::*;
pub use game::*;
pub use geometry::*;
pub use input::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use rng::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run the Pong simulation for one frame of `time.dt` seconds.
///
/// Nothing moves unless the round is `Active`. The frame is split into
/// fixed micro-steps and stops early once a point ends the rally.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    input: &InputState,
    fsm: &mut RoundFsm,
    rng: &mut dyn RandomSource,
) {
    // Clamp dt to prevent large jumps (and reject negative or NaN deltas)
    let clamped_dt = time.dt.max(0.0).min(Params::MAX_DT);

    // Events describe the whole frame, not the last micro-step
    events.clear();

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 && fsm.is_active() {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        // 1. Copy held keys onto paddle intents
        ingest_inputs(world, input);

        // 2. Move paddles based on intents
        move_paddles(world, &step_time, config);

        // 3. Move ball
        move_ball(world, &step_time);

        // 4. Check collisions (walls, then left and right paddle)
        check_collisions(world, config, events);

        // 5. Check scoring (ball got past a paddle)
        check_scoring(world, config, score, events, fsm, rng);
    }

    // Update time
    time.now += clamped_dt;
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, config: &Config, side: Side, y: f32) -> hecs::Entity {
    let pos = Vec2::new(config.paddle_x(side), y);
    world.spawn((Paddle::new(side, pos, config.paddle_half()), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(
    world: &mut World,
    config: &Config,
    pos: Vec2,
    dir: Vec2,
    speed: f32,
) -> hecs::Entity {
    world.spawn((Ball::new(pos, config.ball_half(), dir, speed),))
}
