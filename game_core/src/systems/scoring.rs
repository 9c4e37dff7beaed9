use crate::fsm::{PlayAction, RoundFsm};
use crate::rng::RandomSource;
use crate::{Ball, Config, Events, Paddle, Score, Side};
use hecs::World;
use log::info;

/// Check if the ball got past a paddle; award the point and reset the round.
///
/// A goal only counts while the ball is still travelling toward it, so a
/// ball that was just returned from deep inside a paddle stays in play.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    fsm: &mut RoundFsm,
    rng: &mut dyn RandomSource,
) -> Option<Side> {
    let (pos, dir) = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| (ball.pos, ball.dir))?;

    let scorer = if pos.x < config.left_goal_x() && dir.x < 0.0 {
        Side::Right
    } else if pos.x > config.right_goal_x() && dir.x > 0.0 {
        Side::Left
    } else {
        return None;
    };

    score.award(scorer);
    match scorer {
        Side::Left => events.left_scored = true,
        Side::Right => events.right_scored = true,
    }
    info!("{:?} scores, score is {}", scorer, score);

    reset_round(world, config, rng);
    fsm.transition(PlayAction::PointScored);

    Some(scorer)
}

/// Recenter paddles and ball, relaunch the ball at the reset speed
pub fn reset_round(world: &mut World, config: &Config, rng: &mut dyn RandomSource) {
    let center = config.center();

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.pos.y = center.y;
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(center, config.ball_speed_reset, rng);
    }
}
