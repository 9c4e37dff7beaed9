use crate::geometry::Aabb;
use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;
use log::{debug, trace};

/// Check ball collisions with the top/bottom walls, then the paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle boxes first so the ball can be borrowed mutably
    let mut paddles: Vec<(Side, Aabb)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| (paddle.side, paddle.aabb()))
        .collect();
    // Left paddle is always tested first
    paddles.sort_by_key(|(side, _)| *side == Side::Right);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        bounce_off_walls(ball, config, events);
        bounce_off_paddles(ball, &paddles, config, events);
    }
}

fn bounce_off_walls(ball: &mut Ball, config: &Config, events: &mut Events) {
    let half_height = ball.half.y;

    if ball.pos.y <= half_height && ball.dir.y < 0.0 {
        ball.dir.y = -ball.dir.y;
        ball.pos.y += config.bounce_nudge;
    } else if ball.pos.y >= config.surface_height - half_height && ball.dir.y > 0.0 {
        ball.dir.y = -ball.dir.y;
        ball.pos.y -= config.bounce_nudge;
    } else {
        return;
    }

    events.ball_hit_wall = true;
    trace!("ball hit wall at y={:.1}", ball.pos.y);
}

fn bounce_off_paddles(
    ball: &mut Ball,
    paddles: &[(Side, Aabb)],
    config: &Config,
    events: &mut Events,
) {
    let ball_box = ball.aabb();

    for (side, paddle_box) in paddles {
        if !ball_box.overlaps(paddle_box) {
            continue;
        }

        // Only bounce while heading into the paddle, otherwise a ball still
        // overlapping after a hit would flip back and forth
        let (approaching, away) = match side {
            Side::Left => (ball.dir.x < 0.0, 1.0),
            Side::Right => (ball.dir.x > 0.0, -1.0),
        };
        if !approaching {
            continue;
        }

        ball.dir.x = -ball.dir.x;
        ball.pos.x += away * config.bounce_nudge;
        ball.speed += config.ball_speed_increment;
        events.ball_hit_paddle = true;

        debug!("ball hit {:?} paddle, speed now {:.0}", side, ball.speed);
        return;
    }
}
