use crate::{Ball, Config, Paddle, PaddleIntent, Time};
use hecs::World;

/// Apply paddle movement based on intents, then clamp to the surface
pub fn move_paddles(world: &mut World, time: &Time, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        let delta = config.paddle_speed * time.dt;
        if intent.up {
            paddle.pos.y -= delta;
        }
        if intent.down {
            paddle.pos.y += delta;
        }

        paddle.pos.y = config.clamp_paddle_y(paddle.pos.y);
    }
}

/// Move ball along its direction at its current speed
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.velocity() * time.dt;
    }
}
