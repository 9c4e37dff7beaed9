use game_core::*;
use glam::Vec2;
use rand::{Rng, SeedableRng};

const FRAME: f32 = 1.0 / 60.0;

fn serving_game(config: Config, seed: u64) -> GameState {
    let mut game = GameState::with_seed(config, seed);
    game.key_up(Key::Serve);
    assert_eq!(game.play_state(), PlayState::Active);
    game
}

fn place_ball(game: &mut GameState, pos: Vec2, dir: Vec2, speed: f32) {
    let half = game.config.ball_half();
    game.set_ball(Ball::new(pos, half, dir, speed));
}

#[test]
fn test_ball_bounces_off_right_paddle_near_edge() {
    // 10px padding puts the right paddle at x = 780
    let config = Config {
        paddle_border_padding: 10.0,
        ..Config::new()
    };
    let mut game = serving_game(config, 1);
    assert_eq!(game.paddle(Side::Right).unwrap().pos, Vec2::new(780.0, 300.0));
    place_ball(&mut game, Vec2::new(795.0, 300.0), Vec2::X, 400.0);

    game.update(1.0 / 120.0);

    let ball = game.ball().unwrap();
    assert!(ball.dir.x < 0.0, "Horizontal direction should be inverted");
    assert_eq!(ball.speed, 405.0);
    assert!(ball.pos.x < game.config.surface_width, "Ball stays on the surface");
    assert!(game.events.ball_hit_paddle);
    assert_eq!(game.score, Score::new(), "A returned ball is not a point");
    assert_eq!(game.play_state(), PlayState::Active);
}

#[test]
fn test_ball_past_left_paddle_scores_for_right() {
    let mut game = serving_game(Config::new(), 2);
    game.set_paddle_y(Side::Left, 100.0);
    game.set_paddle_y(Side::Right, 450.0);
    place_ball(&mut game, Vec2::new(36.0, 500.0), Vec2::NEG_X, 620.0);

    game.update(FRAME);

    assert_eq!(game.score, Score { left: 0, right: 1 });
    assert!(game.events.right_scored);
    assert!(!game.events.left_scored);

    let center = game.config.center();
    let ball = game.ball().unwrap();
    assert_eq!(ball.pos, center);
    assert_eq!(ball.speed, game.config.ball_speed_reset);
    assert!((ball.dir.length() - 1.0).abs() < 1e-5);
    assert_eq!(game.paddle(Side::Left).unwrap().pos.y, center.y);
    assert_eq!(game.paddle(Side::Right).unwrap().pos.y, center.y);
    assert_eq!(game.play_state(), PlayState::Idle);
    assert_eq!(game.score.to_string(), "0|1");
}

#[test]
fn test_ball_leaving_left_goal_area_stays_in_play() {
    let mut game = serving_game(Config::new(), 9);
    // Behind the left goal line but already heading back into the court
    place_ball(&mut game, Vec2::new(20.0, 100.0), Vec2::X, 400.0);

    for _ in 0..10 {
        game.update(FRAME);
    }

    let ball = game.ball().unwrap();
    assert_eq!(game.score, Score::new());
    assert_eq!(game.play_state(), PlayState::Active);
    assert!(ball.dir.x > 0.0);
    assert!((ball.pos.x - (20.0 + 400.0 * 10.0 * FRAME)).abs() < 1e-2);
    assert_eq!(ball.pos.y, 100.0);
}

#[test]
fn test_serve_release_is_idempotent() {
    let mut game = GameState::with_seed(Config::new(), 3);
    assert_eq!(game.play_state(), PlayState::Idle);

    game.key_down(Key::Serve);
    game.key_up(Key::Serve);
    assert_eq!(game.play_state(), PlayState::Active);

    game.key_down(Key::Serve);
    game.key_up(Key::Serve);
    assert_eq!(game.play_state(), PlayState::Active);
}

#[test]
fn test_launch_and_reset_speeds_differ() {
    let mut game = serving_game(Config::new(), 4);
    assert_eq!(game.ball().unwrap().speed, Params::BALL_SPEED_LAUNCH);

    place_ball(&mut game, Vec2::new(770.0, 500.0), Vec2::X, 400.0);
    game.update(FRAME);

    assert!(game.events.left_scored);
    assert_eq!(game.ball().unwrap().speed, Params::BALL_SPEED_RESET);
}

#[test]
fn test_paddle_moves_with_held_key() {
    let mut game = serving_game(Config::new(), 5);
    game.key_down(Key::LeftUp);
    game.key_down(Key::RightDown);

    game.update(0.1);

    let left = game.paddle(Side::Left).unwrap().pos.y;
    let right = game.paddle(Side::Right).unwrap().pos.y;
    assert!((left - 250.0).abs() < 1e-2, "left at {left}");
    assert!((right - 350.0).abs() < 1e-2, "right at {right}");

    game.key_up(Key::LeftUp);
    game.update(0.1);
    assert!((game.paddle(Side::Left).unwrap().pos.y - 250.0).abs() < 1e-2);
}

#[test]
fn test_long_frame_is_clamped() {
    let mut game = serving_game(Config::new(), 6);
    place_ball(&mut game, Vec2::new(400.0, 300.0), Vec2::X, 400.0);

    game.update(5.0);

    let ball = game.ball().unwrap();
    let travelled = ball.pos.x - 400.0;
    assert!((travelled - 400.0 * Params::MAX_DT).abs() < 1e-2);
}

#[test]
fn test_fast_ball_does_not_tunnel_through_paddle() {
    let mut game = serving_game(Config::new(), 7);
    // 900 px/s over a 0.1s frame would skip the 20px paddle in one jump
    place_ball(&mut game, Vec2::new(100.0, 300.0), Vec2::NEG_X, 900.0);

    game.update(0.1);

    let ball = game.ball().unwrap();
    assert!(ball.dir.x > 0.0, "Ball should have been returned");
    assert_eq!(ball.speed, 905.0);
    assert_eq!(game.score, Score::new());
}

#[test]
fn test_zero_and_negative_dt_do_nothing() {
    let mut game = serving_game(Config::new(), 8);
    let before = game.ball().unwrap().pos;

    game.update(0.0);
    game.update(-1.0);
    game.update(f32::NAN);

    assert_eq!(game.ball().unwrap().pos, before);
}

#[test]
fn test_long_session_invariants() {
    let mut game = GameState::with_seed(Config::new(), 2024);
    let mut keys = rand::rngs::StdRng::seed_from_u64(77);
    let config = game.config.clone();
    let min_y = config.paddle_half_height + config.paddle_border_padding;
    let max_y = config.surface_height - min_y;

    let mut last_speed = game.ball().unwrap().speed;
    let mut last_score = game.score;
    let mut points = 0;

    for frame in 0..20_000 {
        if game.play_state() == PlayState::Idle {
            game.key_up(Key::Serve);
            last_speed = game.ball().unwrap().speed;
        }
        for key in [Key::LeftUp, Key::LeftDown, Key::RightUp, Key::RightDown] {
            if keys.gen_bool(0.05) {
                if keys.gen_bool(0.5) {
                    game.key_down(key);
                } else {
                    game.key_up(key);
                }
            }
        }

        let dt = keys.gen_range(0.0..0.05);
        game.update(dt);

        for side in [Side::Left, Side::Right] {
            let y = game.paddle(side).unwrap().pos.y;
            assert!((min_y..=max_y).contains(&y), "frame {frame}: {side:?} paddle at {y}");
        }

        let ball = game.ball().unwrap();
        assert!(
            (ball.dir.length() - 1.0).abs() < 1e-4,
            "frame {frame}: direction drifted to {}",
            ball.dir.length()
        );

        let gained = (game.score.left - last_score.left) + (game.score.right - last_score.right);
        if game.events.scored() {
            assert_eq!(gained, 1, "frame {frame}: exactly one counter moves");
            assert!(game.events.left_scored != game.events.right_scored);
            assert_eq!(ball.speed, config.ball_speed_reset);
            assert_eq!(ball.pos, config.center());
            assert_eq!(game.play_state(), PlayState::Idle);
            points += 1;
        } else {
            assert_eq!(gained, 0, "frame {frame}: score moved without an event");
            assert!(ball.speed >= last_speed, "frame {frame}: speed dropped mid-rally");
        }
        assert!(game.score.left >= last_score.left && game.score.right >= last_score.right);

        last_speed = ball.speed;
        last_score = game.score;
    }

    assert!(points > 0, "Nobody returns every ball with random inputs");
}
