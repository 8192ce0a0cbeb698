//! Demo gameplay collaborator.
//!
//! The frame driver forwards every input byte it does not own; this is where
//! they land. It moves the player's paddle, lets the opponent follow the
//! ball, keeps score and serves a new ball after each goal.

use crate::core::{CollisionOutcome, MovingBody, Scene, Side, BALL_SIZE};
use crate::types::{InputSignal, Vector2i};

/// Pixels the player's paddle moves per key press
pub const PADDLE_STEP: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

#[derive(Debug, Clone)]
pub struct Gameplay {
    score: Score,
    ball_speed: i32,
    /// Direction of the next serve
    serve_to: Side,
}

impl Gameplay {
    pub fn new(ball_speed: i32) -> Self {
        Self {
            score: Score::default(),
            ball_speed,
            serve_to: Side::Left,
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Put a fresh ball in the middle, heading towards `serve_to`.
    pub fn serve(&mut self, scene: &mut Scene) {
        let vx = match self.serve_to {
            Side::Left => -self.ball_speed,
            Side::Right => self.ball_speed,
        };
        scene.ball = MovingBody::centered(BALL_SIZE);
        scene.ball.velocity = Vector2i::new(vx, self.ball_speed);
    }

    /// React to a forwarded input signal.
    pub fn apply(&mut self, signal: InputSignal, scene: &mut Scene) {
        match signal {
            InputSignal::UP => scene.player.move_by(-PADDLE_STEP),
            InputSignal::DOWN => scene.player.move_by(PADDLE_STEP),
            _ => {}
        }
    }

    /// Opponent tracks the ball one pixel per tick.
    pub fn tick(&mut self, scene: &mut Scene) {
        let target = scene.ball.rect.top + scene.ball.rect.hight / 2;
        let dy = (target - scene.opponent.center_y()).signum();
        scene.opponent.move_by(dy);
    }

    /// Score goals and re-serve; bounces need nothing from us.
    pub fn on_outcome(&mut self, outcome: CollisionOutcome, scene: &mut Scene) {
        if let CollisionOutcome::Goal { wall, .. } = outcome {
            match wall {
                Side::Left => self.score.right += 1,
                Side::Right => self.score.left += 1,
            }
            log::info!("goal on {:?} wall, score {}:{}", wall, self.score.left, self.score.right);
            // Loser receives the next serve.
            self.serve_to = wall;
            self.serve(scene);
        }
    }
}
