//! One playable game: the frame driver plus the gameplay collaborator.
//!
//! [`Game::tick`] runs the fixed per-tick sequence (input → update → render)
//! so the binary and the integration tests drive the exact same path.

use std::fmt::Write as _;

use crate::config::{RunConfig, SelectedPolicy};
use crate::core::{CollisionOutcome, DeviceSink, FrameDriver};
use crate::gameplay::{Gameplay, Score};
use crate::types::InputSignal;

pub struct Game {
    driver: FrameDriver<SelectedPolicy>,
    gameplay: Gameplay,
}

impl Game {
    pub fn new(config: &RunConfig) -> Self {
        let mut driver = FrameDriver::with_policy(config.policy());
        let mut gameplay = Gameplay::new(config.ball_speed);
        gameplay.serve(driver.scene_mut());
        Self { driver, gameplay }
    }

    pub fn driver(&self) -> &FrameDriver<SelectedPolicy> {
        &self.driver
    }

    pub fn score(&self) -> Score {
        self.gameplay.score()
    }

    /// Run one tick and return the number of bytes flushed to `sink`.
    pub fn tick<S: DeviceSink>(&mut self, signal: InputSignal, sink: S) -> usize {
        if let Some(forwarded) = self.driver.on_input(signal) {
            self.gameplay.apply(forwarded, self.driver.scene_mut());
        }

        if self.driver.is_running() {
            self.gameplay.tick(self.driver.scene_mut());
        }

        let outcome = self.driver.update();
        if outcome != CollisionOutcome::None {
            self.gameplay.on_outcome(outcome, self.driver.scene_mut());
        }

        self.driver.render(sink)
    }

    /// Write the one-line status shown under the playfield.
    pub fn status_into(&self, out: &mut String) {
        out.clear();
        if !self.driver.is_running() {
            out.push_str("PRESS ENTER TO START   q: quit");
            return;
        }
        let score = self.gameplay.score();
        let _ = write!(
            out,
            "{} : {}   frame {}   w/s: move  q: quit",
            score.left,
            score.right,
            self.driver.frames()
        );
    }
}
