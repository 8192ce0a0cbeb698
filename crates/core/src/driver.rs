//! Frame driver - owns the shared frame buffer and runs the per-frame cycle
//!
//! The outer loop calls, once per tick:
//!
//! 1. [`FrameDriver::on_input`] with the latest input byte
//! 2. [`FrameDriver::update`] to move the ball and resolve collisions
//! 3. [`FrameDriver::render`] to accumulate every object, flush the buffer to
//!    the device and clear it for the next frame
//!
//! Nothing happens until the start signal arrives. There is no way back to
//! idle from here; restarting is the caller's business.

use crate::bitplane::BitPlane;
use crate::collision::{obstacles, CollisionOutcome, CollisionPolicy, NoCollisions};
use crate::objects::{Edge, Scene, Side};
use crate::render::RenderStats;
use crate::sink::DeviceSink;
use crate::types::{InputSignal, Vector2i, VRAM_BASE};

/// Driver lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriverState {
    /// Waiting for the start signal
    Idle,
    /// Rendering every frame
    Running,
}

/// Owns the accumulation buffer, the scene and the collision policy.
#[derive(Debug)]
pub struct FrameDriver<P = NoCollisions> {
    state: DriverState,
    frame: BitPlane,
    scene: Scene,
    policy: P,
    /// Frames flushed since start
    frames: u64,
    /// Stats of the last render call
    last_stats: RenderStats,
}

impl FrameDriver<NoCollisions> {
    /// Driver with physics disabled
    pub fn new() -> Self {
        Self::with_policy(NoCollisions)
    }
}

impl Default for FrameDriver<NoCollisions> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: CollisionPolicy> FrameDriver<P> {
    pub fn with_policy(policy: P) -> Self {
        Self::with_scene(Scene::new(), policy)
    }

    pub fn with_scene(scene: Scene, policy: P) -> Self {
        Self {
            state: DriverState::Idle,
            frame: BitPlane::new(),
            scene,
            policy,
            frames: 0,
            last_stats: RenderStats::default(),
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Pixels accumulated so far this frame
    pub fn frame(&self) -> &BitPlane {
        &self.frame
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_stats(&self) -> RenderStats {
        self.last_stats
    }

    /// Handle this tick's input.
    ///
    /// Returns the signal to forward to gameplay collaborators, or `None`
    /// while idle. The start signal itself is forwarded once running.
    pub fn on_input(&mut self, signal: InputSignal) -> Option<InputSignal> {
        if signal.is_start() && self.state == DriverState::Idle {
            log::info!("start signal received, running");
            self.state = DriverState::Running;
        }

        match self.state {
            DriverState::Running => Some(signal),
            DriverState::Idle => None,
        }
    }

    /// Move the ball one tick and apply the collision policy's verdict.
    pub fn update(&mut self) -> CollisionOutcome {
        if self.state != DriverState::Running {
            return CollisionOutcome::None;
        }

        let obstacles = obstacles(&self.scene);
        let mut remaining = self.scene.ball.velocity;
        let outcome = loop {
            // One pixel per axis at a time: borders are one pixel thick.
            self.scene.ball.step_pixel(&mut remaining);
            let outcome = self.policy.resolve(&self.scene.ball, &obstacles);
            if outcome != CollisionOutcome::None || remaining == Vector2i::ZERO {
                break outcome;
            }
        };

        match outcome {
            CollisionOutcome::None => {}
            CollisionOutcome::Bounced { obstacle, depth, axis } => {
                log::debug!("collision: {:?}", outcome);
                if let Some(hit) = obstacles.iter().find(|o| o.kind == obstacle) {
                    self.scene.ball.handle_collision(&hit.rect, depth, axis);
                }
            }
            CollisionOutcome::Goal { wall, depth, axis } => {
                log::debug!("collision: {:?}", outcome);
                let edge = match wall {
                    Side::Left => Edge::Left,
                    Side::Right => Edge::Right,
                };
                self.scene.ball.handle_collision(&edge.border(), depth, axis);
            }
        }
        outcome
    }

    /// OR an externally rendered pattern into the frame buffer
    pub fn accumulate(&mut self, bits: &BitPlane) {
        self.frame.accumulate(bits);
    }

    /// Accumulate every object, flush the frame to `sink`, then clear it.
    ///
    /// Returns the number of bytes written (zero while idle).
    pub fn render<S: DeviceSink>(&mut self, mut sink: S) -> usize {
        if self.state != DriverState::Running {
            return 0;
        }

        let mut stats = RenderStats::default();
        for object in self.scene.objects() {
            let (pattern, object_stats) = object.pattern();
            self.frame.accumulate(&pattern);
            stats.merge(object_stats);
        }
        self.last_stats = stats;

        let written = self.flush(&mut sink);
        self.frames += 1;
        log::trace!(
            "frame {} flushed: {} pixels lit, {} clipped",
            self.frames,
            stats.set,
            stats.clipped
        );
        written
    }

    /// Write the whole buffer address by address and zero it.
    fn flush<S: DeviceSink>(&mut self, sink: &mut S) -> usize {
        let bytes = self.frame.as_bytes();
        for (address, &value) in bytes.iter().enumerate() {
            sink.write_byte(VRAM_BASE, address, value);
        }
        let written = bytes.len();
        self.frame.clear();
        written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::BouncePolicy;
    use crate::geometry::Rectangle;
    use crate::sink::MemorySink;
    use crate::types::RAM_ADDRESS_AMOUNT;

    #[test]
    fn test_starts_idle_and_ignores_other_input() {
        let mut driver = FrameDriver::new();
        assert_eq!(driver.state(), DriverState::Idle);

        assert_eq!(driver.on_input(InputSignal::UP), None);
        assert_eq!(driver.state(), DriverState::Idle);

        assert_eq!(driver.on_input(InputSignal::START), Some(InputSignal::START));
        assert!(driver.is_running());

        assert_eq!(driver.on_input(InputSignal::DOWN), Some(InputSignal::DOWN));
        assert_eq!(driver.on_input(InputSignal::START), Some(InputSignal::START));
        assert!(driver.is_running());
    }

    #[test]
    fn test_idle_does_not_render_or_update() {
        let mut driver = FrameDriver::with_policy(BouncePolicy);
        driver.scene_mut().ball.velocity = Vector2i::new(1, 1);
        let ball_before = driver.scene().ball;

        let mut sink = MemorySink::new();
        assert_eq!(driver.update(), CollisionOutcome::None);
        assert_eq!(driver.render(&mut sink), 0);

        assert_eq!(driver.scene().ball, ball_before);
        assert_eq!(sink.writes(), 0);
        assert_eq!(driver.frames(), 0);
    }

    #[test]
    fn test_render_flushes_every_address_and_clears() {
        let mut driver = FrameDriver::new();
        driver.on_input(InputSignal::START);

        let mut sink = MemorySink::new();
        assert_eq!(driver.render(&mut sink), RAM_ADDRESS_AMOUNT);
        assert_eq!(sink.writes(), RAM_ADDRESS_AMOUNT as u64);
        assert!(driver.frame().is_blank());
        assert_eq!(driver.frames(), 1);

        let scene = driver.scene();
        let plane = sink.plane();
        assert!(plane.is_set(scene.ball.rect.left, scene.ball.rect.top));
        assert!(plane.is_set(scene.player.rect.left, scene.player.rect.top));
        assert!(plane.is_set(scene.opponent.rect.left, scene.opponent.rect.bottom() - 1));
    }

    #[test]
    fn test_accumulate_merges_external_pattern() {
        let mut driver = FrameDriver::new();
        driver.on_input(InputSignal::START);

        let mut extra = BitPlane::new();
        extra.set_pixel(10, 1).unwrap();
        driver.accumulate(&extra);
        assert!(driver.frame().is_set(10, 1));

        let mut sink = MemorySink::new();
        driver.render(&mut sink);
        assert!(sink.plane().is_set(10, 1));
        assert!(driver.frame().is_blank());
    }

    #[test]
    fn test_border_pixels_are_clipped_during_render() {
        let mut driver = FrameDriver::new();
        driver.on_input(InputSignal::START);
        driver.render(MemorySink::new());

        let border_area: i64 = Edge::ALL.iter().map(|e| e.border().area()).sum();
        assert_eq!(driver.last_stats().clipped as i64, border_area);
    }

    #[test]
    fn test_update_moves_ball_when_running() {
        let mut driver = FrameDriver::new();
        driver.scene_mut().ball.velocity = Vector2i::new(1, 0);
        driver.on_input(InputSignal::START);

        let start = driver.scene().ball.rect;
        assert_eq!(driver.update(), CollisionOutcome::None);
        assert_eq!(driver.scene().ball.rect, start.translated(Vector2i::new(1, 0)));
    }

    #[test]
    fn test_bounce_pushes_ball_out_of_paddle() {
        let mut driver = FrameDriver::with_policy(BouncePolicy);
        let paddle = driver.scene().player.rect;
        driver.scene_mut().ball.rect = Rectangle::new(paddle.right(), paddle.top + 1, 1, 1);
        driver.scene_mut().ball.velocity = Vector2i::new(-1, 0);
        driver.on_input(InputSignal::START);

        let outcome = driver.update();
        assert!(matches!(outcome, CollisionOutcome::Bounced { .. }));
        assert_eq!(driver.scene().ball.rect.left, paddle.right());
        assert_eq!(driver.scene().ball.velocity, Vector2i::new(1, 0));
    }

    #[test]
    fn test_fast_ball_cannot_skip_one_pixel_border() {
        let mut driver = FrameDriver::with_policy(BouncePolicy);
        driver.scene_mut().ball.rect = Rectangle::new(10, 30, 1, 1);
        driver.scene_mut().ball.velocity = Vector2i::new(1, 2);
        driver.on_input(InputSignal::START);

        let outcome = driver.update();
        assert!(matches!(
            outcome,
            CollisionOutcome::Bounced {
                obstacle: crate::collision::ObstacleKind::Border(Edge::Bottom),
                ..
            }
        ));
        assert_eq!(driver.scene().ball.rect.position(), Vector2i::new(11, 31));
        assert_eq!(driver.scene().ball.velocity, Vector2i::new(1, -2));
    }

    #[test]
    fn test_paddle_moving_onto_still_ball_pushes_it_out() {
        let mut driver = FrameDriver::with_policy(BouncePolicy);
        let paddle = driver.scene().opponent.rect;
        driver.scene_mut().ball.rect = Rectangle::new(paddle.left, paddle.top, 1, 1);
        driver.on_input(InputSignal::START);

        assert!(matches!(driver.update(), CollisionOutcome::Bounced { .. }));
        let ball = driver.scene().ball.rect;
        assert!(!ball.check_collisions(&paddle));
        assert_eq!(ball.right(), paddle.left);
    }

    #[test]
    fn test_goal_keeps_running() {
        let mut driver = FrameDriver::with_policy(BouncePolicy);
        driver.scene_mut().ball.rect = Rectangle::new(0, 10, 1, 1);
        driver.scene_mut().ball.velocity = Vector2i::new(-1, 0);
        driver.on_input(InputSignal::START);

        let outcome = driver.update();
        assert!(matches!(
            outcome,
            CollisionOutcome::Goal {
                wall: Side::Left,
                ..
            }
        ));
        assert!(driver.is_running());
    }
}
