//! Runtime configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `PONG_TICK_MS` | 33 | fixed timestep in milliseconds |
//! | `PONG_BALL_SPEED` | 1 | pixels per tick on each axis, 0 (still) to `MAX_BALL_SPEED` |
//! | `PONG_COLLISIONS` | `bounce` | `bounce` or `off` |
//! | `PONG_LOG_PATH` | unset | write logs to this file instead of stderr |
//! | `PONG_HEADLESS_FRAMES` | unset | run this many frames without a terminal |

use std::fs::File;

use anyhow::{Context, Result};

use crate::core::{
    BouncePolicy, CollisionOutcome, CollisionPolicy, MovingBody, NoCollisions, Obstacle,
};
use crate::types::TICK_MS;

/// Fastest accepted ball speed in pixels per tick
pub const MAX_BALL_SPEED: i32 = 8;

/// Which collision policy the driver runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionMode {
    Bounce,
    Off,
}

impl CollisionMode {
    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "bounce" | "on" | "1" | "true" => Some(CollisionMode::Bounce),
            "off" | "none" | "0" | "false" => Some(CollisionMode::Off),
            _ => None,
        }
    }
}

/// Policy picked at startup.
#[derive(Debug, Clone, Copy)]
pub enum SelectedPolicy {
    Bounce(BouncePolicy),
    Off(NoCollisions),
}

impl From<CollisionMode> for SelectedPolicy {
    fn from(mode: CollisionMode) -> Self {
        match mode {
            CollisionMode::Bounce => SelectedPolicy::Bounce(BouncePolicy),
            CollisionMode::Off => SelectedPolicy::Off(NoCollisions),
        }
    }
}

impl CollisionPolicy for SelectedPolicy {
    fn resolve(&self, body: &MovingBody, obstacles: &[Obstacle]) -> CollisionOutcome {
        match self {
            SelectedPolicy::Bounce(p) => p.resolve(body, obstacles),
            SelectedPolicy::Off(p) => p.resolve(body, obstacles),
        }
    }
}

/// Run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub tick_ms: u32,
    pub ball_speed: i32,
    pub collisions: CollisionMode,
    pub log_path: Option<String>,
    pub headless_frames: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            ball_speed: 1,
            collisions: CollisionMode::Bounce,
            log_path: None,
            headless_frames: None,
        }
    }
}

impl RunConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup; unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let tick_ms = lookup("PONG_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(defaults.tick_ms);

        let ball_speed = lookup("PONG_BALL_SPEED")
            .and_then(|s| s.trim().parse().ok())
            .filter(|speed: &i32| (0..=MAX_BALL_SPEED).contains(speed))
            .unwrap_or(defaults.ball_speed);

        let collisions = lookup("PONG_COLLISIONS")
            .and_then(|s| CollisionMode::from_str(&s))
            .unwrap_or(defaults.collisions);

        let log_path = lookup("PONG_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let headless_frames = lookup("PONG_HEADLESS_FRAMES").and_then(|s| s.trim().parse().ok());

        Self {
            tick_ms,
            ball_speed,
            collisions,
            log_path,
            headless_frames,
        }
    }

    pub fn policy(&self) -> SelectedPolicy {
        self.collisions.into()
    }
}

/// Initialise `env_logger`, defaulting to `warn` unless `RUST_LOG` says otherwise.
pub fn init_logging(config: &RunConfig) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = &config.log_path {
        let file = File::create(path).with_context(|| format!("cannot open log file {path}"))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.try_init().context("logger already initialised")?;
    Ok(())
}
