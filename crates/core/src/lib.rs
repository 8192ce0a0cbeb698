//! Core frame logic - pure, deterministic, and testable
//!
//! This crate contains the geometry, the bitplane accumulator and the frame
//! driver. It has **no dependencies** on terminals or hardware: the only way
//! out is the [`DeviceSink`] seam, so everything here runs headless in tests.
//!
//! # Module Structure
//!
//! - [`geometry`]: axis-aligned rectangles, overlap test and intersection depth
//! - [`bitplane`]: packed 1-bit-per-pixel frame buffer sized like video RAM
//! - [`render`]: rasterizes rectangles and OR-accumulates them
//! - [`objects`]: ball, paddles, net and borders as a tagged renderable view
//! - [`collision`]: pluggable collision policies for the ball
//! - [`sink`]: the byte-write device interface plus an in-memory sink
//! - [`driver`]: idle/running lifecycle and the update → render → flush cycle
//!
//! # Example
//!
//! ```
//! use pong_bitplane_core::{FrameDriver, MemorySink};
//! use pong_bitplane_types::{InputSignal, RAM_ADDRESS_AMOUNT};
//!
//! let mut driver = FrameDriver::new();
//! let mut sink = MemorySink::new();
//!
//! // Nothing is drawn before the start signal.
//! assert_eq!(driver.render(&mut sink), 0);
//!
//! driver.on_input(InputSignal::START);
//! driver.update();
//! assert_eq!(driver.render(&mut sink), RAM_ADDRESS_AMOUNT);
//! assert!(!sink.plane().is_blank());
//! assert!(driver.frame().is_blank());
//! ```

pub mod bitplane;
pub mod collision;
pub mod driver;
pub mod geometry;
pub mod objects;
pub mod render;
pub mod sink;

pub use pong_bitplane_types as types;

// Re-export commonly used types for convenience
pub use bitplane::{BitPlane, RenderError};
pub use collision::{
    obstacles, BouncePolicy, CollisionOutcome, CollisionPolicy, NoCollisions, Obstacle,
    ObstacleKind,
};
pub use driver::{DriverState, FrameDriver};
pub use geometry::{check_collisions, get_intersection, Rectangle};
pub use objects::{
    Axis, Edge, GameObject, MovingBody, Net, Paddle, Scene, Side, BALL_SIZE, PADDLE_SIZE,
};
pub use render::{rasterize_into, render_rectangle, RenderStats};
pub use sink::{DeviceSink, MemorySink};
