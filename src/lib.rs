//! Bitplane Pong (workspace facade crate).
//!
//! Re-exports the member crates under short names
//! (`pong_bitplane::{core,input,term,types}`) and adds the pieces that only
//! the runnable game needs: environment configuration and the demo gameplay
//! collaborator that receives forwarded input.

pub mod config;
pub mod game;
pub mod gameplay;

pub use pong_bitplane_core as core;
pub use pong_bitplane_input as input;
pub use pong_bitplane_term as term;
pub use pong_bitplane_types as types;

pub use config::{init_logging, CollisionMode, RunConfig, SelectedPolicy, MAX_BALL_SPEED};
pub use game::Game;
pub use gameplay::{Gameplay, Score};
