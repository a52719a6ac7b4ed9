//! Core game logic for Snake
//!
//! This module contains all the game rules without any I/O or rendering
//! dependencies: the owned game state, the update loop, and the input
//! buffering with reversal prevention.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, TickOutcome};
pub use state::{Collision, GameState, Phase, Point, Snake};
