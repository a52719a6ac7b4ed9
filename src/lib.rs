//! gridsnake - classic fixed-grid Snake in the terminal
//!
//! This library provides:
//! - Core game logic (game module): state, update loop, input buffering
//! - Key-event translation (input module)
//! - TUI rendering (render module)
//! - In-memory session stats (metrics module)
//! - The interactive play mode (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
