//! The Snake - classic Snake on a wraparound grid
//!
//! This library provides:
//! - Core game logic with three rule variants (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - Session metrics (metrics module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
