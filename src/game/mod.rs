//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The grid is a torus: leaving one edge re-enters from the opposite one.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::{turn, Action, Direction, TURN_TABLE};
pub use config::{GameConfig, Variant};
pub use engine::{GameEngine, StepInfo, StepResult};
pub use state::{Apple, CollisionType, GameState, Position, Snake};
