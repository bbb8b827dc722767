//! # Connect Four Minimax
//!
//! A Connect Four engine with a depth-limited minimax opponent using
//! alpha-beta pruning over a positional evaluation heuristic.
//!
//! ## Modules
//!
//! - [`game`] - Position representation, evaluation, players, game record
//! - [`ai`] - Agent trait, minimax search, random agent
//! - [`config`] - TOML configuration loading and validation
//! - [`error`] - Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
