//! # Connect 383
//!
//! Game-playing agents for Connect 383, a column-drop game that runs until
//! the board is full and scores every run of three or more pieces.
//!
//! ## Modules
//!
//! - [`game`] — Board, players, immutable game states and the construction counter
//! - [`ai`] — Search contract, minimax searchers, gap heuristic, agents
//! - [`play`] — Game loop between two agents
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod play;
