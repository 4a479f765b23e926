//! # Connect Four
//!
//! A two-player Connect Four game in the terminal. The rules engine in
//! [`game`] knows nothing about rendering; the [`ui`] shell turns key presses
//! and mouse clicks into column choices and redraws from the board's queries.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, turn-keeping game
//! - [`ui`] — Terminal UI: game view, board widget, input handling
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
