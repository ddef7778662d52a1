//! # Connect Four
//!
//! Two-player Connect Four on the classic 6x7 board, with a terminal
//! front-end built on Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine, win detection
//! - [`ui`] — Terminal UI: key and mouse input, board rendering
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — Tracing subscriber setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
