//! # Connect Four
//!
//! A two-player, turn-based console Connect Four game on the classic 6x7
//! grid. Players alternately drop discs into columns; the first to align
//! four horizontally, vertically, or diagonally wins, and a full board
//! with no winner is a draw.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, seats, round state machine
//! - [`players`] — The `Player` trait and the human console player
//! - [`console`] — Line-oriented console abstraction (stdin/stdout or
//!   scripted buffers in tests)
//! - [`ui`] — Board and message rendering
//! - [`controller`] — Turn order, round loop, restart/exit handling
//! - [`config`] — TOML display configuration
//! - [`error`] — Structured error types

pub mod config;
pub mod console;
pub mod controller;
pub mod error;
pub mod game;
pub mod players;
pub mod ui;
