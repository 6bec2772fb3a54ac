//! # Connect Four
//!
//! A two-player Connect Four game. The core keeps the board, decides wins
//! and ties, and runs the turn loop; two front ends drive it, a line-based
//! console session and a full-screen terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, win detection, turn loop
//! - [`console`] — Text prompts and board printing over any reader/writer
//! - [`ui`] — Terminal UI
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod ui;
