//! A classic single-player Snake arcade game for the terminal
//!
//! - Core game rules (game module): grid, snake, food, session state machine
//! - Key-to-command translation (input module)
//! - TUI rendering with ratatui (render module)
//! - Per-process play statistics (metrics module)
//! - The frame loop tying them together (app module)

pub mod app;
pub mod game;
pub mod input;
pub mod metrics;
pub mod render;
