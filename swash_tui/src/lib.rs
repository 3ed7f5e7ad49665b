//! swash_tui - Interactive table for trying out the Swash rules engine
//!
//! Application state and rendering. The binary in `main.rs` owns the terminal.

pub mod app;
pub mod ui;
