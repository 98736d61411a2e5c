//! Math Mastermind Web Service
//!
//! This library contains the web layer for the Math Mastermind solver: the
//! application state, process configuration, form/action handlers, the
//! HTML page renderer, and routing. The `bin/web.rs` binary is a thin
//! wrapper around this library.

pub mod config;
pub mod handlers;
pub mod render;
pub mod router;
pub mod state;
