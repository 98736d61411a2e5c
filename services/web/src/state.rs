//! Shared Application State
//!
//! This module defines the `AppState` struct, which holds the solver client
//! and the session's solution history. There is exactly one writer at a
//! time by construction (one form submission in flight), so a single async
//! mutex around the history is all the coordination needed.

use crate::config::Config;
use mastermind_core::{history::HistoryStore, solver::MathSolver};
use std::sync::Arc;
use tokio::sync::Mutex;

/// The shared application state, created once at startup and passed to all handlers.
pub struct AppState {
    pub solver: Arc<dyn MathSolver>,
    pub history: Mutex<HistoryStore>,
    pub config: Arc<Config>,
}
