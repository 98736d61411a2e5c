//! Axum Handlers for the Form Actions
//!
//! This module contains the logic for the four interactions the page
//! supports: viewing it, submitting a problem, clearing the history, and
//! downloading the export file. Solver failures are converted to a
//! displayable `Error: <cause>` answer here, at the rendering boundary,
//! and from then on are ordinary history records.

use axum::{
    extract::{Form, State},
    http::header,
    response::{Html, IntoResponse, Redirect},
};
use mastermind_core::history::Difficulty;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

use crate::{render, state::AppState};

/// The file name offered for the export download.
pub const EXPORT_FILE_NAME: &str = "Math_Mastermind_Solutions.txt";

/// The decoded problem form.
#[derive(Debug, Deserialize)]
pub struct SolveForm {
    pub problem: String,
    #[serde(default)]
    pub difficulty: Difficulty,
}

/// Renders the page with the current history.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let history = state.history.lock().await;
    Html(render::page(&history, None))
}

/// Handles a problem submission.
///
/// Empty or whitespace-only input is rejected before any request is sent:
/// the page re-renders with a warning and the history is left untouched.
/// Otherwise the interaction blocks on the solver and the outcome, success
/// text or formatted error, is recorded at the front of the history.
pub async fn solve(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SolveForm>,
) -> Html<String> {
    let problem = form.problem.trim();
    if problem.is_empty() {
        let history = state.history.lock().await;
        return Html(render::page(
            &history,
            Some("Please enter a math problem before clicking Solve Problem."),
        ));
    }

    info!(difficulty = %form.difficulty, "solving problem");
    let answer = match state.solver.solve(problem, form.difficulty).await {
        Ok(text) => text,
        Err(err) => {
            error!("completion request failed: {err}");
            format!("Error: {err}")
        }
    };

    let mut history = state.history.lock().await;
    history.record(problem.to_string(), answer, form.difficulty);
    Html(render::page(&history, None))
}

/// Empties the history and returns to the page.
pub async fn clear(State(state): State<Arc<AppState>>) -> Redirect {
    state.history.lock().await.clear();
    info!("conversation cleared");
    Redirect::to("/")
}

/// Serves the history as a plain-text download.
pub async fn export(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let history = state.history.lock().await;
    let body = history.export();
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        body,
    )
}
