//! Math Mastermind Core Library
//!
//! This crate contains the domain logic for the Math Mastermind solver:
//! the session-local solution history and the LLM-backed solver client.
//! It has no knowledge of the web layer; the service crate wires these
//! pieces into handlers and rendering.

pub mod history;
pub mod solver;
