// Candidate Feedback: turns a rejection into structured, actionable feedback.
// Gap analysis drives templated prose. Deterministic for identical inputs.

pub mod analysis;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod templates;
