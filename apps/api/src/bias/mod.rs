// Bias Detection: scores job descriptions for discriminatory language.
// Pure rule tables + regex matching. No I/O, no shared mutable state.

pub mod detector;
pub mod handlers;
pub mod models;
pub mod patterns;
