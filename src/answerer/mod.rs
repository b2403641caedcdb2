//! Keyword-overlap question answering over a knowledge base.
//!
//! This module provides the `KeywordAnswerEngine`, a deterministic scorer
//! that matches question words against passage topic-keys and bodies, then
//! synthesizes an answer with citations. It is a substring heuristic, not
//! semantic retrieval.

mod engine;
mod types;

pub use engine::{KeywordAnswerEngine, NOT_FOUND_ANSWER};
pub use types::{Citation, QueryResult};
