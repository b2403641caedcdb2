//! Scoring and answer synthesis.

use crate::knowledge::KnowledgeBase;
use crate::models::Passage;

use super::types::{Citation, QueryResult};

/// Points awarded when a question word appears in a passage's topic-key.
const TOPIC_WEIGHT: u32 = 3;

/// Points awarded when a question word appears in a passage body token.
const BODY_WEIGHT: u32 = 1;

/// Maximum passages used for the answer and cited.
const MAX_MATCHES: usize = 3;

/// Citation excerpt cap, in characters.
const EXCERPT_CHARS: usize = 100;

/// Answer returned when no passage scores above zero.
pub const NOT_FOUND_ANSWER: &str = "I couldn't find relevant information in the knowledge base \
to answer your question. Please try asking about AI fundamentals, prompt engineering, or large \
language models.";

/// A passage scored against one question. Transient, per-call.
struct MatchCandidate<'a> {
    passage: &'a Passage,
    score: u32,
}

/// Deterministic keyword-overlap question answering engine.
///
/// The engine flattens the knowledge base once at construction and holds it
/// read-only, so `answer` is a pure function of the question: no interior
/// mutability, no cross-call state, and concurrent callers need no locking.
///
/// # Examples
///
/// ```
/// use lore::{KeywordAnswerEngine, KnowledgeBase};
///
/// let engine = KeywordAnswerEngine::new(&KnowledgeBase::builtin());
/// let result = engine.answer("What is machine learning?");
/// assert!(result.has_answer());
/// assert!(!result.citations().is_empty());
/// ```
pub struct KeywordAnswerEngine {
    passages: Vec<Passage>,
}

impl KeywordAnswerEngine {
    /// Creates an engine over the given knowledge base.
    pub fn new(knowledge: &KnowledgeBase) -> Self {
        Self {
            passages: knowledge.passages(),
        }
    }

    /// Answers a free-text question.
    ///
    /// Total over all inputs: empty or unmatched questions yield the fixed
    /// not-found answer with zero citations rather than an error.
    ///
    /// Scoring: per lowercased question word, +3 if the passage's topic-key
    /// contains the word and +1 if any whitespace token of the lowercased
    /// passage body contains it. Ties keep flatten order (document order,
    /// then topic-key order within a document).
    pub fn answer(&self, question: &str) -> QueryResult {
        let query = question.to_lowercase();
        let words: Vec<&str> = query.split_whitespace().collect();

        let mut candidates: Vec<MatchCandidate> = self
            .passages
            .iter()
            .filter_map(|passage| {
                let score = score_passage(passage, &words);
                (score > 0).then_some(MatchCandidate { passage, score })
            })
            .collect();

        // sort_by is stable, so equal scores keep flatten order
        candidates.sort_by(|a, b| b.score.cmp(&a.score));

        if candidates.is_empty() {
            return QueryResult::not_found(NOT_FOUND_ANSWER.to_string());
        }

        let top = &candidates[..candidates.len().min(MAX_MATCHES)];
        let answer = frame_answer(&query, compose_answer(top));
        let citations = top
            .iter()
            .map(|candidate| {
                Citation::new(
                    candidate.passage.document_title(),
                    excerpt(candidate.passage.text()),
                )
            })
            .collect();

        QueryResult::new(answer, citations)
    }
}

/// Scores one passage against the question words.
fn score_passage(passage: &Passage, words: &[&str]) -> u32 {
    let body = passage.text().to_lowercase();
    let tokens: Vec<&str> = body.split_whitespace().collect();

    let mut score = 0;
    for &word in words {
        if passage.topic().contains(word) {
            score += TOPIC_WEIGHT;
        }
        if tokens.iter().any(|token| token.contains(word)) {
            score += BODY_WEIGHT;
        }
    }
    score
}

/// Builds the raw answer text from the top candidates: the best passage,
/// followed by the second and third joined after a connective.
fn compose_answer(top: &[MatchCandidate]) -> String {
    let mut answer = top[0].passage.text().to_string();

    if top.len() > 1 {
        let additional = top[1..]
            .iter()
            .map(|candidate| candidate.passage.text())
            .collect::<Vec<_>>()
            .join(" ");
        if !additional.is_empty() {
            answer.push_str(" Additionally, ");
            answer.push_str(&additional);
        }
    }

    answer
}

/// Applies a conversational prefix based on how the question is phrased.
///
/// The checks are substring checks over the whole lowercased question, not
/// anchored to its start.
fn frame_answer(query: &str, answer: String) -> String {
    if query.contains("what is") || query.contains("what are") {
        answer
    } else if query.contains("how") {
        format!("Based on the available information: {answer}")
    } else {
        format!("Here's what I found: {answer}")
    }
}

/// Returns the first 100 characters of the passage followed by an ellipsis.
///
/// Short passages still get the ellipsis; the truncation is not guarded.
fn excerpt(text: &str) -> String {
    let head: String = text.chars().take(EXCERPT_CHARS).collect();
    format!("{head}...")
}
