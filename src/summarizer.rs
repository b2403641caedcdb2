//! Heuristic extractive note summarization.
//!
//! Sentences are scored with a fixed keyword list plus length and position
//! bonuses, then the top scorers are rendered as bullets, a paragraph, or a
//! numbered action list. Deterministic: same input, same summary.

use clap::ValueEnum;

/// Keywords that mark a sentence as carrying a key point.
const IMPORTANT_WORDS: &[&str] = &[
    "important",
    "key",
    "main",
    "significant",
    "crucial",
    "essential",
    "primary",
    "major",
    "critical",
    "findings",
    "results",
    "conclusion",
    "recommendation",
];

/// Keywords that mark a sentence as actionable.
const ACTION_WORDS: &[&str] = &[
    "action", "task", "todo", "complete", "finish", "deliver", "submit", "review", "discuss",
    "meet", "call", "email", "send", "prepare", "create", "update",
];

/// Output shape of the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryStyle {
    /// Bulleted key points
    Bullet,
    /// Key points joined into a paragraph
    Paragraph,
    /// Numbered action items
    Action,
}

/// How much of the source to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryLength {
    Brief,
    Medium,
    Detailed,
}

impl SummaryLength {
    /// Maximum key points extracted for bullet and paragraph summaries.
    fn max_key_points(self) -> usize {
        match self {
            Self::Brief => 3,
            Self::Medium => 6,
            Self::Detailed => 10,
        }
    }

    /// Maximum items kept in an action summary.
    fn max_actions(self) -> usize {
        match self {
            Self::Brief => 3,
            Self::Medium => 5,
            Self::Detailed => 8,
        }
    }
}

/// Summarizes free-form note text.
///
/// Empty or punctuation-only input yields an empty summary rather than an
/// error; callers that want to reject it should validate first.
pub fn summarize(text: &str, style: SummaryStyle, length: SummaryLength) -> String {
    let sentences = split_sentences(text);

    match style {
        SummaryStyle::Bullet => key_points(&sentences, length.max_key_points())
            .iter()
            .map(|point| format!("• {point}"))
            .collect::<Vec<_>>()
            .join("\n"),
        SummaryStyle::Paragraph => {
            let points = key_points(&sentences, length.max_key_points());
            if points.is_empty() {
                String::new()
            } else {
                format!("{}.", points.join(". "))
            }
        }
        SummaryStyle::Action => action_items(&sentences, length),
    }
}

/// Splits text into trimmed, non-empty sentences on `.`, `!`, and `?`.
fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

/// Extracts the highest-scoring sentences, keeping document order for ties.
///
/// Scoring: +2 per importance keyword the lowercased sentence contains, +1
/// for a word count strictly between 10 and 30, +1 for being the first or
/// last sentence.
fn key_points(sentences: &[&str], max: usize) -> Vec<String> {
    let mut scored: Vec<(&str, u32)> = sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| {
            let lower = sentence.to_lowercase();
            let mut score = 0;

            for word in IMPORTANT_WORDS {
                if lower.contains(word) {
                    score += 2;
                }
            }

            let word_count = sentence.split_whitespace().count();
            if word_count > 10 && word_count < 30 {
                score += 1;
            }

            if index == 0 || index + 1 == sentences.len() {
                score += 1;
            }

            (*sentence, score)
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
        .into_iter()
        .take(max)
        .map(|(sentence, _)| sentence.to_string())
        .collect()
}

/// Builds a numbered action list from sentences containing action keywords.
///
/// When no sentence looks actionable, falls back to the key points prefixed
/// with `Complete:`.
fn action_items(sentences: &[&str], length: SummaryLength) -> String {
    let mut actions: Vec<String> = sentences
        .iter()
        .filter(|sentence| {
            let lower = sentence.to_lowercase();
            ACTION_WORDS.iter().any(|word| lower.contains(word))
        })
        .map(|sentence| sentence.to_string())
        .collect();

    if actions.is_empty() {
        actions = key_points(sentences, length.max_key_points())
            .into_iter()
            .map(|point| format!("Complete: {point}"))
            .collect();
    }

    actions.truncate(length.max_actions());
    actions
        .iter()
        .enumerate()
        .map(|(index, action)| format!("{}. {}", index + 1, action))
        .collect::<Vec<_>>()
        .join("\n")
}
