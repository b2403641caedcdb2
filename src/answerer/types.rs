//! Types for knowledge-base query results.

use serde::Serialize;

/// A citation naming the source document of a passage used in the answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Citation {
    /// Title of the document the passage came from
    source: String,
    /// Leading excerpt of the passage text (up to 100 chars plus ellipsis)
    excerpt: String,
}

impl Citation {
    /// Creates a new citation.
    pub(crate) fn new(source: impl Into<String>, excerpt: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            excerpt: excerpt.into(),
        }
    }

    /// Returns the source document title.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the passage excerpt.
    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }
}

/// Result of answering a question against the knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    /// The synthesized answer text
    answer: String,
    /// Citations for the passages the answer was built from (0..=3)
    citations: Vec<Citation>,
    /// True if no passage matched the question
    #[serde(skip)]
    not_found: bool,
}

impl QueryResult {
    /// Creates a successful query result.
    pub(crate) fn new(answer: String, citations: Vec<Citation>) -> Self {
        Self {
            answer,
            citations,
            not_found: false,
        }
    }

    /// Creates the result returned when no passage matches the question.
    pub(crate) fn not_found(answer: String) -> Self {
        Self {
            answer,
            citations: Vec::new(),
            not_found: true,
        }
    }

    /// Returns the answer text.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Returns the citations backing the answer.
    pub fn citations(&self) -> &[Citation] {
        &self.citations
    }

    /// Returns true if no passage matched the question.
    pub fn is_not_found(&self) -> bool {
        self.not_found
    }

    /// Returns true if the result carries a grounded answer.
    pub fn has_answer(&self) -> bool {
        !self.not_found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_result_reports_found_state() {
        let result = QueryResult::new("Answer".to_string(), vec![]);
        assert!(result.has_answer());
        assert!(!result.is_not_found());

        let result = QueryResult::not_found("Nothing matched".to_string());
        assert!(!result.has_answer());
        assert!(result.is_not_found());
        assert!(result.citations().is_empty());
    }

    #[test]
    fn query_result_serializes_answer_and_citations_only() {
        let result = QueryResult::new(
            "Answer".to_string(),
            vec![Citation::new("Doc", "excerpt...")],
        );
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"answer":"Answer","citations":[{"source":"Doc","excerpt":"excerpt..."}]}"#
        );
    }
}
