//! Deterministic knowledge-base Q&A and writing-assistant toolkit.
//!
//! The core is the [`KeywordAnswerEngine`]: a keyword-overlap scorer over an
//! immutable [`KnowledgeBase`] that synthesizes an answer plus citations for
//! a free-text question. Around it sit the heuristic writing tools
//! ([`summarizer`], [`ideation`]) and the [`outreach`] delivery seam for
//! contact-form and newsletter submissions.

pub mod answerer;
pub mod ideation;
pub mod knowledge;
pub mod models;
pub mod outreach;
pub mod summarizer;
pub mod utils;

pub use answerer::{Citation, KeywordAnswerEngine, NOT_FOUND_ANSWER, QueryResult};
pub use knowledge::{KnowledgeBase, KnowledgeError};
pub use models::{DocumentId, KnowledgeDocument, KnowledgeDocumentBuilder, Passage};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_accessible_from_crate_root() {
        let engine = KeywordAnswerEngine::new(&KnowledgeBase::builtin());
        let result = engine.answer("what is machine learning");
        assert!(result.has_answer());
    }

    #[test]
    fn types_accessible_from_crate_root() {
        let doc = KnowledgeDocumentBuilder::new()
            .id("doc")
            .title("Doc")
            .passage("topic", "text")
            .build();
        assert_eq!(doc.id(), &DocumentId::new("doc"));

        let kb = KnowledgeBase::from_documents(vec![doc]).unwrap();
        assert_eq!(kb.passages().len(), 1);
    }
}
