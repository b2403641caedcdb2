mod document;
mod ids;

pub use document::{KnowledgeDocument, KnowledgeDocumentBuilder, Passage};
pub use ids::DocumentId;
