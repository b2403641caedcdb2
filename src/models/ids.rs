use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a knowledge document.
///
/// Wraps the document's string key to provide type safety and prevent
/// accidental mixing of ids with other strings such as titles or topic-keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Creates a new document ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying ID string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_id_serializes_as_raw_string() {
        let id = DocumentId::new("ai-basics");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"ai-basics\"");

        let deserialized: DocumentId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, id);
    }

    #[test]
    fn document_id_displays_without_quotes() {
        let id = DocumentId::new("llm-guide");
        assert_eq!(id.to_string(), "llm-guide");
        assert_eq!(id.as_str(), "llm-guide");
    }
}
