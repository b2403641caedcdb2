use super::DocumentId;

/// A knowledge document: a titled collection of passages keyed by topic.
///
/// Documents are the unit of authorship in the knowledge base. Each document
/// holds an ordered list of (topic-key, passage text) sections; topic-keys are
/// unique within a document, and section order is preserved from construction
/// because it decides tie-breaking when passages score equally against a
/// question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeDocument {
    id: DocumentId,
    title: String,
    sections: Vec<(String, String)>,
}

impl KnowledgeDocument {
    /// Assembles a document from pre-validated parts.
    ///
    /// Callers are responsible for topic-key uniqueness; the knowledge base
    /// loader validates before calling this.
    pub(crate) fn from_parts(
        id: DocumentId,
        title: String,
        sections: Vec<(String, String)>,
    ) -> Self {
        Self {
            id,
            title,
            sections,
        }
    }

    /// Returns the document ID.
    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    /// Returns the document title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the (topic-key, passage text) sections in insertion order.
    pub fn sections(&self) -> &[(String, String)] {
        &self.sections
    }
}

/// Builder for constructing `KnowledgeDocument` instances in code.
///
/// # Examples
///
/// ```
/// use lore::KnowledgeDocumentBuilder;
///
/// let doc = KnowledgeDocumentBuilder::new()
///     .id("rust-guide")
///     .title("Rust Field Guide")
///     .passage("ownership", "Every value in Rust has a single owner.")
///     .build();
///
/// assert_eq!(doc.title(), "Rust Field Guide");
/// assert_eq!(doc.sections().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct KnowledgeDocumentBuilder {
    id: Option<DocumentId>,
    title: Option<String>,
    sections: Vec<(String, String)>,
}

impl KnowledgeDocumentBuilder {
    /// Creates a new `KnowledgeDocumentBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document ID.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(DocumentId::new(id));
        self
    }

    /// Sets the document title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Appends a passage under the given topic-key.
    ///
    /// # Panics
    ///
    /// Panics if the topic-key was already added to this document; topic-keys
    /// must be unique within a document.
    pub fn passage(mut self, topic: impl Into<String>, text: impl Into<String>) -> Self {
        let topic = topic.into();
        assert!(
            !self.sections.iter().any(|(existing, _)| *existing == topic),
            "duplicate topic-key in document: {topic}"
        );
        self.sections.push((topic, text.into()));
        self
    }

    /// Builds the `KnowledgeDocument`.
    ///
    /// # Panics
    ///
    /// Panics if `id` or `title` have not been set.
    pub fn build(self) -> KnowledgeDocument {
        KnowledgeDocument {
            id: self.id.expect("id is required"),
            title: self.title.expect("title is required"),
            sections: self.sections,
        }
    }
}

/// A single retrievable unit of knowledge-base text.
///
/// Produced by flattening each document's sections in order. Passages own
/// their data, so a flattened list stays valid independently of the knowledge
/// base it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    document_id: DocumentId,
    document_title: String,
    topic: String,
    text: String,
}

impl Passage {
    /// Creates a new passage.
    pub(crate) fn new(
        document_id: DocumentId,
        document_title: String,
        topic: String,
        text: String,
    ) -> Self {
        Self {
            document_id,
            document_title,
            topic,
            text,
        }
    }

    /// Returns the ID of the document this passage came from.
    pub fn document_id(&self) -> &DocumentId {
        &self.document_id
    }

    /// Returns the title of the document this passage came from.
    pub fn document_title(&self) -> &str {
        &self.document_title
    }

    /// Returns the topic-key labeling this passage.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Returns the passage text.
    pub fn text(&self) -> &str {
        &self.text
    }
}
