//! Knowledge base loading and flattening.
//!
//! A `KnowledgeBase` is an ordered, immutable collection of
//! `KnowledgeDocument`s. It is loaded once (from a JSON file or from the
//! built-in document set) and never mutated afterwards, so queries over it
//! need no locking. Document order and section order within each document are
//! preserved from the source: flatten order is the tie-break order when
//! passages score equally against a question.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use thiserror::Error;

use crate::models::{DocumentId, KnowledgeDocument, KnowledgeDocumentBuilder, Passage};

/// Errors that can occur while loading a knowledge base.
#[derive(Debug, Error)]
pub enum KnowledgeError {
    /// Failed to read the knowledge file from disk.
    #[error("Failed to read knowledge file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The knowledge file is not valid JSON or violates the expected shape.
    #[error("Failed to parse knowledge file: {0}")]
    Parse(#[source] serde_json::Error),

    /// Two documents share the same ID.
    #[error("Duplicate document id: {0}")]
    DuplicateDocument(DocumentId),

    /// A document has an empty title.
    #[error("Document {0} has an empty title")]
    EmptyTitle(DocumentId),
}

/// An ordered, immutable collection of knowledge documents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KnowledgeBase {
    documents: Vec<KnowledgeDocument>,
}

impl KnowledgeBase {
    /// Creates a knowledge base from a list of documents.
    ///
    /// Document order is preserved as given.
    ///
    /// # Errors
    ///
    /// Returns an error if two documents share an ID or a document has an
    /// empty title.
    pub fn from_documents(documents: Vec<KnowledgeDocument>) -> Result<Self, KnowledgeError> {
        let mut seen = HashSet::new();
        for document in &documents {
            if !seen.insert(document.id().clone()) {
                return Err(KnowledgeError::DuplicateDocument(document.id().clone()));
            }
            if document.title().trim().is_empty() {
                return Err(KnowledgeError::EmptyTitle(document.id().clone()));
            }
        }
        Ok(Self { documents })
    }

    /// Parses a knowledge base from a JSON string.
    ///
    /// The expected shape is a map of document id to
    /// `{ "title": ..., "content": { topic-key: passage text, ... } }`.
    /// JSON object order is preserved for both documents and topic-keys, and
    /// duplicate topic-keys within a document are rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or violates the uniqueness
    /// invariants.
    pub fn from_json_str(json: &str) -> Result<Self, KnowledgeError> {
        serde_json::from_str(json).map_err(KnowledgeError::Parse)
    }

    /// Loads a knowledge base from a JSON file on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails to parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, KnowledgeError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| KnowledgeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Returns the built-in document set covering AI fundamentals, prompt
    /// engineering, and large language models.
    ///
    /// This is the knowledge base used when no file is configured, so `ask`
    /// works out of the box.
    pub fn builtin() -> Self {
        let documents = vec![
            KnowledgeDocumentBuilder::new()
                .id("ai-basics")
                .title("AI Fundamentals Guide")
                .passage(
                    "artificial intelligence",
                    "Artificial Intelligence (AI) refers to the simulation of human intelligence in machines that are programmed to think and learn like humans. AI systems can perform tasks that typically require human intelligence, such as visual perception, speech recognition, decision-making, and language translation.",
                )
                .passage(
                    "machine learning",
                    "Machine Learning is a subset of AI that enables computers to learn and improve from experience without being explicitly programmed. It uses algorithms to analyze data, identify patterns, and make predictions or decisions.",
                )
                .passage(
                    "neural networks",
                    "Neural networks are computing systems inspired by biological neural networks. They consist of interconnected nodes (neurons) that process information and can learn complex patterns in data.",
                )
                .passage(
                    "deep learning",
                    "Deep Learning is a subset of machine learning that uses neural networks with multiple layers (deep neural networks) to model and understand complex patterns in data.",
                )
                .build(),
            KnowledgeDocumentBuilder::new()
                .id("prompt-engineering")
                .title("Prompt Engineering Best Practices")
                .passage(
                    "prompt engineering",
                    "Prompt engineering is the practice of designing and optimizing input prompts to get better outputs from AI language models. It involves crafting clear, specific instructions that guide the AI to produce desired responses.",
                )
                .passage(
                    "best practices",
                    "Key prompt engineering best practices include: being specific and clear, providing context, using examples (few-shot learning), breaking complex tasks into steps, and iterating on prompts based on results.",
                )
                .passage(
                    "few-shot learning",
                    "Few-shot learning in prompt engineering involves providing a few examples of the desired input-output format to help the AI understand the task better.",
                )
                .passage(
                    "chain of thought",
                    "Chain of thought prompting encourages the AI to show its reasoning process step-by-step, leading to more accurate and explainable results.",
                )
                .build(),
            KnowledgeDocumentBuilder::new()
                .id("llm-guide")
                .title("Large Language Models Overview")
                .passage(
                    "large language models",
                    "Large Language Models (LLMs) are AI systems trained on vast amounts of text data to understand and generate human-like text. They can perform various language tasks including translation, summarization, question answering, and creative writing.",
                )
                .passage(
                    "transformers",
                    "Transformers are the architecture behind most modern LLMs. They use attention mechanisms to process sequences of data and understand relationships between different parts of the input.",
                )
                .passage(
                    "training process",
                    "LLMs are trained in two main phases: pre-training on large text datasets to learn language patterns, and fine-tuning on specific tasks or datasets to improve performance on particular applications.",
                )
                .passage(
                    "applications",
                    "LLMs have numerous applications including chatbots, content generation, code assistance, language translation, summarization, and question answering systems.",
                )
                .passage(
                    "limitations",
                    "LLM limitations include potential hallucinations (generating false information), bias from training data, lack of real-time knowledge updates, and high computational requirements.",
                )
                .build(),
        ];

        Self { documents }
    }

    /// Returns the documents in insertion order.
    pub fn documents(&self) -> &[KnowledgeDocument] {
        &self.documents
    }

    /// Returns the number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if the knowledge base contains no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Flattens the knowledge base into passages.
    ///
    /// Passages appear in document order, then section order within each
    /// document. This order is stable across calls and is what breaks ties
    /// between equally scored passages.
    pub fn passages(&self) -> Vec<Passage> {
        self.documents
            .iter()
            .flat_map(|document| {
                document.sections().iter().map(|(topic, text)| {
                    Passage::new(
                        document.id().clone(),
                        document.title().to_string(),
                        topic.clone(),
                        text.clone(),
                    )
                })
            })
            .collect()
    }
}

/// Per-document payload in the knowledge file, before the ID is attached.
struct DocumentEntry {
    title: String,
    sections: Vec<(String, String)>,
}

impl<'de> Deserialize<'de> for DocumentEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = DocumentEntry;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a document object with title and content fields")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut title: Option<String> = None;
                let mut sections: Option<Vec<(String, String)>> = None;

                while let Some(field) = map.next_key::<String>()? {
                    match field.as_str() {
                        "title" => {
                            if title.is_some() {
                                return Err(de::Error::duplicate_field("title"));
                            }
                            title = Some(map.next_value()?);
                        }
                        "content" => {
                            if sections.is_some() {
                                return Err(de::Error::duplicate_field("content"));
                            }
                            sections = Some(map.next_value_seed(OrderedSections)?);
                        }
                        other => {
                            return Err(de::Error::unknown_field(other, &["title", "content"]));
                        }
                    }
                }

                Ok(DocumentEntry {
                    title: title.ok_or_else(|| de::Error::missing_field("title"))?,
                    sections: sections.ok_or_else(|| de::Error::missing_field("content"))?,
                })
            }
        }

        deserializer.deserialize_map(EntryVisitor)
    }
}

/// Deserializes a JSON object into (topic-key, passage text) pairs, keeping
/// the object's own order and rejecting duplicate topic-keys.
struct OrderedSections;

impl<'de> de::DeserializeSeed<'de> for OrderedSections {
    type Value = Vec<(String, String)>;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SectionsVisitor;

        impl<'de> Visitor<'de> for SectionsVisitor {
            type Value = Vec<(String, String)>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of topic-keys to passage text")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut sections = Vec::new();
                let mut seen = HashSet::new();
                while let Some((topic, text)) = map.next_entry::<String, String>()? {
                    if !seen.insert(topic.clone()) {
                        return Err(de::Error::custom(format!(
                            "duplicate topic-key: {topic}"
                        )));
                    }
                    sections.push((topic, text));
                }
                Ok(sections)
            }
        }

        deserializer.deserialize_map(SectionsVisitor)
    }
}

impl<'de> Deserialize<'de> for KnowledgeBase {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BaseVisitor;

        impl<'de> Visitor<'de> for BaseVisitor {
            type Value = KnowledgeBase;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of document ids to documents")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut documents = Vec::new();
                while let Some((id, entry)) = map.next_entry::<String, DocumentEntry>()? {
                    documents.push(KnowledgeDocument::from_parts(
                        DocumentId::new(id),
                        entry.title,
                        entry.sections,
                    ));
                }
                KnowledgeBase::from_documents(documents).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_map(BaseVisitor)
    }
}
