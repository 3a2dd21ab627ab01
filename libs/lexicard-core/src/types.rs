//! Core types for the lexical card application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Illustration reference attached to every generated card.
pub const PLACEHOLDER_ILLUSTRATION: &str = "/images/placeholder.png";

/// Opaque unique card identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(Uuid);

impl CardId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Generated text fields of a card, before an identity is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDraft {
    pub lexical_item: String,
    pub simple_definition: String,
    pub collocations: Vec<String>,
    pub context_sentence: String,
}

/// A lexical study card.
///
/// Cards are values: edits produce a replacement card under the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub word: String,
    pub lexical_item: String,
    pub original_sentence: String,
    pub simple_definition: String,
    #[serde(default)]
    pub collocations: Vec<String>,
    pub context_sentence: String,
    pub illustration: String,
    #[serde(default)]
    pub is_starred: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Card {
    /// Assemble a new unstarred card with a fresh id.
    pub fn new(draft: CardDraft, word: &str, original_sentence: &str) -> Self {
        Self {
            id: CardId::new(),
            word: normalize_word(word),
            lexical_item: draft.lexical_item,
            original_sentence: original_sentence.to_string(),
            simple_definition: draft.simple_definition,
            collocations: draft.collocations,
            context_sentence: draft.context_sentence,
            illustration: PLACEHOLDER_ILLUSTRATION.to_string(),
            is_starred: false,
            created_at: Utc::now(),
        }
    }

    /// Bring a card received from a client into canonical form: normalized
    /// word, trimmed collocations without blank entries.
    pub fn normalized(mut self) -> Self {
        self.word = normalize_word(&self.word);
        self.collocations = clean_collocations(&self.collocations);
        self
    }

    /// Name of the first required text field that is blank, if any.
    pub fn blank_field(&self) -> Option<&'static str> {
        [
            ("word", &self.word),
            ("lexicalItem", &self.lexical_item),
            ("originalSentence", &self.original_sentence),
            ("simpleDefinition", &self.simple_definition),
            ("contextSentence", &self.context_sentence),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }

    /// Case-insensitive comparison against the target word.
    pub fn matches_word(&self, word: &str) -> bool {
        self.word == normalize_word(word)
    }

    /// Produce the replacement card for an edit.
    pub fn with_update(&self, update: CardUpdate) -> Self {
        Self {
            id: self.id,
            word: update
                .word
                .map(|w| normalize_word(&w))
                .unwrap_or_else(|| self.word.clone()),
            lexical_item: update.lexical_item.unwrap_or_else(|| self.lexical_item.clone()),
            original_sentence: update
                .original_sentence
                .unwrap_or_else(|| self.original_sentence.clone()),
            simple_definition: update
                .simple_definition
                .unwrap_or_else(|| self.simple_definition.clone()),
            collocations: update
                .collocations
                .map(clean_collocations)
                .unwrap_or_else(|| self.collocations.clone()),
            context_sentence: update
                .context_sentence
                .unwrap_or_else(|| self.context_sentence.clone()),
            illustration: update.illustration.unwrap_or_else(|| self.illustration.clone()),
            is_starred: update.is_starred.unwrap_or(self.is_starred),
            created_at: self.created_at,
        }
    }
}

/// Partial edit of a card (all fields optional).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexical_item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_sentence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simple_definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collocations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_sentence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub illustration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_starred: Option<bool>,
}

/// Whether a deck spans every saved card or only starred ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewMode {
    #[default]
    All,
    Starred,
}

/// Target word normalization: trimmed and lower-cased.
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Trim collocation entries and drop the blank ones, keeping order.
pub fn clean_collocations<I, S>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .filter_map(|entry| {
            let entry = entry.as_ref().trim();
            (!entry.is_empty()).then(|| entry.to_string())
        })
        .collect()
}
