//! Core lexical card library shared by the backend and any front end.
//!
//! Provides:
//! - Prompt templates for card generation, simplification and stories
//! - Line-based parser turning completions into card fields
//! - Saved-card collection (single source of truth for star state)
//! - Study session state machine over shuffled decks
//! - Shared types (Card, CardId, ReviewMode, etc.)

pub mod collection;
pub mod error;
pub mod parser;
pub mod prompt;
pub mod session;
pub mod types;

pub use collection::CardCollection;
pub use error::{CollectionError, ParseError, Result, SessionError};
pub use parser::{card_draft_from_completion, parse_lines, split_collocations, strip_quotes};
pub use session::{shuffle_ids, Deck, Direction, SessionController, SessionPhase, SessionView};
pub use types::{
    normalize_word, Card, CardDraft, CardId, CardUpdate, ReviewMode, PLACEHOLDER_ILLUSTRATION,
};
