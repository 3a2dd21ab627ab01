//! Saved-card collection.
//!
//! The collection is the single source of truth for card contents and star
//! state. Study decks only hold ids into it.

use crate::error::CollectionError;
use crate::types::{Card, CardId, CardUpdate};

/// Ordered, in-memory list of saved cards.
#[derive(Debug, Clone, Default)]
pub struct CardCollection {
    cards: Vec<Card>,
}

impl CardCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card in canonical form. Ids must be unique within the
    /// collection and required text fields must not be blank.
    pub fn save(&mut self, card: Card) -> Result<&Card, CollectionError> {
        let card = checked(card.normalized())?;
        if self.contains(&card.id) {
            return Err(CollectionError::DuplicateId(card.id));
        }
        self.cards.push(card);
        Ok(&self.cards[self.cards.len() - 1])
    }

    /// Remove a card, returning it.
    pub fn delete(&mut self, id: &CardId) -> Result<Card, CollectionError> {
        let idx = self.position(id).ok_or(CollectionError::NotFound(*id))?;
        Ok(self.cards.remove(idx))
    }

    /// Replace a card with its edited version.
    pub fn update(&mut self, id: &CardId, update: CardUpdate) -> Result<&Card, CollectionError> {
        let idx = self.position(id).ok_or(CollectionError::NotFound(*id))?;
        self.cards[idx] = checked(self.cards[idx].with_update(update))?;
        Ok(&self.cards[idx])
    }

    /// Flip the star flag. Returns the new value, or `None` for an unknown id.
    pub fn toggle_star(&mut self, id: &CardId) -> Option<bool> {
        let idx = self.position(id)?;
        let starred = !self.cards[idx].is_starred;
        self.cards[idx] = self.cards[idx].with_update(CardUpdate {
            is_starred: Some(starred),
            ..Default::default()
        });
        Some(starred)
    }

    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == *id)
    }

    pub fn contains(&self, id: &CardId) -> bool {
        self.position(id).is_some()
    }

    /// Cards saved for a target word, compared case-insensitively.
    pub fn find_by_word<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'a Card> + 'a {
        self.cards.iter().filter(move |c| c.matches_word(word))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn position(&self, id: &CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == *id)
    }
}

fn checked(card: Card) -> Result<Card, CollectionError> {
    match card.blank_field() {
        Some(field) => Err(CollectionError::InvalidCard { id: card.id, field }),
        None => Ok(card),
    }
}
