//! Study session state machine.
//!
//! A session moves `Idle -> Active -> Finished`. While active the current
//! card shows either its front or its back. The deck stores card ids in a
//! shuffled display order; card contents, including star state, are always
//! read from the [`CardCollection`] so the two never diverge.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::collection::CardCollection;
use crate::error::SessionError;
use crate::types::{Card, CardId, ReviewMode};

/// Navigation request from a keyboard or timer adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Backward,
}

/// Coarse session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Idle,
    Active,
    Finished,
}

/// Uniformly shuffled ids of `cards`.
pub fn shuffle_ids<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<CardId> {
    let mut ids: Vec<CardId> = cards.iter().map(|c| c.id).collect();
    ids.shuffle(rng);
    ids
}

/// Shuffled, cursor-addressed working order of a study session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    order: Vec<CardId>,
    cursor: usize,
    flipped: bool,
    finished: bool,
    review_mode: ReviewMode,
}

impl Deck {
    /// Shuffle `cards` into a fresh deck. Returns `None` when `cards` is empty.
    pub fn shuffled<R: Rng + ?Sized>(
        cards: &[Card],
        review_mode: ReviewMode,
        rng: &mut R,
    ) -> Option<Self> {
        if cards.is_empty() {
            return None;
        }
        Some(Self {
            order: shuffle_ids(cards, rng),
            cursor: 0,
            flipped: false,
            finished: false,
            review_mode,
        })
    }

    pub fn ids(&self) -> &[CardId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn review_mode(&self) -> ReviewMode {
        self.review_mode
    }

    pub fn current_id(&self) -> Option<CardId> {
        self.order.get(self.cursor).copied()
    }

    fn next(&mut self) {
        if self.finished {
            return;
        }
        if self.cursor + 1 < self.order.len() {
            self.cursor += 1;
            self.flipped = false;
        } else {
            self.finished = true;
        }
    }

    fn previous(&mut self) {
        if self.finished || self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.flipped = false;
    }

    fn flip(&mut self) {
        if !self.finished {
            self.flipped = !self.flipped;
        }
    }

    /// Drop `id` from the order, keeping the cursor on a valid card.
    fn remove(&mut self, id: &CardId) -> bool {
        let Some(idx) = self.order.iter().position(|c| c == id) else {
            return false;
        };
        self.order.remove(idx);
        if idx < self.cursor {
            self.cursor -= 1;
        } else if idx == self.cursor {
            self.flipped = false;
            if self.cursor >= self.order.len() {
                self.cursor = self.order.len().saturating_sub(1);
            }
        }
        true
    }
}

#[derive(Debug, Clone, Default)]
enum SessionState {
    #[default]
    Idle,
    Active(Deck),
}

/// Serializable snapshot of the current session for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub phase: SessionPhase,
    pub review_mode: ReviewMode,
    pub position: usize,
    pub total: usize,
    pub flipped: bool,
    pub finished: bool,
    pub card: Option<Card>,
}

/// Drives study sessions over snapshots of the saved collection.
#[derive(Debug, Clone, Default)]
pub struct SessionController {
    state: SessionState,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start studying every card in `source`.
    pub fn start(&mut self, source: &[Card]) -> Result<(), SessionError> {
        self.start_with_rng(source, &mut rand::rng())
    }

    pub fn start_with_rng<R: Rng + ?Sized>(
        &mut self,
        source: &[Card],
        rng: &mut R,
    ) -> Result<(), SessionError> {
        let deck = Deck::shuffled(source, ReviewMode::All, rng).ok_or(SessionError::EmptySource)?;
        self.state = SessionState::Active(deck);
        Ok(())
    }

    /// Reshuffle `source` and begin again from the first card.
    pub fn restart(&mut self, source: &[Card]) -> Result<(), SessionError> {
        self.restart_with_rng(source, &mut rand::rng())
    }

    pub fn restart_with_rng<R: Rng + ?Sized>(
        &mut self,
        source: &[Card],
        rng: &mut R,
    ) -> Result<(), SessionError> {
        self.start_with_rng(source, rng)
    }

    /// Study only the starred cards of `source`.
    ///
    /// Without starred cards the session is left exactly as it was.
    pub fn review_starred(&mut self, source: &[Card]) -> Result<(), SessionError> {
        self.review_starred_with_rng(source, &mut rand::rng())
    }

    pub fn review_starred_with_rng<R: Rng + ?Sized>(
        &mut self,
        source: &[Card],
        rng: &mut R,
    ) -> Result<(), SessionError> {
        let starred: Vec<Card> = source.iter().filter(|c| c.is_starred).cloned().collect();
        let deck =
            Deck::shuffled(&starred, ReviewMode::Starred, rng).ok_or(SessionError::NoStarredCards)?;
        self.state = SessionState::Active(deck);
        Ok(())
    }

    pub fn next(&mut self) {
        if let SessionState::Active(deck) = &mut self.state {
            deck.next();
        }
    }

    pub fn previous(&mut self) {
        if let SessionState::Active(deck) = &mut self.state {
            deck.previous();
        }
    }

    pub fn flip(&mut self) {
        if let SessionState::Active(deck) = &mut self.state {
            deck.flip();
        }
    }

    pub fn navigate(&mut self, direction: Direction) {
        match direction {
            Direction::Forward => self.next(),
            Direction::Backward => self.previous(),
        }
    }

    /// Toggle the star on a saved card.
    ///
    /// The deck reads star state from the collection, so an open session
    /// sees the change immediately.
    pub fn star(&self, collection: &mut CardCollection, id: &CardId) -> Option<bool> {
        collection.toggle_star(id)
    }

    /// Remove a deleted card from the open deck.
    pub fn forget(&mut self, id: &CardId) {
        if let SessionState::Active(deck) = &mut self.state {
            if deck.remove(id) && deck.is_empty() {
                self.state = SessionState::Idle;
            }
        }
    }

    pub fn exit(&mut self) {
        self.state = SessionState::Idle;
    }

    pub fn deck(&self) -> Option<&Deck> {
        match &self.state {
            SessionState::Active(deck) => Some(deck),
            SessionState::Idle => None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        match &self.state {
            SessionState::Idle => SessionPhase::Idle,
            SessionState::Active(deck) if deck.is_finished() => SessionPhase::Finished,
            SessionState::Active(_) => SessionPhase::Active,
        }
    }

    /// The card under the cursor, read from the collection.
    pub fn current_card<'a>(&self, collection: &'a CardCollection) -> Option<&'a Card> {
        let id = self.deck()?.current_id()?;
        collection.get(&id)
    }

    /// Snapshot for display. `None` while idle.
    pub fn view(&self, collection: &CardCollection) -> Option<SessionView> {
        let deck = self.deck()?;
        Some(SessionView {
            phase: self.phase(),
            review_mode: deck.review_mode(),
            position: deck.cursor(),
            total: deck.len(),
            flipped: deck.is_flipped(),
            finished: deck.is_finished(),
            card: self.current_card(collection).cloned(),
        })
    }
}
