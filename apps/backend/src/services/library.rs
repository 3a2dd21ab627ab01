//! In-memory saved cards plus the open study session.

use lexicard_core::{
    Card, CardCollection, CardId, CardUpdate, CollectionError, Direction, SessionController,
    SessionError, SessionView,
};

/// Saved collection and session controller kept side by side.
///
/// Deletions are forwarded to the session so an open deck never points at a
/// card that no longer exists.
#[derive(Debug, Default)]
pub struct StudyLibrary {
    cards: CardCollection,
    session: SessionController,
}

impl StudyLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &CardCollection {
        &self.cards
    }

    pub fn save(&mut self, card: Card) -> Result<Card, CollectionError> {
        self.cards.save(card).cloned()
    }

    pub fn update(&mut self, id: &CardId, update: CardUpdate) -> Result<Card, CollectionError> {
        self.cards.update(id, update).cloned()
    }

    pub fn delete(&mut self, id: &CardId) -> Result<Card, CollectionError> {
        let removed = self.cards.delete(id)?;
        self.session.forget(id);
        Ok(removed)
    }

    pub fn star(&mut self, id: &CardId) -> Result<bool, CollectionError> {
        self.session
            .star(&mut self.cards, id)
            .ok_or(CollectionError::NotFound(*id))
    }

    pub fn view(&self) -> Option<SessionView> {
        self.session.view(&self.cards)
    }

    pub fn start(&mut self) -> Result<SessionView, SessionError> {
        self.session.start(self.cards.as_slice())?;
        self.view().ok_or(SessionError::EmptySource)
    }

    pub fn restart(&mut self) -> Result<SessionView, SessionError> {
        self.session.restart(self.cards.as_slice())?;
        self.view().ok_or(SessionError::EmptySource)
    }

    pub fn review_starred(&mut self) -> Result<SessionView, SessionError> {
        self.session.review_starred(self.cards.as_slice())?;
        self.view().ok_or(SessionError::EmptySource)
    }

    pub fn next(&mut self) -> Option<SessionView> {
        self.session.next();
        self.view()
    }

    pub fn previous(&mut self) -> Option<SessionView> {
        self.session.previous();
        self.view()
    }

    pub fn flip(&mut self) -> Option<SessionView> {
        self.session.flip();
        self.view()
    }

    pub fn navigate(&mut self, direction: Direction) -> Option<SessionView> {
        self.session.navigate(direction);
        self.view()
    }

    pub fn exit(&mut self) {
        self.session.exit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexicard_core::{CardDraft, ReviewMode, SessionPhase};

    fn card(word: &str) -> Card {
        Card::new(
            CardDraft {
                lexical_item: format!("{word} it"),
                simple_definition: "def".to_string(),
                collocations: vec![],
                context_sentence: "example".to_string(),
            },
            word,
            "sentence",
        )
    }

    #[test]
    fn test_star_reflected_in_open_session() {
        let mut library = StudyLibrary::new();
        library.save(card("a")).unwrap();
        library.start().unwrap();

        let current = library.view().unwrap().card.unwrap();
        assert!(library.star(&current.id).unwrap());
        assert!(library.view().unwrap().card.unwrap().is_starred);
        assert!(library.cards().get(&current.id).unwrap().is_starred);
    }

    #[test]
    fn test_star_unknown_card() {
        let mut library = StudyLibrary::new();
        assert!(matches!(
            library.star(&CardId::new()),
            Err(CollectionError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_forgets_card_in_session() {
        let mut library = StudyLibrary::new();
        let only = library.save(card("a")).unwrap();
        library.start().unwrap();

        library.delete(&only.id).unwrap();
        assert!(library.view().is_none());
        assert!(library.cards().is_empty());
    }

    #[test]
    fn test_review_starred_flow() {
        let mut library = StudyLibrary::new();
        let a = library.save(card("a")).unwrap();
        library.save(card("b")).unwrap();

        assert_eq!(library.review_starred().unwrap_err(), SessionError::NoStarredCards);
        assert!(library.view().is_none());

        library.star(&a.id).unwrap();
        let view = library.review_starred().unwrap();
        assert_eq!(view.review_mode, ReviewMode::Starred);
        assert_eq!(view.total, 1);
        assert_eq!(view.card.unwrap().id, a.id);

        let view = library.next().unwrap();
        assert_eq!(view.phase, SessionPhase::Finished);

        let view = library.restart().unwrap();
        assert_eq!(view.review_mode, ReviewMode::All);
        assert_eq!(view.total, 2);
    }

    #[test]
    fn test_start_empty_library() {
        let mut library = StudyLibrary::new();
        assert_eq!(library.start().unwrap_err(), SessionError::EmptySource);
    }
}
