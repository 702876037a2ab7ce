//! Per-seat draw piles.
//!
//! Each seat owns a 54-card deck: four suits of ten numeric ranks plus
//! Jack, Queen and King, and two suitless Jokers. Card ids are offset by
//! seat so no card identity is shared between the two decks.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::card::{Card, CardId, Rank, Suit};
use crate::core::{DeckExhausted, GameRng, PlayerId};

/// Cards in a freshly built deck.
pub const DECK_SIZE: usize = 54;

/// Jokers in a freshly built deck.
pub const JOKERS_PER_DECK: usize = 2;

/// A seat's draw pile. The top of the deck is the end of the vec.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    owner: PlayerId,
    cards: Vec<Card>,
}

impl Deck {
    /// Build a full deck for `owner` and shuffle it once.
    #[must_use]
    pub fn build(owner: PlayerId, rng: &mut GameRng) -> Self {
        let mut cards = Self::standard_cards(owner);
        rng.shuffle(&mut cards);
        trace!(%owner, cards = cards.len(), "Deck built");
        Self { owner, cards }
    }

    /// The unshuffled composition, in suit-major order then the Jokers.
    #[must_use]
    pub fn standard_cards(owner: PlayerId) -> Vec<Card> {
        let base = owner.0 as u32 * DECK_SIZE as u32;
        let faces = [Rank::Jack, Rank::Queen, Rank::King];

        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::numerics().chain(faces) {
                let id = CardId::new(base + cards.len() as u32);
                cards.push(Card::new(id, rank, suit, owner));
            }
        }
        for _ in 0..JOKERS_PER_DECK {
            let id = CardId::new(base + cards.len() as u32);
            cards.push(Card::joker(id, owner));
        }
        cards
    }

    /// A deck with a fixed order. The last card is drawn first.
    #[must_use]
    pub fn from_cards(owner: PlayerId, cards: Vec<Card>) -> Self {
        Self { owner, cards }
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card, DeckExhausted> {
        self.cards.pop().ok_or(DeckExhausted)
    }

    /// Peek at the top card.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
