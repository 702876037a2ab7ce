//! Bounded hands.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::card::Card;
use super::deck::Deck;
use crate::core::HandError;

/// What a draw did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A card was appended to the hand.
    Drawn(Card),
    /// Hand already at capacity; nothing happened.
    HandFull,
    /// Deck is empty; nothing happened.
    DeckExhausted,
}

impl DrawOutcome {
    #[must_use]
    pub fn card(self) -> Option<Card> {
        match self {
            DrawOutcome::Drawn(card) => Some(card),
            DrawOutcome::HandFull | DrawOutcome::DeckExhausted => None,
        }
    }
}

/// A seat's hand. Played cards leave by index, drawn cards join at the end.
///
/// Never holds more than `capacity` cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 8]>,
    capacity: usize,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            cards: SmallVec::new(),
            capacity,
        }
    }

    /// Create a hand holding `cards`, truncated to `capacity`.
    #[must_use]
    pub fn from_cards(capacity: usize, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().take(capacity).collect(),
            capacity,
        }
    }

    /// Draw one card from `deck` if there is room.
    ///
    /// A full hand or an empty deck is a no-op, not an error.
    pub fn draw(&mut self, deck: &mut Deck) -> DrawOutcome {
        if self.is_full() {
            return DrawOutcome::HandFull;
        }
        match deck.draw() {
            Ok(card) => {
                self.cards.push(card);
                DrawOutcome::Drawn(card)
            }
            Err(err) => {
                debug!(owner = %deck.owner(), %err, "Draw skipped");
                DrawOutcome::DeckExhausted
            }
        }
    }

    /// Draw until full or the deck runs out. Returns cards drawn.
    pub fn fill(&mut self, deck: &mut Deck) -> usize {
        let mut drawn = 0;
        while let DrawOutcome::Drawn(_) = self.draw(deck) {
            drawn += 1;
        }
        drawn
    }

    /// Remove and return the card at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Card, HandError> {
        if index >= self.cards.len() {
            return Err(HandError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            });
        }
        Ok(self.cards.remove(index))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.capacity
    }
}
