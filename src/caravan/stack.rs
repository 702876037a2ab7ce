//! Caravan stacks.
//!
//! A `Caravan` stores only its cards. `total` and `trend` are recomputed
//! from the stack on every call, so no effect can leave them stale.

use serde::{Deserialize, Serialize};

use super::trend::Trend;
use crate::cards::Card;
use crate::core::{GameConfig, MoveError};

/// An ordered stack of cards. The top is the end of the vec.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caravan {
    cards: Vec<Card>,
}

impl Caravan {
    /// Create an empty caravan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a caravan holding `cards`, bottom first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Cards bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Pip values of the numeric entries, in stack order.
    pub fn numeric_values(&self) -> impl DoubleEndedIterator<Item = u8> + '_ {
        self.cards.iter().filter_map(Card::pip)
    }

    /// Sum of every entry's contribution. King copies count as numerics.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.cards.iter().map(|c| c.rank().contribution()).sum()
    }

    /// Direction set by the two most recent numeric entries.
    #[must_use]
    pub fn trend(&self) -> Trend {
        Trend::of_sequence(self.numeric_values())
    }

    /// Whether the total lies in the sold range.
    #[must_use]
    pub fn is_sold(&self, config: &GameConfig) -> bool {
        config.is_sold_total(self.total())
    }

    /// Check that a numeric card of value `value` may be placed on top.
    pub fn check_numeric(&self, value: u8) -> Result<(), MoveError> {
        let Some(top) = self.top() else {
            return Ok(());
        };
        let Some(last) = top.pip() else {
            return Err(MoveError::TrendUndefined);
        };
        if self.trend().admits(last, value) {
            Ok(())
        } else {
            Err(MoveError::TrendViolation { value })
        }
    }

    // === Mutation (rules-checked callers only) ===

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) fn pop_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub(crate) fn reverse(&mut self) {
        self.cards.reverse();
    }

    pub(crate) fn clear(&mut self) {
        self.cards.clear();
    }
}

impl std::fmt::Display for Caravan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", card.rank())?;
        }
        write!(f, "] = {}", self.total())
    }
}
