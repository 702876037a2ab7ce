//! Cards, decks and hands.
//!
//! - `Card`: immutable rank + suit + provenance
//! - `Deck`: 54-card per-seat draw pile, shuffled once
//! - `Hand`: bounded collection a seat plays from

pub mod card;
pub mod deck;
pub mod hand;

pub use card::{Card, CardId, Rank, Suit};
pub use deck::{Deck, DECK_SIZE, JOKERS_PER_DECK};
pub use hand::{DrawOutcome, Hand};
