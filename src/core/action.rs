//! Moves and the turn history.
//!
//! A `Move` is what a caller asks for: a hand slot and a caravan slot.
//! An `ActionRecord` is what actually happened, with the card resolved,
//! kept for display and debugging.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::Card;

/// Play the card at `hand_index` onto caravan `caravan_index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub hand_index: usize,
    pub caravan_index: usize,
}

impl Move {
    #[must_use]
    pub const fn new(hand_index: usize, caravan_index: usize) -> Self {
        Self {
            hand_index,
            caravan_index,
        }
    }
}

impl From<(usize, usize)> for Move {
    fn from((hand_index, caravan_index): (usize, usize)) -> Self {
        Self::new(hand_index, caravan_index)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hand[{}] -> caravan[{}]", self.hand_index, self.caravan_index)
    }
}

/// Something a seat did on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// A card left the hand and acted on a caravan.
    Play { card: Card, caravan: usize },
    /// The seat had no move it wanted and passed.
    Pass,
}

/// A recorded action with metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that acted.
    pub player: PlayerId,

    /// What it did.
    pub action: Action,

    /// Turn number when it acted (starts at 1).
    pub turn: u32,

    /// Position in the game's history (starts at 0).
    pub sequence: u32,
}

impl std::fmt::Display for ActionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.action {
            Action::Play { card, caravan } => {
                write!(f, "turn {}: {} played {} on caravan {}", self.turn, self.player, card, caravan)
            }
            Action::Pass => write!(f, "turn {}: {} passed", self.turn, self.player),
        }
    }
}
