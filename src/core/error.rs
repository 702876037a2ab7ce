//! Error types for move validation, drawing and hand access.
//!
//! Every variant is recoverable: a rejected move leaves the state exactly as
//! it was, and the caller is free to try something else.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::PlayerId;

/// Which index of a move was out of range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexKind {
    Hand,
    Caravan,
    Player,
}

impl std::fmt::Display for IndexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexKind::Hand => write!(f, "hand"),
            IndexKind::Caravan => write!(f, "caravan"),
            IndexKind::Player => write!(f, "player"),
        }
    }
}

/// Why a move was rejected.
#[derive(Error, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveError {
    #[error("{kind} index {index} out of range (len {len})")]
    BadIndex {
        kind: IndexKind,
        index: usize,
        len: usize,
    },
    #[error("caravan {caravan} is already sold")]
    ClosedCaravan { caravan: usize },
    #[error("special card needs a numeric card to act on")]
    EmptyTargetForSpecial,
    #[error("top card is not numeric, no trend to follow")]
    TrendUndefined,
    #[error("{value} breaks the caravan's trend")]
    TrendViolation { value: u8 },
    #[error("it is not {player}'s turn")]
    NotYourTurn { player: PlayerId },
    #[error("the game is already over")]
    GameOver,
}

/// Draw attempted on an empty deck.
///
/// Benign: hands swallow it and treat the draw as a no-op.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
#[error("deck exhausted")]
pub struct DeckExhausted;

/// Hand access errors.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandError {
    #[error("hand index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

impl From<HandError> for MoveError {
    fn from(err: HandError) -> Self {
        match err {
            HandError::IndexOutOfRange { index, len } => MoveError::BadIndex {
                kind: IndexKind::Hand,
                index,
                len,
            },
        }
    }
}
