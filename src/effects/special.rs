//! Special-card effects.
//!
//! Jack, Queen, King and Joker never enter a caravan themselves. Each one
//! rewrites the target stack and is then discarded. Every effect needs a
//! non-empty target.

use serde::{Deserialize, Serialize};

use crate::caravan::Caravan;
use crate::cards::{Card, CardId, Rank};
use crate::core::MoveError;

/// A stack rewrite triggered by a special card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialEffect {
    /// Jack: remove the top entry.
    DiscardTop,
    /// Queen: reverse the whole stack.
    Reverse,
    /// King: append a copy of the top entry, which must be numeric.
    DuplicateTop,
    /// Joker: empty the stack.
    Clear,
}

/// How a card acts on the caravan it is played to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardEffect {
    /// Numeric card: placed on top, subject to the trend.
    Place(u8),
    /// Special card: rewrites the stack and is discarded.
    Special(SpecialEffect),
}

impl CardEffect {
    /// The effect carried by `rank`.
    #[must_use]
    pub fn of(rank: Rank) -> Self {
        match rank {
            Rank::Numeric(value) => CardEffect::Place(value),
            Rank::Jack => CardEffect::Special(SpecialEffect::DiscardTop),
            Rank::Queen => CardEffect::Special(SpecialEffect::Reverse),
            Rank::King => CardEffect::Special(SpecialEffect::DuplicateTop),
            Rank::Joker => CardEffect::Special(SpecialEffect::Clear),
        }
    }

    /// Check whether a card with this effect may be played on `caravan`.
    pub fn check(self, caravan: &Caravan) -> Result<(), MoveError> {
        match self {
            CardEffect::Place(value) => caravan.check_numeric(value),
            CardEffect::Special(effect) => effect.check(caravan),
        }
    }
}

/// Play `card` onto `caravan`: check, then mutate. On error the caravan is
/// untouched.
pub fn play_onto(card: &Card, caravan: &mut Caravan) -> Result<(), MoveError> {
    match CardEffect::of(card.rank()) {
        CardEffect::Place(value) => {
            caravan.check_numeric(value)?;
            caravan.push(*card);
            Ok(())
        }
        CardEffect::Special(effect) => effect.resolve(card.id(), caravan),
    }
}

/// The caravan `play_onto` would produce, leaving `caravan` alone.
pub fn preview_play(card: &Card, caravan: &Caravan) -> Result<Caravan, MoveError> {
    let mut scratch = caravan.clone();
    play_onto(card, &mut scratch)?;
    Ok(scratch)
}

impl SpecialEffect {
    /// Check whether the effect can act on `caravan`.
    pub fn check(self, caravan: &Caravan) -> Result<(), MoveError> {
        let top = caravan.top().ok_or(MoveError::EmptyTargetForSpecial)?;
        match self {
            SpecialEffect::DuplicateTop if !top.is_numeric() => Err(MoveError::EmptyTargetForSpecial),
            _ => Ok(()),
        }
    }

    /// Check, then rewrite `caravan`. On error the caravan is untouched.
    ///
    /// `source` is the special card being played; a King's copy takes its
    /// identity from it.
    pub fn resolve(self, source: CardId, caravan: &mut Caravan) -> Result<(), MoveError> {
        self.check(caravan)?;
        match self {
            SpecialEffect::DiscardTop => {
                caravan.pop_top();
            }
            SpecialEffect::Reverse => caravan.reverse(),
            SpecialEffect::DuplicateTop => {
                if let Some(copy) = caravan.top().map(|top| top.king_copy(source)) {
                    caravan.push(copy);
                }
            }
            SpecialEffect::Clear => caravan.clear(),
        }
        Ok(())
    }
}

impl std::fmt::Display for SpecialEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecialEffect::DiscardTop => write!(f, "discard top"),
            SpecialEffect::Reverse => write!(f, "reverse"),
            SpecialEffect::DuplicateTop => write!(f, "duplicate top"),
            SpecialEffect::Clear => write!(f, "clear"),
        }
    }
}
