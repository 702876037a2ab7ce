//! Move-selection policies for the automated seat.
//!
//! Policies are trait-based so the game loop can swap them:
//! - `GreedyPolicy`: scores every legal (card, caravan) pair
//! - `FirstLegal`: takes the first legal move in hand order

use crate::core::{GameState, Move, PlayerId};
use crate::rules::RulesEngine;

/// Policy for choosing a move for a seat.
///
/// Must not mutate anything; the caller applies the returned move.
pub trait MovePolicy: Send + Sync {
    /// Pick a move, or `None` to pass.
    fn choose(&self, rules: &dyn RulesEngine, state: &GameState, player: PlayerId) -> Option<Move>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Plays the first legal move in (hand, caravan) order.
#[derive(Clone, Debug, Default)]
pub struct FirstLegal;

impl MovePolicy for FirstLegal {
    fn choose(&self, rules: &dyn RulesEngine, state: &GameState, player: PlayerId) -> Option<Move> {
        rules.legal_moves(state, player).into_iter().next()
    }

    fn name(&self) -> &'static str {
        "first-legal"
    }
}
