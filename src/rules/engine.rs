//! Move validation, application and win detection.
//!
//! `RulesEngine` is the seam the game loop and the automated opponent talk
//! to. `CaravanRules` implements it for the standard table described by a
//! `GameConfig`.

use tracing::debug;

use crate::caravan::Caravan;
use crate::cards::Card;
use crate::core::{Action, GameConfig, GameState, IndexKind, Move, MoveError, Player, PlayerId};
use crate::effects::{play_onto, CardEffect};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `check_move` and `apply_move` must agree: a move passes `check_move`
///   exactly when `apply_move` would succeed
/// - `apply_move` is all-or-nothing: on `Err` the state is unchanged
/// - Turn order and game-over are not checked here; the game loop owns them
pub trait RulesEngine {
    /// Get the table configuration.
    fn config(&self) -> &GameConfig;

    /// Validate a move without touching the state.
    fn check_move(&self, state: &GameState, player: PlayerId, mv: Move) -> Result<(), MoveError>;

    /// Validate and apply a move. Returns the card that left the hand.
    fn apply_move(&self, state: &mut GameState, player: PlayerId, mv: Move) -> Result<Card, MoveError>;

    /// Whether `player` has enough sold caravans to win.
    fn is_winning(&self, player: &Player) -> bool;

    // === Convenience Methods ===

    /// First seat (in seat order) that is winning, if any.
    fn winner(&self, state: &GameState) -> Option<PlayerId> {
        PlayerId::all().find(|&id| self.is_winning(state.player(id)))
    }

    /// Every move `player` could make right now, in (hand, caravan) order.
    fn legal_moves(&self, state: &GameState, player: PlayerId) -> Vec<Move> {
        if !player.is_valid() {
            return Vec::new();
        }
        let seat = state.player(player);
        let mut moves = Vec::new();
        for hand_index in 0..seat.hand.len() {
            for caravan_index in 0..seat.caravans.len() {
                let mv = Move::new(hand_index, caravan_index);
                if self.check_move(state, player, mv).is_ok() {
                    moves.push(mv);
                }
            }
        }
        moves
    }
}

/// Standard Caravan rules.
#[derive(Clone, Debug, Default)]
pub struct CaravanRules {
    config: GameConfig,
}

impl CaravanRules {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Resolve the card and caravan a move names, checking both indices and
    /// the sold guard.
    fn target<'a>(
        &self,
        state: &'a GameState,
        player: PlayerId,
        mv: Move,
    ) -> Result<(&'a Card, &'a Caravan), MoveError> {
        if !player.is_valid() {
            return Err(MoveError::BadIndex {
                kind: IndexKind::Player,
                index: player.index(),
                len: crate::core::PLAYER_COUNT,
            });
        }
        let seat = state.player(player);
        let card = seat.hand.get(mv.hand_index).ok_or(MoveError::BadIndex {
            kind: IndexKind::Hand,
            index: mv.hand_index,
            len: seat.hand.len(),
        })?;
        let caravan = seat.caravan(mv.caravan_index).ok_or(MoveError::BadIndex {
            kind: IndexKind::Caravan,
            index: mv.caravan_index,
            len: seat.caravans.len(),
        })?;
        if caravan.is_sold(&self.config) {
            return Err(MoveError::ClosedCaravan {
                caravan: mv.caravan_index,
            });
        }
        Ok((card, caravan))
    }
}

impl RulesEngine for CaravanRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn check_move(&self, state: &GameState, player: PlayerId, mv: Move) -> Result<(), MoveError> {
        let (card, caravan) = self.target(state, player, mv)?;
        CardEffect::of(card.rank()).check(caravan)
    }

    fn apply_move(&self, state: &mut GameState, player: PlayerId, mv: Move) -> Result<Card, MoveError> {
        let card = match self.target(state, player, mv) {
            Ok((card, _)) => *card,
            Err(err) => {
                debug!(%player, %mv, %err, "Move rejected");
                return Err(err);
            }
        };

        let seat = state.player_mut(player);
        if let Err(err) = play_onto(&card, &mut seat.caravans[mv.caravan_index]) {
            debug!(%player, %mv, %card, %err, "Move rejected");
            return Err(err);
        }
        let played = seat.hand.remove(mv.hand_index)?;
        debug!(
            %player,
            %card,
            caravan = mv.caravan_index,
            total = seat.caravans[mv.caravan_index].total(),
            "Move applied"
        );

        state.record(
            player,
            Action::Play {
                card: played,
                caravan: mv.caravan_index,
            },
        );
        Ok(played)
    }

    fn is_winning(&self, player: &Player) -> bool {
        player.sold_count(&self.config) >= self.config.caravans_to_win
    }
}
