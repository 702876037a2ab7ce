//! Caravan game implementation.

use tracing::{debug, info, warn};

use crate::ai::{GreedyPolicy, MovePolicy};
use crate::cards::{Card, DrawOutcome};
use crate::core::{
    Action, GameConfig, GameRng, GameState, IndexKind, Move, MoveError, Outcome, PlayerId, PLAYER_COUNT,
};
use crate::rules::{CaravanRules, RulesEngine};

/// The call surface a front end drives.
///
/// Holds the rules and the automated seat's policy. All game data lives in
/// the `GameState` passed to each call.
pub struct CaravanGame {
    rules: CaravanRules,
    policy: Box<dyn MovePolicy>,
}

/// Builder for creating a CaravanGame.
pub struct CaravanGameBuilder {
    config: GameConfig,
    policy: Box<dyn MovePolicy>,
}

impl Default for CaravanGameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            policy: Box::new(GreedyPolicy::default()),
        }
    }
}

impl CaravanGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn automated_seat(mut self, seat: Option<PlayerId>) -> Self {
        self.config.automated_seat = seat;
        self
    }

    pub fn policy(mut self, policy: impl MovePolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Build the game and deal the first hand.
    pub fn build(self) -> (CaravanGame, GameState) {
        let game = CaravanGame {
            rules: CaravanRules::new(self.config),
            policy: self.policy,
        };
        let state = game.new_game();
        (game, state)
    }
}

impl CaravanGame {
    #[must_use]
    pub fn rules(&self) -> &CaravanRules {
        &self.rules
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.rules.config()
    }

    #[must_use]
    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Build two fresh decks, deal full hands, first seat to act.
    ///
    /// With a configured seed every call deals the same game.
    #[must_use]
    pub fn new_game(&self) -> GameState {
        let rng = match self.config().seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let state = GameState::deal(self.config(), &rng);
        info!(seed = state.seed(), policy = self.policy.name(), "New game dealt");
        state
    }

    /// Throw away the current game and deal a new one.
    pub fn restart(&self, state: &mut GameState) {
        *state = self.new_game();
    }

    /// Play a card for `player`. Checks turn order, then the rules, then
    /// looks for a winner.
    pub fn play_card(
        &self,
        state: &mut GameState,
        player: PlayerId,
        hand_index: usize,
        caravan_index: usize,
    ) -> Result<Card, MoveError> {
        self.ensure_can_act(state, player)?;
        let card = self
            .rules
            .apply_move(state, player, Move::new(hand_index, caravan_index))?;
        self.check_winner(state);
        Ok(card)
    }

    /// Draw one card for `player`. A full hand or empty deck is a no-op;
    /// only an unknown seat is an error.
    pub fn draw_card(&self, state: &mut GameState, player: PlayerId) -> Result<DrawOutcome, MoveError> {
        if !player.is_valid() {
            return Err(MoveError::BadIndex {
                kind: IndexKind::Player,
                index: player.index(),
                len: PLAYER_COUNT,
            });
        }
        let seat = state.player_mut(player);
        let outcome = seat.hand.draw(&mut seat.deck);
        debug!(%player, ?outcome, "Draw");
        Ok(outcome)
    }

    /// Hand the turn to the other seat.
    pub fn switch_turn(&self, state: &mut GameState) {
        state.active_player = state.active_player.opponent();
        state.turn_number += 1;
        debug!(active = %state.active_player, turn = state.turn_number, "Turn switched");
    }

    /// Pick a move for `player` with the configured policy and apply it.
    ///
    /// Returns the move applied, or `None` if the policy passed or the
    /// seat may not act.
    pub fn ai_decide_and_apply(&self, state: &mut GameState, player: PlayerId) -> Option<Move> {
        if let Err(err) = self.ensure_can_act(state, player) {
            debug!(%player, %err, "Automated move skipped");
            return None;
        }
        let mv = self.policy.choose(&self.rules, state, player)?;
        match self.rules.apply_move(state, player, mv) {
            Ok(card) => {
                debug!(%player, %mv, %card, policy = self.policy.name(), "Automated move");
                self.check_winner(state);
                Some(mv)
            }
            Err(err) => {
                warn!(%player, %mv, %err, policy = self.policy.name(), "Policy chose an illegal move");
                None
            }
        }
    }

    /// Record a win if either seat has one. Once set the outcome sticks.
    pub fn check_winner(&self, state: &mut GameState) -> Option<PlayerId> {
        if let Outcome::Won(winner) = state.outcome {
            return Some(winner);
        }
        let winner = self.rules.winner(state)?;
        state.outcome = Outcome::Won(winner);
        info!(
            %winner,
            name = %state.player(winner).name,
            turn = state.turn_number,
            "Game won"
        );
        Some(winner)
    }

    /// A whole human turn: play, draw back up, pass the turn on.
    pub fn take_turn(
        &self,
        state: &mut GameState,
        hand_index: usize,
        caravan_index: usize,
    ) -> Result<Card, MoveError> {
        let player = state.active_player;
        let card = self.play_card(state, player, hand_index, caravan_index)?;
        self.draw_card(state, player)?;
        if !state.is_over() {
            self.switch_turn(state);
        }
        Ok(card)
    }

    /// A whole automated turn for the active seat: move (or pass), draw
    /// after a move, pass the turn on.
    pub fn ai_turn(&self, state: &mut GameState) -> Option<Move> {
        if state.is_over() {
            return None;
        }
        let player = state.active_player;
        let mv = self.ai_decide_and_apply(state, player);
        match mv {
            Some(_) => {
                if let Err(err) = self.draw_card(state, player) {
                    warn!(%player, %err, "Draw after automated move failed");
                }
            }
            None => {
                debug!(%player, "Automated seat passes");
                state.record(player, Action::Pass);
            }
        }
        if !state.is_over() {
            self.switch_turn(state);
        }
        mv
    }

    /// Whether the seat to act is driven by the automated opponent.
    #[must_use]
    pub fn is_automated_turn(&self, state: &GameState) -> bool {
        !state.is_over() && state.active().is_automated
    }

    fn ensure_can_act(&self, state: &GameState, player: PlayerId) -> Result<(), MoveError> {
        if state.is_over() {
            return Err(MoveError::GameOver);
        }
        if player != state.active_player {
            return Err(MoveError::NotYourTurn { player });
        }
        Ok(())
    }
}
