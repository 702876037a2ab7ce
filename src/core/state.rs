//! Game state: seats, turn, outcome and history.
//!
//! ## Player
//!
//! A seat's name, deck, hand, caravans and whether the automated opponent
//! drives it.
//!
//! ## GameState
//!
//! Both seats plus whose turn it is and whether someone has won. The
//! rules engine is the only writer; callers read it freely and pass it back
//! into every engine call.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::config::GameConfig;
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::caravan::Caravan;
use crate::cards::{Deck, Hand};

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub deck: Deck,
    pub hand: Hand,
    pub caravans: Vec<Caravan>,
    pub is_automated: bool,
}

impl Player {
    /// A seat with an empty hand and empty caravans.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        deck: Deck,
        hand_capacity: usize,
        caravan_count: usize,
        is_automated: bool,
    ) -> Self {
        Self {
            name: name.into(),
            deck,
            hand: Hand::new(hand_capacity),
            caravans: vec![Caravan::new(); caravan_count],
            is_automated,
        }
    }

    #[must_use]
    pub fn caravan(&self, index: usize) -> Option<&Caravan> {
        self.caravans.get(index)
    }

    /// Caravans whose total lies in the sold range.
    #[must_use]
    pub fn sold_count(&self, config: &GameConfig) -> usize {
        self.caravans.iter().filter(|c| c.is_sold(config)).count()
    }

    /// Caravan totals, by index.
    #[must_use]
    pub fn totals(&self) -> Vec<u32> {
        self.caravans.iter().map(Caravan::total).collect()
    }
}

/// Whether the game is still running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    Won(PlayerId),
}

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Both seats.
    pub players: PlayerMap<Player>,

    /// Seat whose turn it is.
    pub active_player: PlayerId,

    /// Set once a win is detected; never cleared except by a new deal.
    pub outcome: Outcome,

    /// Turn number (starts at 1, bumped on every turn switch).
    pub turn_number: u32,

    /// Seed both decks were shuffled from.
    seed: u64,

    history: Vector<ActionRecord>,
}

impl GameState {
    /// Build both decks, deal full hands, and give the first seat the turn.
    #[must_use]
    pub fn deal(config: &GameConfig, rng: &GameRng) -> Self {
        let players = PlayerMap::new(|seat| {
            let deck = Deck::build(seat, &mut rng.for_seat(seat));
            let mut player = Player::new(
                config.player_names[seat.index()].clone(),
                deck,
                config.hand_capacity,
                config.caravan_count,
                config.automated_seat == Some(seat),
            );
            player.hand.fill(&mut player.deck);
            player
        });
        Self::from_players(players, rng.seed())
    }

    /// A fresh game around already-built seats.
    #[must_use]
    pub fn from_players(players: PlayerMap<Player>, seed: u64) -> Self {
        Self {
            players,
            active_player: PlayerId::FIRST,
            outcome: Outcome::InProgress,
            turn_number: 1,
            seed,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    #[must_use]
    pub fn active(&self) -> &Player {
        &self.players[self.active_player]
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.outcome, Outcome::Won(_))
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    // === History ===

    /// Everything that happened this game, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Append an action at the current turn.
    pub fn record(&mut self, player: PlayerId, action: Action) {
        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord {
            player,
            action,
            turn: self.turn_number,
            sequence,
        });
    }
}
