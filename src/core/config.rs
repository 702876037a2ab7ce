//! Table configuration.
//!
//! `GameConfig` carries every constant the rules read. The defaults are the
//! standard Caravan table: eight-card hands, three caravans per seat, a
//! caravan sells between 21 and 26, two sold caravans win.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Table configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Maximum cards a hand may hold. Draws past this are no-ops.
    pub hand_capacity: usize,

    /// Caravans per seat.
    pub caravan_count: usize,

    /// Lowest total at which a caravan is sold.
    pub sold_min: u32,

    /// Highest total at which a caravan is sold.
    pub sold_max: u32,

    /// Sold caravans needed to win.
    pub caravans_to_win: usize,

    /// Shuffle seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Seat driven by the automated opponent, if any.
    pub automated_seat: Option<PlayerId>,

    /// Display names, indexed by seat.
    pub player_names: [String; 2],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_capacity: 8,
            caravan_count: 3,
            sold_min: 21,
            sold_max: 26,
            caravans_to_win: 2,
            seed: None,
            automated_seat: Some(PlayerId::SECOND),
            player_names: ["Player1".to_string(), "Player2".to_string()],
        }
    }
}

impl GameConfig {
    /// Use a fixed shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Choose which seat the automated opponent drives (`None` for two humans).
    pub fn with_automated_seat(mut self, seat: Option<PlayerId>) -> Self {
        self.automated_seat = seat;
        self
    }

    /// Rename both seats.
    pub fn with_player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.player_names = [first.into(), second.into()];
        self
    }

    /// Change the hand capacity.
    pub fn with_hand_capacity(mut self, capacity: usize) -> Self {
        self.hand_capacity = capacity;
        self
    }

    /// Check whether a caravan total lies in the sold range.
    #[must_use]
    pub fn is_sold_total(&self, total: u32) -> bool {
        (self.sold_min..=self.sold_max).contains(&total)
    }
}
