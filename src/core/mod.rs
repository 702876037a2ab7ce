//! Core types: seats, RNG, configuration, errors, moves and state.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord, Move};
pub use config::GameConfig;
pub use error::{DeckExhausted, HandError, IndexKind, MoveError};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use state::{GameState, Outcome, Player};
