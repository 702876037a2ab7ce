//! # caravan-engine
//!
//! Rule engine for Caravan, a two-player card game. Each seat builds up to
//! three caravans (ordered card stacks) toward a total between 21 and 26
//! using numeric cards, while Jack, Queen, King and Joker rewrite a
//! caravan's contents instead of adding to it.
//!
//! ## Design Principles
//!
//! 1. **Derived, not stored**: a caravan's total and trend are recomputed
//!    from its cards on every read.
//!
//! 2. **All-or-nothing moves**: a rejected move leaves the state untouched
//!    and reports a `MoveError`.
//!
//! 3. **Explicit state**: no globals. Every call takes the `GameState`
//!    it acts on.
//!
//! ## Modules
//!
//! - `core`: seats, RNG, configuration, errors, moves, state
//! - `cards`: cards, decks, hands
//! - `caravan`: caravan stacks and trend derivation
//! - `effects`: how each rank acts on a caravan
//! - `rules`: `RulesEngine` trait and the standard rules
//! - `ai`: move-selection policies for the automated seat
//! - `games`: the `CaravanGame` call surface a front end drives
//!
//! ## Example
//!
//! ```
//! use caravan_engine::{CaravanGameBuilder, PlayerId};
//!
//! let (game, mut state) = CaravanGameBuilder::new().seed(42).build();
//!
//! // Human seat: play its first card onto caravan 0 if that is legal.
//! if game.take_turn(&mut state, 0, 0).is_ok() {
//!     assert_eq!(state.active_player, PlayerId::SECOND);
//!     assert!(game.is_automated_turn(&state));
//!     game.ai_turn(&mut state);
//! }
//! ```

pub mod ai;
pub mod caravan;
pub mod cards;
pub mod core;
pub mod effects;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, GameConfig, GameRng, GameState, IndexKind, Move, MoveError, Outcome,
    Player, PlayerId, PlayerMap,
};

pub use crate::cards::{Card, CardId, Deck, DrawOutcome, Hand, Rank, Suit};

pub use crate::caravan::{Caravan, Trend};

pub use crate::effects::{CardEffect, SpecialEffect};

pub use crate::rules::{CaravanRules, RulesEngine};

pub use crate::ai::{FirstLegal, GreedyConfig, GreedyPolicy, MovePolicy};

pub use crate::games::{CaravanGame, CaravanGameBuilder};
