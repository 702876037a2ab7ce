//! Automated opponent.
//!
//! ## Overview
//!
//! The automated seat picks its move through a `MovePolicy`. The engine
//! call is synchronous; any "thinking" delay belongs to the caller.
//!
//! ```rust
//! use caravan_engine::ai::{GreedyPolicy, MovePolicy};
//! use caravan_engine::core::{GameConfig, GameRng, GameState, PlayerId};
//! use caravan_engine::rules::CaravanRules;
//!
//! let config = GameConfig::default().with_seed(1);
//! let rules = CaravanRules::new(config.clone());
//! let state = GameState::deal(&config, &GameRng::new(1));
//!
//! // Any numeric card fits an empty caravan.
//! let mv = GreedyPolicy::default().choose(&rules, &state, PlayerId::SECOND);
//! assert!(mv.is_some());
//! ```

pub mod greedy;
pub mod policy;

pub use greedy::{Decision, GreedyConfig, GreedyPolicy};
pub use policy::{FirstLegal, MovePolicy};
