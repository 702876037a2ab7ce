//! Rules engine.
//!
//! - Which moves are legal
//! - How a move changes the state
//! - When a seat has won

pub mod engine;

pub use engine::{CaravanRules, RulesEngine};
