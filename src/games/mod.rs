//! Playable tables built on the engine.

pub mod caravan;

pub use caravan::{CaravanGame, CaravanGameBuilder};
