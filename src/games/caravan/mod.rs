//! Caravan table orchestration.
//!
//! Two seats, each with a 54-card deck, an eight-card hand and three
//! caravans. On your turn you play one card onto one of your own caravans,
//! then draw back up. The first seat with two caravans totalling 21 to 26
//! wins. One seat is usually driven by the automated opponent.

mod game;

pub use game::{CaravanGame, CaravanGameBuilder};
