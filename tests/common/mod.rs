//! Shared helpers for integration tests.

#![allow(dead_code)]

use caravan_engine::caravan::Caravan;
use caravan_engine::cards::{Card, CardId, Deck, Hand, Rank, Suit};
use caravan_engine::core::{GameState, Player, PlayerId, PlayerMap};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test log subscriber once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// A card with a fresh id.
pub fn card(id: u32, rank: Rank) -> Card {
    Card::new(CardId::new(id), rank, Suit::Spades, PlayerId::FIRST)
}

/// A caravan of numeric cards, bottom first.
pub fn caravan(values: &[u8]) -> Caravan {
    Caravan::from_cards(
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| card(500 + i as u32, Rank::Numeric(v)))
            .collect(),
    )
}

/// A game where `seat` holds `hand` and `caravans`; the other seat is empty.
pub fn staged_state(seat: PlayerId, hand: &[Rank], caravans: [&[u8]; 3]) -> GameState {
    let players = PlayerMap::new(|id| {
        let mut p = Player::new(format!("{id}"), Deck::from_cards(id, vec![]), 8, 3, id == PlayerId::SECOND);
        if id == seat {
            p.hand = Hand::from_cards(8, hand.iter().enumerate().map(|(i, &r)| card(i as u32, r)));
            p.caravans = caravans.iter().map(|v| caravan(v)).collect();
        }
        p
    });
    GameState::from_players(players, 0)
}

/// Pip values of a caravan in stack order.
pub fn values(c: &Caravan) -> Vec<u8> {
    c.numeric_values().collect()
}
