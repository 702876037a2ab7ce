//! Automated opponent tests.
//!
//! These verify the greedy policy's scan:
//! - Sold caravans are never targeted
//! - A selling move is taken at once
//! - Ties resolve to the first (hand, caravan) pair
//! - The policy never mutates the state it inspects

mod common;

use caravan_engine::ai::{FirstLegal, GreedyConfig, GreedyPolicy, MovePolicy};
use caravan_engine::cards::Rank;
use caravan_engine::core::{GameConfig, GameRng, GameState, Move, PlayerId};
use caravan_engine::rules::{CaravanRules, RulesEngine};
use proptest::prelude::*;

use common::{init_logging, staged_state};

const AI: PlayerId = PlayerId::SECOND;

/// Every caravan but one is sold; only the open one can be chosen.
#[test]
fn test_skips_sold_caravans() {
    init_logging();
    let rules = CaravanRules::default();
    let state = staged_state(
        AI,
        &[Rank::Numeric(1), Rank::Jack, Rank::Joker],
        [&[10, 9, 2], &[4], &[10, 9, 7]],
    );

    let decision = GreedyPolicy::default().evaluate(&rules, &state, AI).unwrap();
    assert_eq!(decision.mv.caravan_index, 1);
}

/// A selling move beats a higher-scoring non-selling one found later.
#[test]
fn test_selling_move_wins() {
    let rules = CaravanRules::default();
    // Hand 0 (a 2) sells caravan 0 at 21. Hand 1 (a 10) would reach 20 elsewhere.
    let state = staged_state(
        AI,
        &[Rank::Numeric(2), Rank::Numeric(10)],
        [&[10, 9], &[1, 9], &[]],
    );

    let decision = GreedyPolicy::default().evaluate(&rules, &state, AI).unwrap();
    assert_eq!(decision.mv, Move::new(0, 0));
    assert!(decision.sells);
    assert_eq!(decision.simulated_total, 21);
}

/// Equal scores go to the first pair encountered.
#[test]
fn test_tie_break_is_scan_order() {
    let rules = CaravanRules::default();
    // A 7 on either [2] reaches 9; the first pair found is kept.
    let state = staged_state(
        AI,
        &[Rank::Numeric(7), Rank::Numeric(7)],
        [&[2], &[2], &[]],
    );

    let chosen = GreedyPolicy::default().choose(&rules, &state, AI);
    assert_eq!(chosen, Some(Move::new(0, 0)));
}

/// Only specials and no numerics on the table means nothing to do.
#[test]
fn test_no_candidates_means_pass() {
    let rules = CaravanRules::default();
    let state = staged_state(AI, &[Rank::Jack, Rank::Queen, Rank::King], [&[], &[], &[]]);

    assert_eq!(GreedyPolicy::default().choose(&rules, &state, AI), None);
    assert_eq!(FirstLegal.choose(&rules, &state, AI), None);
}

/// A harsher crowding penalty steers the policy to the emptier caravan.
#[test]
fn test_penalty_configuration() {
    let rules = CaravanRules::default();
    let state = staged_state(AI, &[Rank::Numeric(1)], [&[10, 8], &[3], &[]]);

    let default_choice = GreedyPolicy::default().choose(&rules, &state, AI);
    assert_eq!(default_choice, Some(Move::new(0, 0)));

    let cautious = GreedyPolicy::new(GreedyConfig::default().with_threshold(15).with_penalty(20));
    assert_eq!(cautious.choose(&rules, &state, AI), Some(Move::new(0, 1)));
}

proptest! {
    /// On random deals the greedy choice is always legal, never targets a
    /// sold caravan, and leaves the state untouched.
    #[test]
    fn prop_greedy_choice_is_legal(seed in any::<u64>(), turns in 0usize..30) {
        let config = GameConfig::default().with_seed(seed);
        let rules = CaravanRules::new(config.clone());
        let policy = GreedyPolicy::default();
        let mut state = GameState::deal(&config, &GameRng::new(seed));

        // Let both seats play greedily for a while to reach varied positions.
        for _ in 0..turns {
            let player = state.active_player;
            if let Some(mv) = policy.choose(&rules, &state, player) {
                rules.apply_move(&mut state, player, mv).unwrap();
                let seat = state.player_mut(player);
                seat.hand.draw(&mut seat.deck);
            }
            state.active_player = player.opponent();
            if rules.winner(&state).is_some() {
                break;
            }
        }

        let before = state.clone();
        if let Some(mv) = policy.choose(&rules, &state, AI) {
            prop_assert_eq!(&state, &before);
            prop_assert!(rules.check_move(&state, AI, mv).is_ok());
            let target = &state.player(AI).caravans[mv.caravan_index];
            prop_assert!(!target.is_sold(rules.config()));
        }
    }
}
