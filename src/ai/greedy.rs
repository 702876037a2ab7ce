//! Greedy heuristic opponent.
//!
//! Every legal (card, caravan) pair on an unsold caravan is simulated on a
//! scratch copy. A pair that sells its caravan is taken immediately.
//! Otherwise pairs are scored by the simulated total, less a penalty when
//! the caravan was already crowded, and the best score not above the sold
//! ceiling wins. Ties go to the first pair in (hand, caravan) order.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::policy::MovePolicy;
use crate::core::{GameState, Move, PlayerId};
use crate::effects::preview_play;
use crate::rules::RulesEngine;

/// Greedy scoring parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreedyConfig {
    /// Pre-move total at or above which a caravan counts as crowded.
    pub crowded_threshold: u32,

    /// Subtracted from the score of moves onto crowded caravans.
    /// Pushes the opponent to develop its other caravans.
    pub crowded_penalty: u32,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self {
            crowded_threshold: 18,
            crowded_penalty: 5,
        }
    }
}

impl GreedyConfig {
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.crowded_threshold = threshold;
        self
    }

    pub fn with_penalty(mut self, penalty: u32) -> Self {
        self.crowded_penalty = penalty;
        self
    }
}

/// A scored candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    pub mv: Move,
    /// Caravan total after the simulated move.
    pub simulated_total: u32,
    /// `simulated_total` less any crowding penalty.
    pub adjusted_score: i64,
    /// The move lands the caravan in the sold range.
    pub sells: bool,
}

/// Greedy move selection.
#[derive(Clone, Debug, Default)]
pub struct GreedyPolicy {
    config: GreedyConfig,
}

impl GreedyPolicy {
    #[must_use]
    pub fn new(config: GreedyConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &GreedyConfig {
        &self.config
    }

    /// Scan every candidate and return the chosen one with its score.
    #[must_use]
    pub fn evaluate(&self, rules: &dyn RulesEngine, state: &GameState, player: PlayerId) -> Option<Decision> {
        if !player.is_valid() {
            return None;
        }
        let table = rules.config();
        let ceiling = i64::from(table.sold_max);
        let seat = state.player(player);

        let mut best: Option<Decision> = None;
        let mut best_score: i64 = -1;

        for (hand_index, card) in seat.hand.iter().enumerate() {
            for (caravan_index, caravan) in seat.caravans.iter().enumerate() {
                if caravan.is_sold(table) {
                    continue;
                }
                let Ok(simulated) = preview_play(card, caravan) else {
                    continue;
                };

                let current = caravan.total();
                let simulated_total = simulated.total();
                let mv = Move::new(hand_index, caravan_index);

                if table.is_sold_total(simulated_total) {
                    trace!(%player, %mv, simulated_total, "Selling move found");
                    return Some(Decision {
                        mv,
                        simulated_total,
                        adjusted_score: i64::from(simulated_total),
                        sells: true,
                    });
                }

                let penalty = if current >= self.config.crowded_threshold {
                    self.config.crowded_penalty
                } else {
                    0
                };
                let adjusted_score = i64::from(simulated_total) - i64::from(penalty);
                trace!(%player, %mv, simulated_total, adjusted_score, "Candidate scored");

                if adjusted_score <= ceiling && adjusted_score > best_score {
                    best_score = adjusted_score;
                    best = Some(Decision {
                        mv,
                        simulated_total,
                        adjusted_score,
                        sells: false,
                    });
                }
            }

            if best_score == ceiling {
                break;
            }
        }

        best
    }
}

impl MovePolicy for GreedyPolicy {
    fn choose(&self, rules: &dyn RulesEngine, state: &GameState, player: PlayerId) -> Option<Move> {
        self.evaluate(rules, state, player).map(|d| d.mv)
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caravan::Caravan;
    use crate::cards::{Card, CardId, Deck, Hand, Rank, Suit};
    use crate::core::{Player, PlayerMap};
    use crate::rules::CaravanRules;

    fn card(id: u32, rank: Rank) -> Card {
        Card::new(CardId::new(id), rank, Suit::Diamonds, PlayerId::SECOND)
    }

    fn num_caravan(values: &[u8]) -> Caravan {
        Caravan::from_cards(
            values
                .iter()
                .enumerate()
                .map(|(i, &v)| card(200 + i as u32, Rank::Numeric(v)))
                .collect(),
        )
    }

    fn seat_state(hand: &[Rank], caravans: [&[u8]; 3]) -> GameState {
        let players = PlayerMap::new(|seat| {
            let mut p = Player::new("p", Deck::from_cards(seat, vec![]), 8, 3, true);
            if seat == PlayerId::SECOND {
                p.hand = Hand::from_cards(
                    8,
                    hand.iter().enumerate().map(|(i, &r)| card(i as u32, r)),
                );
                p.caravans = caravans.iter().map(|v| num_caravan(v)).collect();
            }
            p
        });
        GameState::from_players(players, 0)
    }

    #[test]
    fn test_prefers_highest_total() {
        let rules = CaravanRules::default();
        // 2 on [10, 5] reaches 17; 6 cannot follow a descending 5.
        let state = seat_state(
            &[Rank::Numeric(2), Rank::Numeric(6)],
            [&[4], &[10, 5], &[]],
        );

        let decision = GreedyPolicy::default()
            .evaluate(&rules, &state, PlayerId::SECOND)
            .unwrap();

        assert_eq!(decision.mv, Move::new(0, 1));
        assert_eq!(decision.simulated_total, 17);
        assert_eq!(decision.adjusted_score, 17);
        assert!(!decision.sells);
    }

    #[test]
    fn test_first_seller_wins_scan() {
        let rules = CaravanRules::default();
        let state = seat_state(
            &[Rank::Numeric(3), Rank::Numeric(6)],
            [&[10, 9], &[10, 8], &[]],
        );

        let decision = GreedyPolicy::default()
            .evaluate(&rules, &state, PlayerId::SECOND)
            .unwrap();

        assert_eq!(decision.mv, Move::new(0, 0));
        assert_eq!(decision.simulated_total, 22);
        assert!(decision.sells);
    }

    #[test]
    fn test_crowded_penalty_redirects() {
        let rules = CaravanRules::default();
        // 2 on [10, 8] -> 20, crowded so adjusted 15; 2 on [9] -> 11.
        let state = seat_state(&[Rank::Numeric(2)], [&[10, 8], &[9], &[]]);
        let decision = GreedyPolicy::default()
            .evaluate(&rules, &state, PlayerId::SECOND)
            .unwrap();
        assert_eq!(decision.mv, Move::new(0, 0));
        assert_eq!(decision.adjusted_score, 15);

        // With a bigger penalty the un-crowded caravan wins.
        let harsh = GreedyPolicy::new(GreedyConfig::default().with_penalty(10));
        let decision = harsh.evaluate(&rules, &state, PlayerId::SECOND).unwrap();
        assert_eq!(decision.mv, Move::new(0, 1));
        assert_eq!(decision.simulated_total, 11);
    }

    #[test]
    fn test_ties_go_to_first_pair() {
        let rules = CaravanRules::default();
        let state = seat_state(&[Rank::Numeric(4), Rank::Numeric(4)], [&[], &[], &[]]);
        let decision = GreedyPolicy::default()
            .evaluate(&rules, &state, PlayerId::SECOND)
            .unwrap();
        assert_eq!(decision.mv, Move::new(0, 0));
    }

    #[test]
    fn test_never_targets_sold_caravan() {
        let rules = CaravanRules::default();
        let state = seat_state(&[Rank::Joker, Rank::Jack], [&[10, 9, 3], &[10, 9, 7], &[]]);
        assert_eq!(
            GreedyPolicy::default().evaluate(&rules, &state, PlayerId::SECOND),
            None
        );
    }

    #[test]
    fn test_passes_with_no_legal_move() {
        let rules = CaravanRules::default();
        let state = seat_state(&[], [&[], &[], &[]]);
        assert_eq!(GreedyPolicy::default().choose(&rules, &state, PlayerId::SECOND), None);
    }
}
