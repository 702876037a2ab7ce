//! Deterministic random number generation for deck shuffles.
//!
//! Every game owns one `GameRng`. Each seat shuffles from its own stream
//! derived from the game seed, so the two decks are independent of each
//! other and of the order in which they are built.
//!
//! ```
//! use caravan_engine::core::{GameRng, PlayerId};
//!
//! let rng = GameRng::new(42);
//! let mut a = rng.for_seat(PlayerId::FIRST);
//! let mut b = GameRng::new(42).for_seat(PlayerId::FIRST);
//!
//! // Same seed and seat reproduce the same stream
//! assert_eq!(a.gen_range_usize(0..1000), b.gen_range_usize(0..1000));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::player::PlayerId;

const SEAT_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seedable ChaCha8 generator.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// The drawn seed is kept so the game can still be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Independent stream for one seat's deck.
    ///
    /// Does not advance `self`.
    #[must_use]
    pub fn for_seat(&self, seat: PlayerId) -> Self {
        let seat_seed = self
            .seed
            .wrapping_add((seat.0 as u64 + 1).wrapping_mul(SEAT_STRIDE));
        Self::new(seat_seed)
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place (Fisher-Yates, uniform over permutations).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_usize(0..1000), rng2.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_seats_produce_different_streams() {
        let rng = GameRng::new(42);
        let mut first = rng.for_seat(PlayerId::FIRST);
        let mut second = rng.for_seat(PlayerId::SECOND);

        let seq1: Vec<_> = (0..10).map(|_| first.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| second.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_seat_stream_is_deterministic() {
        let a = GameRng::new(7).for_seat(PlayerId::SECOND);
        let b = GameRng::new(7).for_seat(PlayerId::SECOND);
        assert_eq!(a.seed(), b.seed());
    }

    #[test]
    fn test_entropy_seed_is_recorded() {
        let rng = GameRng::from_entropy();
        let mut replay = GameRng::new(rng.seed());
        let mut original = rng.clone();
        assert_eq!(original.gen_range_usize(0..1000), replay.gen_range_usize(0..1000));
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        assert_ne!(data, original);
        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_shuffle_is_uniform() {
        // 6 permutations of 3 elements, 6000 trials: expect ~1000 each.
        let mut rng = GameRng::new(2024);
        let mut counts = std::collections::HashMap::new();

        for _ in 0..6000 {
            let mut data = [0u8, 1, 2];
            rng.shuffle(&mut data);
            *counts.entry(data).or_insert(0u32) += 1;
        }

        assert_eq!(counts.len(), 6);
        for (perm, count) in counts {
            assert!((850..=1150).contains(&count), "{perm:?} seen {count} times");
        }
    }
}
