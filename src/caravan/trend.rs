//! Caravan direction.
//!
//! A caravan's trend is never declared. It is read off the two most recent
//! numeric entries in stack order, so it changes whenever Jack, Queen,
//! King or Joker rearrange the stack.

use serde::{Deserialize, Serialize};

/// Direction a caravan's numeric entries are moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trend {
    Ascending,
    Descending,
    /// Fewer than two numeric entries, or the last two are equal.
    Undetermined,
}

impl Trend {
    /// Trend implied by `prior` followed by `recent`.
    #[must_use]
    pub fn between(prior: u8, recent: u8) -> Self {
        match recent.cmp(&prior) {
            std::cmp::Ordering::Greater => Trend::Ascending,
            std::cmp::Ordering::Less => Trend::Descending,
            std::cmp::Ordering::Equal => Trend::Undetermined,
        }
    }

    /// Trend of a numeric sequence given in stack order.
    #[must_use]
    pub fn of_sequence<I>(values: I) -> Self
    where
        I: IntoIterator<Item = u8>,
        I::IntoIter: DoubleEndedIterator,
    {
        let mut newest_first = values.into_iter().rev();
        match (newest_first.next(), newest_first.next()) {
            (Some(recent), Some(prior)) => Self::between(prior, recent),
            _ => Trend::Undetermined,
        }
    }

    /// Whether `next` may follow `last` under this trend.
    #[must_use]
    pub fn admits(self, last: u8, next: u8) -> bool {
        match self {
            Trend::Ascending => next > last,
            Trend::Descending => next < last,
            Trend::Undetermined => true,
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Ascending => write!(f, "ascending"),
            Trend::Descending => write!(f, "descending"),
            Trend::Undetermined => write!(f, "undetermined"),
        }
    }
}
