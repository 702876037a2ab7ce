//! Card values.
//!
//! A card's rank is a closed sum type: either a numeric pip value in
//! `1..=10` or one of the four special ranks. Rule dispatch matches on it
//! exhaustively.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Identity of a physical card, unique across both decks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Set on the ids of King copies. Deck ids never reach it.
    pub const KING_COPY_BIT: u32 = 1 << 31;

    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Identity of the copy appended by the King `king`.
    #[must_use]
    pub const fn king_copy_of(king: CardId) -> Self {
        Self(king.0 | Self::KING_COPY_BIT)
    }
}

/// Card rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Pip card, value `1..=10`.
    Numeric(u8),
    Jack,
    Queen,
    King,
    Joker,
}

impl Rank {
    pub const MIN_NUMERIC: u8 = 1;
    pub const MAX_NUMERIC: u8 = 10;

    /// Build a numeric rank, `None` outside `1..=10`.
    #[must_use]
    pub fn numeric(value: u8) -> Option<Self> {
        (Self::MIN_NUMERIC..=Self::MAX_NUMERIC)
            .contains(&value)
            .then_some(Rank::Numeric(value))
    }

    /// All ten numeric ranks, ascending.
    pub fn numerics() -> impl Iterator<Item = Rank> {
        (Self::MIN_NUMERIC..=Self::MAX_NUMERIC).map(Rank::Numeric)
    }

    /// Pip value, or `None` for special ranks.
    #[must_use]
    pub const fn pip(self) -> Option<u8> {
        match self {
            Rank::Numeric(v) => Some(v),
            Rank::Jack | Rank::Queen | Rank::King | Rank::Joker => None,
        }
    }

    /// Direct contribution to a caravan total. Specials contribute nothing.
    #[must_use]
    pub const fn contribution(self) -> u32 {
        match self {
            Rank::Numeric(v) => v as u32,
            Rank::Jack | Rank::Queen | Rank::King | Rank::Joker => 0,
        }
    }

    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Rank::Numeric(_))
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Numeric(v) => write!(f, "{v}"),
            Rank::Jack => write!(f, "Jack"),
            Rank::Queen => write!(f, "Queen"),
            Rank::King => write!(f, "King"),
            Rank::Joker => write!(f, "Joker"),
        }
    }
}

/// Card suit. Jokers have none.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        };
        f.write_str(name)
    }
}

/// A card. Immutable once built.
///
/// `provenance` records whose deck the card came from. It is cosmetic and
/// never consulted by the rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    rank: Rank,
    suit: Option<Suit>,
    provenance: PlayerId,
    king_copy: bool,
}

impl Card {
    /// Create a suited card.
    #[must_use]
    pub fn new(id: CardId, rank: Rank, suit: Suit, provenance: PlayerId) -> Self {
        Self {
            id,
            rank,
            suit: Some(suit),
            provenance,
            king_copy: false,
        }
    }

    /// Create a Joker.
    #[must_use]
    pub fn joker(id: CardId, provenance: PlayerId) -> Self {
        Self {
            id,
            rank: Rank::Joker,
            suit: None,
            provenance,
            king_copy: false,
        }
    }

    /// The entry the King `king` appends: same rank, suit and provenance as
    /// `self`, with an id derived from the King so no two cards in play
    /// share one.
    #[must_use]
    pub fn king_copy(&self, king: CardId) -> Self {
        Self {
            id: CardId::king_copy_of(king),
            king_copy: true,
            ..*self
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub fn suit(&self) -> Option<Suit> {
        self.suit
    }

    #[must_use]
    pub fn provenance(&self) -> PlayerId {
        self.provenance
    }

    #[must_use]
    pub fn is_king_copy(&self) -> bool {
        self.king_copy
    }

    /// Pip value, or `None` for special cards.
    #[must_use]
    pub fn pip(&self) -> Option<u8> {
        self.rank.pip()
    }

    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.rank.is_numeric()
    }

    #[must_use]
    pub fn is_special(&self) -> bool {
        !self.rank.is_numeric()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.suit {
            Some(suit) => write!(f, "{} of {} ({})", self.rank, suit, self.provenance),
            None => write!(f, "{} ({})", self.rank, self.provenance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_bounds() {
        assert_eq!(Rank::numeric(0), None);
        assert_eq!(Rank::numeric(1), Some(Rank::Numeric(1)));
        assert_eq!(Rank::numeric(10), Some(Rank::Numeric(10)));
        assert_eq!(Rank::numeric(11), None);
        assert_eq!(Rank::numerics().count(), 10);
    }

    #[test]
    fn test_contribution() {
        assert_eq!(Rank::Numeric(7).contribution(), 7);
        for special in [Rank::Jack, Rank::Queen, Rank::King, Rank::Joker] {
            assert_eq!(special.contribution(), 0);
            assert_eq!(special.pip(), None);
        }
    }

    #[test]
    fn test_king_copy_keeps_face() {
        let five = Card::new(CardId::new(4), Rank::Numeric(5), Suit::Clubs, PlayerId::FIRST);
        let copy = five.king_copy(CardId::new(12));

        assert_eq!(copy.id(), CardId::king_copy_of(CardId::new(12)));
        assert_ne!(copy.id(), five.id());
        assert_eq!(copy.rank(), five.rank());
        assert_eq!(copy.suit(), Some(Suit::Clubs));
        assert_eq!(copy.provenance(), PlayerId::FIRST);
        assert!(copy.is_king_copy());
        assert!(!five.is_king_copy());
    }

    #[test]
    fn test_display() {
        let seven = Card::new(CardId::new(6), Rank::Numeric(7), Suit::Hearts, PlayerId::SECOND);
        assert_eq!(seven.to_string(), "7 of Hearts (Player 1)");

        let joker = Card::joker(CardId::new(52), PlayerId::FIRST);
        assert_eq!(joker.to_string(), "Joker (Player 0)");
        assert!(joker.is_special());
    }
}
