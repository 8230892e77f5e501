use crate::cards::{parse_cards, Card};
use crate::cardset::CardSet;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HoleError {
    #[error("duplicate cards in hole pair")]
    DuplicateHoleCards,
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// One player's two private hole cards. Pokle deals three of these, one per
/// seat; this type models a single pair and carries no notion of which seat
/// holds it.
///
/// ```
/// use pokle_solver::cards::{Card, Rank, Suit};
/// use pokle_solver::hole::HoleCards;
///
/// let hole = HoleCards::try_new(
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Spades),
/// ).unwrap();
/// assert_eq!(hole.as_array().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCards(Card, Card);

impl HoleCards {
    /// Return the first (left) hole card.
    pub fn first(&self) -> Card {
        self.0
    }

    /// Return the second (right) hole card.
    pub fn second(&self) -> Card {
        self.1
    }

    /// Return both hole cards as a fixed array.
    pub fn as_array(&self) -> [Card; 2] {
        [self.0, self.1]
    }

    pub fn try_new(a: Card, b: Card) -> Result<Self, HoleError> {
        if a == b {
            return Err(HoleError::DuplicateHoleCards);
        }
        Ok(Self(a, b))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HoleError> {
        if slice.len() != 2 {
            return Err(HoleError::HoleCount(slice.len()));
        }
        Self::try_new(slice[0], slice[1])
    }

    /// True if this pair shares a card with `other` (used to check the three
    /// hole pairs are pairwise disjoint at solver construction).
    pub fn overlaps(&self, other: &HoleCards) -> bool {
        CardSet::from_cards(self.as_array()).intersects(CardSet::from_cards(other.as_array()))
    }
}

impl FromStr for HoleCards {
    type Err = HoleError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HoleError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}
