use crate::cards::{Card, Suit};

/// Whether a 5-card hand is monochrome. Shared by `evaluate_five` for the
/// Flush/StraightFlush detectors and, transitively, by every phase of Pokle's
/// board evaluation — the flush category is the one place spec.md §4.2 says
/// the decisive cards must *not* be added to a phase's used-cards set, so
/// `detector.rs` checks `is_flush` before trimming `Evaluation::best_five`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub is_flush: bool,
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    /// A hand is a flush iff every card's suit matches the first card's suit.
    pub fn detect(cards: &[Card; 5]) -> Self {
        let anchor = cards[0].suit();
        match cards.iter().find(|c| c.suit() != anchor) {
            Some(_) => SuitInfo { is_flush: false, flush_suit: None },
            None => SuitInfo { is_flush: true, flush_suit: Some(anchor) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    fn spades(ranks: [Rank; 5]) -> [Card; 5] {
        ranks.map(|r| Card::new(r, Suit::Spades))
    }

    #[test]
    fn five_spades_is_a_flush() {
        let cards = spades([Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]);
        let info = SuitInfo::detect(&cards);
        assert!(info.is_flush);
        assert_eq!(info.flush_suit, Some(Suit::Spades));
    }

    #[test]
    fn one_off_suit_card_breaks_the_flush() {
        let mut cards = spades([Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]);
        cards[1] = Card::new(Rank::King, Suit::Hearts);
        let info = SuitInfo::detect(&cards);
        assert!(!info.is_flush);
        assert_eq!(info.flush_suit, None);
    }

    #[test]
    fn low_clubs_is_still_a_flush() {
        let cards = [
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Three, Suit::Clubs),
            Card::new(Rank::Four, Suit::Clubs),
            Card::new(Rank::Five, Suit::Clubs),
            Card::new(Rank::Seven, Suit::Clubs),
        ];
        let info = SuitInfo::detect(&cards);
        assert!(info.is_flush);
        assert_eq!(info.flush_suit, Some(Suit::Clubs));
    }
}
