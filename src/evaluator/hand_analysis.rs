use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::evaluator::{Category, Evaluation, HandValue};

/// Everything a `CategoryDetector` needs about one 5-card hand, computed
/// once up front rather than re-derived per detector. Every candidate board
/// Pokle considers gets run through this exactly once per seat per phase, so
/// this is the per-hand hot path the enumerator's nested loop fans out over.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub sorted_cards: [Card; 5],
    pub ranks: [Rank; 5],
    #[allow(dead_code)]
    pub rank_counts: [u8; 15],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    /// Analyze exactly 5 cards: sort them (rank desc, suit desc as tiebreak
    /// for determinism), tally rank frequencies, then hand the tally and the
    /// sorted ranks off to the three sub-detectors.
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));

        let ranks: [Rank; 5] = std::array::from_fn(|i| sorted_cards[i].rank());

        let mut rank_counts = [0u8; 15];
        for rank in ranks {
            rank_counts[rank.value() as usize] += 1;
        }

        Self {
            rank_groups: RankGroups::from_counts(&rank_counts),
            suit_info: SuitInfo::detect(&sorted_cards),
            straight_info: StraightInfo::detect(&ranks),
            sorted_cards,
            ranks,
            rank_counts,
        }
    }

    /// Package a category, its tiebreaker ranks, and the cards that
    /// decisively realized it (see `Evaluation::best_five`) into a value
    /// the comparator and phase validator can order and consume.
    pub fn build_evaluation(
        &self,
        category: Category,
        tiebreak: [Rank; 5],
        best_five: Vec<Card>,
    ) -> Evaluation {
        Evaluation { category, best_five, value: HandValue::from_parts(category, &tiebreak) }
    }

    /// Cards from the sorted hand matching `rank`, preserving sort order.
    pub fn cards_of_rank(&self, rank: Rank) -> Vec<Card> {
        self.sorted_cards.iter().copied().filter(|c| c.rank() == rank).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn hand(specs: [(Rank, Suit); 5]) -> [Card; 5] {
        specs.map(|(r, s)| Card::new(r, s))
    }

    #[test]
    fn royal_flush_is_both_straight_and_flush() {
        let cards = hand([
            (Rank::Ace, Suit::Spades),
            (Rank::King, Suit::Spades),
            (Rank::Queen, Suit::Spades),
            (Rank::Jack, Suit::Spades),
            (Rank::Ten, Suit::Spades),
        ]);
        let analysis = HandAnalysis::new(&cards);
        assert!(analysis.suit_info.is_flush);
        assert!(analysis.straight_info.is_straight);
        assert_eq!(analysis.straight_info.top_rank, Some(Rank::Ace));
        assert_eq!(analysis.rank_groups.quad(), None);
    }

    #[test]
    fn quads_with_a_kicker() {
        let cards = hand([
            (Rank::Ace, Suit::Spades),
            (Rank::Ace, Suit::Hearts),
            (Rank::Ace, Suit::Diamonds),
            (Rank::Ace, Suit::Clubs),
            (Rank::King, Suit::Spades),
        ]);
        let analysis = HandAnalysis::new(&cards);
        assert_eq!(analysis.rank_groups.quad(), Some(Rank::Ace));
        assert_eq!(analysis.rank_groups.kickers(), vec![Rank::King]);
        assert!(!analysis.suit_info.is_flush);
        assert!(!analysis.straight_info.is_straight);
    }

    #[test]
    fn full_house_kings_over_queens() {
        let cards = hand([
            (Rank::King, Suit::Spades),
            (Rank::King, Suit::Hearts),
            (Rank::King, Suit::Diamonds),
            (Rank::Queen, Suit::Clubs),
            (Rank::Queen, Suit::Spades),
        ]);
        let analysis = HandAnalysis::new(&cards);
        assert!(analysis.rank_groups.has_full_house());
        assert_eq!(analysis.rank_groups.trips(), Some(Rank::King));
        assert_eq!(analysis.rank_groups.pairs(), vec![Rank::Queen]);
    }

    #[test]
    fn flush_is_not_also_a_straight() {
        let cards = hand([
            (Rank::Ace, Suit::Diamonds),
            (Rank::Jack, Suit::Diamonds),
            (Rank::Nine, Suit::Diamonds),
            (Rank::Five, Suit::Diamonds),
            (Rank::Two, Suit::Diamonds),
        ]);
        let analysis = HandAnalysis::new(&cards);
        assert!(analysis.suit_info.is_flush);
        assert_eq!(analysis.suit_info.flush_suit, Some(Suit::Diamonds));
        assert!(!analysis.straight_info.is_straight);
    }

    #[test]
    fn nine_high_straight_off_suit() {
        let cards = hand([
            (Rank::Nine, Suit::Spades),
            (Rank::Eight, Suit::Hearts),
            (Rank::Seven, Suit::Diamonds),
            (Rank::Six, Suit::Clubs),
            (Rank::Five, Suit::Spades),
        ]);
        let analysis = HandAnalysis::new(&cards);
        assert!(analysis.straight_info.is_straight);
        assert_eq!(analysis.straight_info.top_rank, Some(Rank::Nine));
        assert!(!analysis.suit_info.is_flush);
    }

    #[test]
    fn two_pair_aces_and_kings() {
        let cards = hand([
            (Rank::Ace, Suit::Spades),
            (Rank::Ace, Suit::Hearts),
            (Rank::King, Suit::Diamonds),
            (Rank::King, Suit::Clubs),
            (Rank::Queen, Suit::Spades),
        ]);
        let analysis = HandAnalysis::new(&cards);
        assert_eq!(analysis.rank_groups.pairs(), vec![Rank::Ace, Rank::King]);
        assert_eq!(analysis.rank_groups.kickers(), vec![Rank::Queen]);
    }

    #[test]
    fn one_pair_with_ordered_kickers() {
        let cards = hand([
            (Rank::Jack, Suit::Spades),
            (Rank::Jack, Suit::Hearts),
            (Rank::Nine, Suit::Diamonds),
            (Rank::Seven, Suit::Clubs),
            (Rank::Three, Suit::Spades),
        ]);
        let analysis = HandAnalysis::new(&cards);
        assert_eq!(analysis.rank_groups.pairs(), vec![Rank::Jack]);
        assert_eq!(analysis.rank_groups.kickers(), vec![Rank::Nine, Rank::Seven, Rank::Three]);
    }

    #[test]
    fn high_card_has_five_kickers_and_no_groups() {
        let cards = hand([
            (Rank::Ace, Suit::Spades),
            (Rank::King, Suit::Hearts),
            (Rank::Jack, Suit::Diamonds),
            (Rank::Nine, Suit::Clubs),
            (Rank::Seven, Suit::Spades),
        ]);
        let analysis = HandAnalysis::new(&cards);
        assert_eq!(analysis.rank_groups.quad(), None);
        assert_eq!(analysis.rank_groups.trips(), None);
        assert_eq!(analysis.rank_groups.pairs(), vec![]);
        assert_eq!(analysis.rank_groups.kickers().len(), 5);
    }

    #[test]
    fn wheel_straight_ranks_five_high_not_ace_high() {
        let cards = hand([
            (Rank::Ace, Suit::Spades),
            (Rank::Two, Suit::Hearts),
            (Rank::Three, Suit::Diamonds),
            (Rank::Four, Suit::Clubs),
            (Rank::Five, Suit::Spades),
        ]);
        let analysis = HandAnalysis::new(&cards);
        assert!(analysis.straight_info.is_straight);
        assert_eq!(analysis.straight_info.top_rank, Some(Rank::Five));
    }

    #[test]
    fn sorted_cards_are_rank_descending() {
        let cards = hand([
            (Rank::Three, Suit::Spades),
            (Rank::Ace, Suit::Hearts),
            (Rank::Five, Suit::Diamonds),
            (Rank::King, Suit::Clubs),
            (Rank::Nine, Suit::Spades),
        ]);
        let analysis = HandAnalysis::new(&cards);
        let order: Vec<Rank> = analysis.sorted_cards.iter().map(|c| c.rank()).collect();
        assert_eq!(order, vec![Rank::Ace, Rank::King, Rank::Nine, Rank::Five, Rank::Three]);
    }
}
