use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::{Category, Evaluation};

/// Padding used in a tiebreak array's unused low slots. `Rank::Two` sorts
/// below every real tiebreaker, so it never perturbs `HandValue::from_parts`'
/// packed comparison.
const PAD: Rank = Rank::Two;

/// One showdown category: knows how to recognize itself in a `HandAnalysis`
/// and, once recognized, how to pack its tiebreakers and trim `best_five`
/// down to the cards that actually decided the category (the phase
/// validator's used-cards accumulator depends on that trim being exact).
pub trait CategoryDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool;
    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation;
}

// Detectors run in this order, highest category first; the first match wins.

pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush && analysis.straight_info.is_straight
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let top_rank = analysis.straight_info.top_rank.unwrap();
        let tiebreak = [top_rank, PAD, PAD, PAD, PAD];
        analysis.build_evaluation(Category::StraightFlush, tiebreak, analysis.sorted_cards.to_vec())
    }
}

pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.quad().is_some()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let quad_rank = analysis.rank_groups.quad().unwrap();
        let kicker = analysis.rank_groups.kickers()[0];
        let tiebreak = [quad_rank, kicker, PAD, PAD, PAD];
        let best_five = analysis.cards_of_rank(quad_rank);
        analysis.build_evaluation(Category::FourOfAKind, tiebreak, best_five)
    }
}

pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.has_full_house()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let trips = analysis.rank_groups.trips().unwrap();
        let pair = analysis.rank_groups.pairs()[0];
        let tiebreak = [trips, pair, PAD, PAD, PAD];
        let mut best_five = analysis.cards_of_rank(trips);
        best_five.extend(analysis.cards_of_rank(pair));
        analysis.build_evaluation(Category::FullHouse, tiebreak, best_five)
    }
}

pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush
    }

    /// Every card ranks a flush, and per spec a flush's `best_five` must
    /// still be reported, but `phase::validate_phase` is the one that skips
    /// folding a flush's cards into the used-cards set — this detector just
    /// reports the category honestly.
    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.build_evaluation(Category::Flush, analysis.ranks, analysis.sorted_cards.to_vec())
    }
}

pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_info.is_straight
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let top_rank = analysis.straight_info.top_rank.unwrap();
        let tiebreak = [top_rank, PAD, PAD, PAD, PAD];
        analysis.build_evaluation(Category::Straight, tiebreak, analysis.sorted_cards.to_vec())
    }
}

pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.trips().is_some() && !analysis.rank_groups.has_full_house()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let trips = analysis.rank_groups.trips().unwrap();
        let kickers = analysis.rank_groups.kickers();
        let tiebreak = [trips, kickers[0], kickers[1], PAD, PAD];
        let best_five = analysis.cards_of_rank(trips);
        analysis.build_evaluation(Category::ThreeOfAKind, tiebreak, best_five)
    }
}

pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pairs().len() == 2
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let pairs = analysis.rank_groups.pairs();
        let kicker = analysis.rank_groups.kickers()[0];
        let tiebreak = [pairs[0], pairs[1], kicker, PAD, PAD];
        let mut best_five = analysis.cards_of_rank(pairs[0]);
        best_five.extend(analysis.cards_of_rank(pairs[1]));
        analysis.build_evaluation(Category::TwoPair, tiebreak, best_five)
    }
}

pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pairs().len() == 1
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        let pair = analysis.rank_groups.pairs()[0];
        let kickers = analysis.rank_groups.kickers();
        let tiebreak = [pair, kickers[0], kickers[1], kickers[2], PAD];
        let best_five = analysis.cards_of_rank(pair);
        analysis.build_evaluation(Category::Pair, tiebreak, best_five)
    }
}

/// Always matches; must stay last in `DETECTORS`.
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        // Only the single top card decisively realizes a high-card hand.
        let best_five = vec![analysis.sorted_cards[0]];
        analysis.build_evaluation(Category::HighCard, analysis.ranks, best_five)
    }
}

pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
