//! Per-phase validation: evaluate all three players against a partial board,
//! reject ties, accumulate the "cards used" set, and check the board against
//! the expected strength ordering.

use crate::cards::Card;
use crate::cardset::CardSet;
use crate::evaluator::{evaluate_best, Category, Evaluation};
use crate::hole::HoleCards;

/// The three Pokle seats, in the fixed order used for orderings.
pub const PLAYERS: [usize; 3] = [0, 1, 2];

/// Outcome of validating one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseResult {
    pub accepted: bool,
    pub used_after: CardSet,
}

/// Evaluate all three hole pairs against `board`, reject ties, accumulate the
/// cards-used set (flush hands excluded), and compare the resulting strength
/// order against `expected_order` (a permutation of `[1,2,3]`, strongest
/// first). `validate_all_used` is set only at the river.
pub fn validate_phase(
    hole: &[HoleCards; 3],
    board: &[Card],
    expected_order: [u8; 3],
    prior_used: CardSet,
    validate_all_used: bool,
) -> PhaseResult {
    let evals: [Evaluation; 3] = std::array::from_fn(|i| {
        let mut cards: Vec<Card> = hole[i].as_array().to_vec();
        cards.extend_from_slice(board);
        evaluate_best(&cards)
    });

    for a in 0..3 {
        for b in (a + 1)..3 {
            if evals[a] == evals[b] {
                return PhaseResult { accepted: false, used_after: prior_used };
            }
        }
    }

    let mut phase_used = CardSet::empty();
    for eval in &evals {
        if eval.category != Category::Flush {
            for &c in &eval.best_five {
                phase_used.insert(c);
            }
        }
    }

    let mut used = prior_used.union(phase_used);
    for h in hole {
        used.remove(h.first());
        used.remove(h.second());
    }

    if validate_all_used {
        let board_set = CardSet::from_cards(board.iter().copied());
        if used != board_set {
            return PhaseResult { accepted: false, used_after: used };
        }
    }

    let mut order: Vec<usize> = (0..3).collect();
    order.sort_by(|&a, &b| evals[b].cmp(&evals[a]));
    let actual: [u8; 3] = [order[0] as u8 + 1, order[1] as u8 + 1, order[2] as u8 + 1];

    PhaseResult { accepted: actual == expected_order, used_after: used }
}
