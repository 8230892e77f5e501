//! Board Enumerator (C4): the flop → turn → river pipeline that produces the
//! solver's candidate set. Each stage is a plain iteration over the cards
//! remaining after hole cards (and, at later stages, prior board cards) are
//! removed; there is no implicit deduplication, so the flop triple
//! `{A,B,C}` appears exactly once because `ChooseThree` enumerates unordered
//! combinations.

use crate::board::Board as CandidateBoard;
use crate::cards::Card;
use crate::cardset::CardSet;
use crate::combinatorics::ChooseThree;
use crate::deck::Deck;
use crate::hole::HoleCards;
use crate::phase::validate_phase;

/// The three per-phase expected orderings, each a permutation of `[1,2,3]`.
#[derive(Debug, Clone, Copy)]
pub struct Orderings {
    pub flop: [u8; 3],
    pub turn: [u8; 3],
    pub river: [u8; 3],
}

/// Enumerate every complete board consistent with `hole` and `orderings`.
/// The returned list's order is the enumeration order and is stable across
/// runs for the same input: `solve()` in the façade is a thin wrapper over
/// this function.
pub fn enumerate(hole: &[HoleCards; 3], orderings: Orderings) -> Vec<CandidateBoard> {
    let dead: Vec<Card> = hole.iter().flat_map(|h| h.as_array()).collect();
    let deck = Deck::remaining(&dead);
    debug_assert_eq!(deck.len(), 46);

    let mut results = Vec::new();

    for flop_idx in ChooseThree::new(deck.len()) {
        let flop = [deck[flop_idx[0]], deck[flop_idx[1]], deck[flop_idx[2]]];
        let flop_result = validate_phase(hole, &flop, orderings.flop, CardSet::empty(), false);
        if !flop_result.accepted {
            continue;
        }

        for (turn_i, &turn) in deck.iter().enumerate() {
            if flop_idx.contains(&turn_i) {
                continue;
            }
            let board4 = [flop[0], flop[1], flop[2], turn];
            let turn_result = validate_phase(hole, &board4, orderings.turn, flop_result.used_after, false);
            if !turn_result.accepted {
                continue;
            }

            for (river_i, &river) in deck.iter().enumerate() {
                if flop_idx.contains(&river_i) || river_i == turn_i {
                    continue;
                }
                let board5 = [flop[0], flop[1], flop[2], turn, river];
                let river_result =
                    validate_phase(hole, &board5, orderings.river, turn_result.used_after, true);
                if river_result.accepted {
                    results.push(CandidateBoard::new(flop, turn, river));
                }
            }
        }
    }

    results
}
