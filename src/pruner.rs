//! Pruner (C7): filters the candidate set to boards consistent with the
//! observed feedback against the last suggested board.

use crate::board::Board;
use crate::comparator::{compare, encode, Color};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PruneError {
    #[error("no candidate produces the observed color feedback")]
    InconsistentFeedback,
}

/// Retain only the boards in `candidates` that would produce `colors` when
/// compared against `last_guess`. Idempotent under all-green feedback: if
/// `last_guess` is itself a member of `candidates`, the result is exactly
/// `{last_guess}`.
pub fn prune(
    candidates: &[Board],
    last_guess: &Board,
    colors: [Color; 5],
) -> Result<Vec<Board>, PruneError> {
    let target = encode(colors);
    let retained: Vec<Board> =
        candidates.iter().copied().filter(|a| compare(last_guess, a) == target).collect();

    if retained.is_empty() {
        return Err(PruneError::InconsistentFeedback);
    }

    Ok(retained)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};

    fn c(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    fn board(flop: [Card; 3], turn: Card, river: Card) -> Board {
        Board::new(flop, turn, river)
    }

    #[test]
    fn all_green_feedback_shrinks_to_singleton() {
        let guess = board(
            [c(Rank::Two, Suit::Clubs), c(Rank::Three, Suit::Diamonds), c(Rank::Four, Suit::Hearts)],
            c(Rank::Five, Suit::Spades),
            c(Rank::Six, Suit::Clubs),
        );
        let other = board(
            [c(Rank::Seven, Suit::Clubs), c(Rank::Eight, Suit::Diamonds), c(Rank::Nine, Suit::Hearts)],
            c(Rank::Ten, Suit::Spades),
            c(Rank::Jack, Suit::Clubs),
        );
        let candidates = vec![guess, other];
        let all_green = [Color::Green; 5];
        let result = prune(&candidates, &guess, all_green).unwrap();
        assert_eq!(result, vec![guess]);
    }

    #[test]
    fn inconsistent_feedback_errors_when_nothing_survives() {
        let guess = board(
            [c(Rank::Two, Suit::Clubs), c(Rank::Three, Suit::Diamonds), c(Rank::Four, Suit::Hearts)],
            c(Rank::Five, Suit::Spades),
            c(Rank::Six, Suit::Clubs),
        );
        let candidates = vec![guess];
        // No candidate (other than the guess itself) could produce all-grey
        // against the guess, since comparing a board against itself is
        // always all-green.
        let all_grey = [Color::Grey; 5];
        let err = prune(&candidates, &guess, all_grey).unwrap_err();
        assert_eq!(err, PruneError::InconsistentFeedback);
    }

    #[test]
    fn pruning_never_grows_the_candidate_set() {
        let guess = board(
            [c(Rank::Two, Suit::Clubs), c(Rank::Three, Suit::Diamonds), c(Rank::Four, Suit::Hearts)],
            c(Rank::Five, Suit::Spades),
            c(Rank::Six, Suit::Clubs),
        );
        let other = board(
            [c(Rank::Seven, Suit::Clubs), c(Rank::Eight, Suit::Diamonds), c(Rank::Nine, Suit::Hearts)],
            c(Rank::Ten, Suit::Spades),
            c(Rank::Jack, Suit::Clubs),
        );
        let candidates = vec![guess, other];
        let code = compare(&guess, &guess);
        let colors = crate::comparator::decode(code);
        let result = prune(&candidates, &guess, colors).unwrap();
        assert!(result.len() <= candidates.len());
    }
}
