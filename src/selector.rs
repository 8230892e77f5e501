//! Guess Selector (C6): picks the candidate board that maximizes the Shannon
//! entropy of its color-code distribution against the (possibly sampled)
//! remaining answer set.

use crate::board::Board;
use crate::comparator::compare;
use rand::seq::index::sample;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Number of distinct base-3 color codes over five positions (`3^5`).
pub const BIN_COUNT: usize = 243;

#[derive(Debug, Clone, Copy)]
pub struct SelectorConfig {
    pub sampling_threshold: usize,
    pub sample_size: usize,
    pub rng_seed: u64,
}

/// Pick the board in `candidates` that maximizes entropy of `compare(guess,
/// answer)` over `answers`, ties broken by enumeration order. `answers` is
/// sampled down to `config.sample_size` once (shared across all candidate
/// guesses) when it exceeds `config.sampling_threshold`.
pub fn suggest(candidates: &[Board], config: &SelectorConfig) -> Option<Board> {
    if candidates.is_empty() {
        return None;
    }

    let answers: Vec<Board> = if candidates.len() > config.sampling_threshold {
        let mut rng = ChaCha8Rng::seed_from_u64(config.rng_seed);
        let n = candidates.len();
        let k = config.sample_size.min(n);
        sample(&mut rng, n, k).into_iter().map(|i| candidates[i]).collect()
    } else {
        candidates.to_vec()
    };

    let mut best: Option<(usize, f64)> = None;
    for (idx, guess) in candidates.iter().enumerate() {
        let entropy = entropy_for(guess, &answers);
        if best.map_or(true, |(_, best_entropy)| entropy > best_entropy) {
            best = Some((idx, entropy));
        }
    }

    best.map(|(idx, _)| candidates[idx])
}

/// Base-3 color-code distribution of `compare(guess, a)` over `answers`,
/// exposed as a debugging/introspection accessor.
pub fn distribution_for(guess: &Board, answers: &[Board]) -> [u32; BIN_COUNT] {
    let mut histogram = [0u32; BIN_COUNT];
    for answer in answers {
        let code = compare(guess, answer);
        histogram[base10_to_base3(code)] += 1;
    }
    histogram
}

fn entropy_for(guess: &Board, answers: &[Board]) -> f64 {
    let histogram = distribution_for(guess, answers);
    let total = answers.len() as f64;
    if total == 0.0 {
        return 0.0;
    }
    histogram
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Convert the public base-10 digit code into a dense 0..243 bin index.
fn base10_to_base3(code: u32) -> usize {
    let digits = [code / 10000 % 10, code / 1000 % 10, code / 100 % 10, code / 10 % 10, code % 10];
    digits.iter().fold(0usize, |acc, &d| acc * 3 + d as usize)
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self { sampling_threshold: 50, sample_size: 50, rng_seed: 0x504F_4B4C_45u64 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};

    fn c(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    fn board(n: u8) -> Board {
        // Distinct synthetic boards keyed by a small integer, used only to
        // exercise selection logic independent of real poker semantics.
        let ranks = [
            Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven, Rank::Eight,
            Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace,
        ];
        let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
        let base = n as usize;
        Board::new(
            [
                c(ranks[base % 13], suits[base % 4]),
                c(ranks[(base + 1) % 13], suits[(base + 1) % 4]),
                c(ranks[(base + 2) % 13], suits[(base + 2) % 4]),
            ],
            c(ranks[(base + 3) % 13], suits[(base + 3) % 4]),
            c(ranks[(base + 4) % 13], suits[(base + 4) % 4]),
        )
    }

    #[test]
    fn empty_candidates_returns_none() {
        let config = SelectorConfig::default();
        assert!(suggest(&[], &config).is_none());
    }

    #[test]
    fn single_candidate_is_its_own_suggestion() {
        let config = SelectorConfig::default();
        let only = board(0);
        assert_eq!(suggest(&[only], &config), Some(only));
    }

    #[test]
    fn distribution_sums_to_answer_count() {
        let answers: Vec<Board> = (0..10).map(board).collect();
        let hist = distribution_for(&answers[0], &answers);
        assert_eq!(hist.iter().sum::<u32>(), 10);
    }

    #[test]
    fn suggestion_is_deterministic_across_repeated_calls() {
        let candidates: Vec<Board> = (0..20).map(board).collect();
        let config = SelectorConfig::default();
        let a = suggest(&candidates, &config);
        let b = suggest(&candidates, &config);
        assert_eq!(a, b);
    }

    #[test]
    fn sampling_kicks_in_above_threshold() {
        let candidates: Vec<Board> = (0..120u8).map(board).collect();
        let config = SelectorConfig { sampling_threshold: 50, sample_size: 30, rng_seed: 7 };
        // Should not panic and should return a candidate from the set.
        let chosen = suggest(&candidates, &config).unwrap();
        assert!(candidates.contains(&chosen));
    }
}
