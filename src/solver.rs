//! Solver façade (C9): the public `Solver` type implementing the external
//! interface — construction-time validation, candidate-set state, and the
//! "last suggested board" slot that ties `suggest()` to `apply_feedback()`.

use crate::board::Board;
use crate::comparator::Color;
use crate::enumerator::{self, Orderings};
use crate::hole::HoleCards;
use crate::pruner::{self, PruneError};
use crate::selector::{self, SelectorConfig};

/// Construction-time options governing C6's sampling behavior.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    pub sampling_threshold: usize,
    pub sample_size: usize,
    pub rng_seed: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        let d = SelectorConfig::default();
        Self { sampling_threshold: d.sampling_threshold, sample_size: d.sample_size, rng_seed: d.rng_seed }
    }
}

impl From<SolverConfig> for SelectorConfig {
    fn from(c: SolverConfig) -> Self {
        SelectorConfig { sampling_threshold: c.sampling_threshold, sample_size: c.sample_size, rng_seed: c.rng_seed }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SolverError {
    #[error("invalid construction: {0}")]
    InvalidConstruction(String),
    #[error("candidate set is empty")]
    EmptyCandidates,
    #[error("precondition unmet: {0}")]
    PreconditionUnmet(String),
    #[error(transparent)]
    InconsistentFeedback(#[from] PruneError),
}

/// Converts each player's 1/2/3 strength label into the "player indices
/// ordered strongest-to-weakest" form the solver's `ordering` construction
/// option expects.
pub fn ordering_from_ranks(ranks: [u8; 3]) -> [u8; 3] {
    let mut indexed: Vec<(u8, u8)> = ranks.iter().enumerate().map(|(i, &r)| (i as u8 + 1, r)).collect();
    indexed.sort_by_key(|&(_, r)| r);
    [indexed[0].0, indexed[1].0, indexed[2].0]
}

fn is_permutation_of_one_two_three(order: [u8; 3]) -> bool {
    let mut sorted = order;
    sorted.sort_unstable();
    sorted == [1, 2, 3]
}

/// The three-player Pokle solver.
pub struct Solver {
    hole: [HoleCards; 3],
    orderings: Orderings,
    config: SolverConfig,
    candidates: Option<Vec<Board>>,
    last_suggested: Option<Board>,
}

impl Solver {
    /// Construct a solver for three pairwise-disjoint hole pairs and the
    /// three per-phase expected strength orderings. Fails if any ordering is
    /// not a permutation of `(1,2,3)` or if any two hole pairs share a card.
    pub fn new(hole: [HoleCards; 3], orderings: Orderings) -> Result<Self, SolverError> {
        Self::with_config(hole, orderings, SolverConfig::default())
    }

    pub fn with_config(
        hole: [HoleCards; 3],
        orderings: Orderings,
        config: SolverConfig,
    ) -> Result<Self, SolverError> {
        for order in [orderings.flop, orderings.turn, orderings.river] {
            if !is_permutation_of_one_two_three(order) {
                return Err(SolverError::InvalidConstruction(format!(
                    "ordering {order:?} is not a permutation of (1,2,3)"
                )));
            }
        }
        for i in 0..3 {
            for j in (i + 1)..3 {
                if hole[i].overlaps(&hole[j]) {
                    return Err(SolverError::InvalidConstruction(format!(
                        "hole pairs {i} and {j} share a card"
                    )));
                }
            }
        }

        Ok(Self { hole, orderings, config, candidates: None, last_suggested: None })
    }

    /// Enumerate and store the candidate set. May be called more than once;
    /// repeated calls with the same construction return identical ordered
    /// lists.
    pub fn solve(&mut self) -> Vec<Board> {
        let boards = enumerator::enumerate(&self.hole, self.orderings);
        self.candidates = Some(boards.clone());
        boards
    }

    /// Return the current entropy-maximizing candidate. Requires `solve()`
    /// to have run and the candidate set to be non-empty.
    pub fn suggest(&mut self) -> Result<Board, SolverError> {
        let candidates = self
            .candidates
            .as_ref()
            .ok_or_else(|| SolverError::PreconditionUnmet("suggest() called before solve()".into()))?;
        if candidates.is_empty() {
            return Err(SolverError::EmptyCandidates);
        }
        let selector_config: SelectorConfig = self.config.into();
        let chosen = selector::suggest(candidates, &selector_config)
            .expect("non-empty candidates always yield a suggestion");
        self.last_suggested = Some(chosen);
        Ok(chosen)
    }

    /// Prune the candidate set by the observed per-position colors against
    /// the last suggested board. Requires a prior `suggest()`.
    pub fn apply_feedback(&mut self, colors: [Color; 5]) -> Result<Vec<Board>, SolverError> {
        let last_guess = self.last_suggested.ok_or_else(|| {
            SolverError::PreconditionUnmet("apply_feedback() called before suggest()".into())
        })?;
        let candidates = self
            .candidates
            .as_ref()
            .ok_or_else(|| SolverError::PreconditionUnmet("apply_feedback() called before solve()".into()))?;
        let retained = pruner::prune(candidates, &last_guess, colors)?;
        self.candidates = Some(retained.clone());
        Ok(retained)
    }

    /// The current candidate set, or an empty vector before `solve()` runs.
    pub fn remaining(&self) -> Vec<Board> {
        self.candidates.clone().unwrap_or_default()
    }
}
