use crate::cards::Rank;

/// Ranks bucketed by how many times they appear in a 5-card hand, ordered
/// (count desc, rank desc) so `pairs()`/`kickers()` hand back tiebreakers in
/// the order `HandValue::from_parts` expects to pack them. The phase
/// validator never inspects this directly — it only sees the resulting
/// `Category` and `best_five` — but every category above HighCard is decided
/// by reading these buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Build groups from a rank-indexed frequency table (indices 2..=14 used,
    /// 0 and 1 always zero). One pass collects, one sort orders by (count,
    /// rank) descending so the bucket with the most copies — and, among
    /// ties, the higher rank — comes first.
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .map(|rank| (rank, rank_counts[rank.value() as usize]))
            .filter(|&(_, count)| count > 0)
            .collect();
        groups.sort_unstable_by(|a, b| (b.1, b.0).cmp(&(a.1, a.0)));
        Self { groups }
    }

    fn rank_with_count(&self, count: u8) -> Option<Rank> {
        self.groups.iter().find(|&&(_, c)| c == count).map(|&(rank, _)| rank)
    }

    fn ranks_with_count(&self, count: u8) -> Vec<Rank> {
        self.groups.iter().filter(|&&(_, c)| c == count).map(|&(rank, _)| rank).collect()
    }

    /// The four-of-a-kind rank, if this hand has one.
    pub fn quad(&self) -> Option<Rank> {
        self.rank_with_count(4)
    }

    /// The three-of-a-kind rank, if this hand has one.
    pub fn trips(&self) -> Option<Rank> {
        self.rank_with_count(3)
    }

    /// All pair ranks, highest first.
    pub fn pairs(&self) -> Vec<Rank> {
        self.ranks_with_count(2)
    }

    /// All unpaired (kicker) ranks, highest first.
    pub fn kickers(&self) -> Vec<Rank> {
        self.ranks_with_count(1)
    }

    /// True when the hand carries both a three-of-a-kind and a pair.
    pub fn has_full_house(&self) -> bool {
        self.quad().is_none() && self.trips().is_some() && !self.pairs().is_empty()
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
