use crate::cards::{Card, Rank};

/// Per-rank tally of a hand, with wildcards counted separately.
///
/// The table is indexed by rank value; slots 0 and 1 are never written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankCounts {
    wildcards: u8,
    by_rank: [u8; 15],
}

impl RankCounts {
    pub fn wildcards(&self) -> u8 {
        self.wildcards
    }

    pub fn get(&self, rank: Rank) -> u8 {
        self.by_rank[rank.value() as usize]
    }

    /// `(rank, count)` for Two through Ace, zero counts included.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, u8)> + '_ {
        Rank::ALL.iter().map(move |&r| (r, self.get(r)))
    }

    /// True if some rank reaches exactly `n` once the wildcards join it.
    pub fn any_with_wildcards(&self, n: u8) -> bool {
        self.iter().any(|(_, c)| c + self.wildcards == n)
    }

    /// Number of ranks whose natural count is exactly `n`.
    pub fn ranks_with(&self, n: u8) -> usize {
        self.iter().filter(|&(_, c)| c == n).count()
    }

    /// Ranked cards plus wildcards.
    pub fn total(&self) -> usize {
        self.wildcards as usize + self.by_rank.iter().map(|&c| c as usize).sum::<usize>()
    }
}

/// Tally the ranks of `cards`. Wildcards go to their own bucket.
pub fn count_ranks(cards: &[Card]) -> RankCounts {
    let mut counts = RankCounts::default();
    for card in cards {
        match card.rank() {
            Some(rank) => counts.by_rank[rank.value() as usize] += 1,
            None => counts.wildcards += 1,
        }
    }
    counts
}
