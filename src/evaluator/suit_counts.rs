use crate::cards::{Card, Suit};

/// Per-suit tally of a hand, with wildcards counted separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuitCounts {
    wildcards: u8,
    by_suit: [u8; 4],
}

impl SuitCounts {
    pub fn wildcards(&self) -> u8 {
        self.wildcards
    }

    /// Count of cards of `suit`; every suit is present, defaulting to 0.
    pub fn get(&self, suit: Suit) -> u8 {
        self.by_suit[suit.index()]
    }

    /// `(suit, count)` for all four suits in [`Suit::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Suit, u8)> + '_ {
        Suit::ALL.iter().map(move |&s| (s, self.get(s)))
    }

    /// Suited cards plus wildcards.
    pub fn total(&self) -> usize {
        self.wildcards as usize + self.by_suit.iter().map(|&c| c as usize).sum::<usize>()
    }
}

/// Tally the suits of `cards`. Wildcards go to their own bucket.
pub fn count_suits(cards: &[Card]) -> SuitCounts {
    let mut counts = SuitCounts::default();
    for card in cards {
        match card.suit() {
            Some(suit) => counts.by_suit[suit.index()] += 1,
            None => counts.wildcards += 1,
        }
    }
    counts
}
