use super::rank_counts::count_ranks;
use super::suit_counts::count_suits;
use crate::cards::{Card, Rank};
use crate::evaluator::Category;
use crate::hand::HAND_SIZE;

pub use super::straight::is_straight;

// ============================================================================
// Pattern predicates
// ============================================================================

/// Some suit plus the wildcards covers the whole hand.
pub fn is_flush(cards: &[Card]) -> bool {
    let counts = count_suits(cards);
    let wildcards = counts.wildcards();
    let flush = counts.iter().any(|(_, c)| (c + wildcards) as usize == HAND_SIZE);
    flush
}

pub fn is_straight_flush(cards: &[Card]) -> bool {
    is_straight(cards) && is_flush(cards)
}

/// A straight flush made only of wildcards and Ten through Ace.
pub fn is_royal_straight_flush(cards: &[Card]) -> bool {
    if !is_straight_flush(cards) {
        return false;
    }
    // Straight flush already rules out repeated ranks.
    let royal = cards.iter().filter(|c| c.rank().map_or(true, |r| r >= Rank::Ten)).count();
    royal == HAND_SIZE
}

pub fn is_five_of_a_kind(cards: &[Card]) -> bool {
    count_ranks(cards).any_with_wildcards(5)
}

pub fn is_four_of_a_kind(cards: &[Card]) -> bool {
    count_ranks(cards).any_with_wildcards(4)
}

pub fn is_three_of_a_kind(cards: &[Card]) -> bool {
    count_ranks(cards).any_with_wildcards(3)
}

pub fn is_one_pair(cards: &[Card]) -> bool {
    count_ranks(cards).any_with_wildcards(2)
}

/// Exactly two natural pairs. Never true with a wildcard present: the
/// wildcard would lift one pair to three of a kind or better.
pub fn is_two_pair(cards: &[Card]) -> bool {
    let counts = count_ranks(cards);
    if counts.wildcards() > 0 {
        return false;
    }
    counts.ranks_with(2) == 2
}

/// Three of one rank and two of another. With wildcards, the natural cards
/// must hold two pairs: a wildcard completes either one.
pub fn is_full_house(cards: &[Card]) -> bool {
    let counts = count_ranks(cards);
    if counts.wildcards() > 0 {
        let natural: Vec<Card> = cards.iter().copied().filter(|c| !c.is_wildcard()).collect();
        return is_two_pair(&natural);
    }
    counts.ranks_with(3) > 0 && counts.ranks_with(2) > 0
}

// ============================================================================
// Cascade
// ============================================================================

/// One entry of the classification cascade: a category and its predicate.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    fn detect(&self, cards: &[Card]) -> bool;
}

macro_rules! detector {
    ($(#[$doc:meta])* $name:ident, $category:expr, $predicate:ident) => {
        $(#[$doc])*
        pub struct $name;

        impl CategoryDetector for $name {
            fn category(&self) -> Category {
                $category
            }

            fn detect(&self, cards: &[Card]) -> bool {
                $predicate(cards)
            }
        }
    };
}

detector!(
    /// Ten through Ace, one suit
    RoyalStraightFlushDetector,
    Category::RoyalStraightFlush,
    is_royal_straight_flush
);
detector!(
    /// Four of a rank plus the joker
    FiveOfAKindDetector,
    Category::FiveOfAKind,
    is_five_of_a_kind
);
detector!(StraightFlushDetector, Category::StraightFlush, is_straight_flush);
detector!(FourOfAKindDetector, Category::FourOfAKind, is_four_of_a_kind);
detector!(FullHouseDetector, Category::FullHouse, is_full_house);
detector!(FlushDetector, Category::Flush, is_flush);
detector!(StraightDetector, Category::Straight, is_straight);
detector!(ThreeOfAKindDetector, Category::ThreeOfAKind, is_three_of_a_kind);
detector!(TwoPairDetector, Category::TwoPair, is_two_pair);
detector!(OnePairDetector, Category::OnePair, is_one_pair);

/// Detectors in precedence order, strongest first. The first match wins;
/// a hand matching none is [`Category::NoPair`].
pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalStraightFlushDetector,
    &FiveOfAKindDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
];
