pub mod detector;
pub mod rank_counts;
pub mod straight;
pub mod suit_counts;

use crate::cards::Card;
use crate::hand::{Hand, HandError};
use core::fmt;
use log::{debug, trace};

pub use rank_counts::{count_ranks, RankCounts};
pub use suit_counts::{count_suits, SuitCounts};

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    NoPair = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    FiveOfAKind = 9,
    RoyalStraightFlush = 10,
}

impl Category {
    /// Classification precedence, strongest first.
    pub const CASCADE: [Category; 11] = [
        Category::RoyalStraightFlush,
        Category::FiveOfAKind,
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::OnePair,
        Category::NoPair,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Category::NoPair => "no pair",
            Category::OnePair => "one pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfAKind => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOfAKind => "four of a kind",
            Category::StraightFlush => "straight flush",
            Category::FiveOfAKind => "five of a kind",
            Category::RoyalStraightFlush => "royal straight flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
}

/// Validate `cards` as a five-card hand and classify it.
///
/// ```
/// use joker_poker::cards::parse_cards;
/// use joker_poker::evaluator::{classify, Category};
///
/// let cards = parse_cards("As Ks Qs Js Joker").unwrap();
/// assert_eq!(classify(&cards).unwrap(), Category::RoyalStraightFlush);
///
/// let short = parse_cards("As Ks").unwrap();
/// assert!(classify(&short).is_err());
/// ```
pub fn classify(cards: &[Card]) -> Result<Category, EvalError> {
    let hand = Hand::from_slice(cards)?;
    Ok(classify_hand(&hand))
}

/// Run the detector cascade over a hand; the first match wins.
///
/// ```
/// use joker_poker::evaluator::{classify_hand, Category};
/// use joker_poker::hand::Hand;
///
/// let hand: Hand = "7s 7c 9d 9h Joker".parse().unwrap();
/// assert_eq!(classify_hand(&hand), Category::FullHouse);
/// ```
pub fn classify_hand(hand: &Hand) -> Category {
    let cards = hand.as_slice();
    let category = detector::DETECTORS
        .iter()
        .find(|d| {
            let hit = d.detect(cards);
            trace!("{hand}: {} -> {hit}", d.category());
            hit
        })
        .map_or(Category::NoPair, |d| d.category());
    debug!("classified {hand} as {category}");
    category
}
