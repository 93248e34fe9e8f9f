use joker_poker::cards::{Card, Rank, Suit};
use joker_poker::evaluator::detector::{self, DETECTORS};
use joker_poker::evaluator::{classify, count_ranks, count_suits, Category};
use proptest::prelude::*;

fn full_deck(with_joker: bool) -> Vec<Card> {
    let mut cards: Vec<Card> =
        Suit::ALL.iter().flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s))).collect();
    if with_joker {
        cards.push(Card::Joker);
    }
    cards
}

/// Five distinct cards from the 53-card deck, in random order.
fn any_hand() -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(full_deck(true), 5).prop_shuffle()
}

/// Five distinct cards that always include the joker.
fn joker_hand() -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(full_deck(false), 4).prop_map(|mut xs| {
        xs.push(Card::Joker);
        xs
    })
}

fn straight_ranks(top: u8) -> Vec<Rank> {
    if top == 5 {
        vec![Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]
    } else {
        (top - 4..=top).filter_map(Rank::from_value).collect()
    }
}

proptest! {
    #[test]
    fn counts_always_sum_to_hand_size(hand in any_hand()) {
        prop_assert_eq!(count_suits(&hand).total(), 5);
        prop_assert_eq!(count_ranks(&hand).total(), 5);
    }

    #[test]
    fn result_is_first_matching_detector(hand in any_hand()) {
        let category = classify(&hand).unwrap();
        let first = DETECTORS.iter().find(|d| d.detect(&hand)).map(|d| d.category());
        prop_assert_eq!(category, first.unwrap_or(Category::NoPair));
        prop_assert!(Category::CASCADE.contains(&category));
    }

    #[test]
    fn no_stronger_detector_matches(hand in any_hand()) {
        let category = classify(&hand).unwrap();
        for d in DETECTORS.iter().filter(|d| d.category() > category) {
            prop_assert!(!d.detect(&hand), "{:?} also matched for {:?}", d.category(), hand);
        }
    }

    #[test]
    fn classification_ignores_card_order(hand in any_hand(), rotate in 0usize..5) {
        let mut reordered = hand.clone();
        reordered.rotate_left(rotate);
        reordered.reverse();
        prop_assert_eq!(detector::is_straight(&hand), detector::is_straight(&reordered));
        prop_assert_eq!(classify(&hand).unwrap(), classify(&reordered).unwrap());
    }

    #[test]
    fn joker_never_yields_two_pair_or_no_pair(hand in joker_hand()) {
        let category = classify(&hand).unwrap();
        prop_assert_ne!(category, Category::TwoPair);
        prop_assert_ne!(category, Category::NoPair);
    }

    #[test]
    fn joker_never_weakens_a_hand(hand in prop::sample::subsequence(full_deck(false), 5), slot in 0usize..5) {
        let natural = classify(&hand).unwrap();
        let mut wild = hand.clone();
        wild[slot] = Card::Joker;
        prop_assert!(classify(&wild).unwrap() >= natural);
    }

    #[test]
    fn every_run_is_a_straight(top in 5u8..=14u8, mixed in any::<bool>()) {
        let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];
        let hand: Vec<Card> = straight_ranks(top)
            .into_iter()
            .zip(suits)
            .map(|(r, s)| Card::new(r, if mixed { s } else { Suit::Hearts }))
            .collect();
        let expected = match (mixed, top) {
            (true, _) => Category::Straight,
            (false, 14) => Category::RoyalStraightFlush,
            (false, _) => Category::StraightFlush,
        };
        prop_assert_eq!(classify(&hand).unwrap(), expected);
    }
}
