use crate::cards::{Card, Rank, Suit};
use crate::hand::{Hand, HAND_SIZE};
use log::debug;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Every suit × rank combination, built once at compile time.
static BASE_DECK: [Card; 52] = build_base_deck();

const fn build_base_deck() -> [Card; 52] {
    let mut cards = [Card::Joker; 52];
    let mut s = 0;
    while s < Suit::ALL.len() {
        let mut r = 0;
        while r < Rank::ALL.len() {
            cards[s * Rank::ALL.len() + r] = Card::new(Rank::ALL[r], Suit::ALL[s]);
            r += 1;
        }
        s += 1;
    }
    cards
}

/// Per-round deck configuration.
///
/// ```
/// use joker_poker::deck::DeckOptions;
///
/// let opts = DeckOptions::default().with_wildcard(true).with_seed(7);
/// assert!(opts.include_wildcard);
/// assert_eq!(opts.seed, Some(7));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeckOptions {
    /// Add the single joker to the 52 base cards.
    pub include_wildcard: bool,
    /// Shuffle with a seeded RNG for a reproducible round.
    pub seed: Option<u64>,
}

impl DeckOptions {
    pub fn with_wildcard(mut self, include: bool) -> Self {
        self.include_wildcard = include;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("cannot deal {requested} cards, only {remaining} remain")]
    NotEnoughCards { requested: usize, remaining: usize },
}

/// The undrawn cards of one round, in shuffled order.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build and shuffle a fresh deck.
    ///
    /// ```
    /// use joker_poker::deck::{Deck, DeckOptions};
    ///
    /// let deck = Deck::new(DeckOptions::default().with_wildcard(true));
    /// assert_eq!(deck.len(), 53);
    /// ```
    pub fn new(options: DeckOptions) -> Self {
        match options.seed {
            Some(seed) => Self::with_rng(options, &mut ChaCha8Rng::seed_from_u64(seed)),
            None => Self::with_rng(options, &mut rand::rng()),
        }
    }

    /// Build a fresh deck and shuffle it with the provided RNG.
    /// `options.seed` is ignored here.
    pub fn with_rng<R: Rng + ?Sized>(options: DeckOptions, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(BASE_DECK.len() + 1);
        cards.extend_from_slice(&BASE_DECK);
        if options.include_wildcard {
            cards.push(Card::Joker);
        }
        cards.shuffle(rng);
        debug!("built deck of {} cards (wildcard: {})", cards.len(), options.include_wildcard);
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The undrawn cards, next card to be dealt first.
    pub fn remaining(&self) -> &[Card] {
        &self.cards
    }

    /// Remove and return the first `n` cards. The deck is untouched on error.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::NotEnoughCards { requested: n, remaining: self.cards.len() });
        }
        let dealt: Vec<Card> = self.cards.drain(..n).collect();
        debug!("dealt {} cards, {} remain", dealt.len(), self.cards.len());
        Ok(dealt)
    }

    /// Deal the next five cards as a [`Hand`].
    pub fn deal_hand(&mut self) -> Result<Hand, DeckError> {
        let cards = self.deal(HAND_SIZE)?;
        let mut five = [Card::Joker; HAND_SIZE];
        five.copy_from_slice(&cards);
        // Cards of one deck are distinct, so this cannot fail validation.
        Ok(Hand::from_dealt(five))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn base_deck_has_every_combination_once() {
        let set: HashSet<Card> = BASE_DECK.iter().copied().collect();
        assert_eq!(set.len(), 52);
        assert!(!set.contains(&Card::Joker));
        for s in Suit::ALL {
            for r in Rank::ALL {
                assert!(set.contains(&Card::new(r, s)));
            }
        }
    }

    #[test]
    fn wildcard_option_adds_exactly_one_joker() {
        let plain = Deck::new(DeckOptions::default());
        assert_eq!(plain.len(), 52);
        assert!(!plain.remaining().contains(&Card::Joker));

        let joker = Deck::new(DeckOptions::default().with_wildcard(true));
        assert_eq!(joker.len(), 53);
        assert_eq!(joker.remaining().iter().filter(|c| c.is_wildcard()).count(), 1);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let opts = DeckOptions::default().with_wildcard(true).with_seed(42);
        let d1 = Deck::new(opts);
        let d2 = Deck::new(opts);
        assert_eq!(d1.cards, d2.cards);

        let d3 = Deck::new(opts.with_seed(43));
        assert_ne!(d1.cards, d3.cards);
    }

    #[test]
    fn deal_takes_from_the_front() {
        let mut d = Deck::new(DeckOptions::default().with_seed(7));
        let front: Vec<Card> = d.remaining()[..3].to_vec();
        let dealt = d.deal(3).unwrap();
        assert_eq!(dealt, front);
        assert_eq!(d.len(), 49);
    }

    #[test]
    fn deal_zero_is_empty_and_harmless() {
        let mut d = Deck::new(DeckOptions::default());
        assert!(d.deal(0).unwrap().is_empty());
        assert_eq!(d.len(), 52);
    }

    #[test]
    fn over_deal_fails_without_mutating() {
        let mut d = Deck::new(DeckOptions::default().with_seed(1));
        let before = d.cards.clone();
        let err = d.deal(53).unwrap_err();
        assert_eq!(err, DeckError::NotEnoughCards { requested: 53, remaining: 52 });
        assert_eq!(d.cards, before);
    }

    #[test]
    fn deal_hand_returns_five_cards() {
        let mut d = Deck::new(DeckOptions::default().with_wildcard(true).with_seed(3));
        let hand = d.deal_hand().unwrap();
        assert_eq!(hand.cards().len(), 5);
        assert_eq!(d.len(), 48);
    }
}
