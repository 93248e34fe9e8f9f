//! joker-poker: five-card poker hand classification with a wildcard joker
//!
//! Goals:
//! - Classify any five-card hand into the strongest of eleven categories
//! - Treat the joker as any suit and any rank, and let the Ace play low in A-2-3-4-5
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: deal and classify
//! ```
//! use joker_poker::deck::{Deck, DeckOptions};
//! use joker_poker::evaluator::{classify, classify_hand, Category};
//! use joker_poker::cards::parse_cards;
//!
//! let mut deck = Deck::new(DeckOptions::default().with_wildcard(true).with_seed(1));
//! let hand = deck.deal_hand().unwrap();
//! let category = classify_hand(&hand);
//! assert!(Category::CASCADE.contains(&category));
//!
//! let cards = parse_cards("As 2c 3d 4h 5s").unwrap();
//! assert_eq!(classify(&cards).unwrap(), Category::Straight);
//! ```
//!
//! ## CLI
//! Deal a round with the joker, or classify cards given on the command line:
//! ```sh
//! cargo run --bin joker-poker -- --joker
//! cargo run --bin joker-poker -- As Ks Qs Js Joker
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
