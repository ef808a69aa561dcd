// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw poker cards types.
//!
//! This crate define types to create cards, the ace is the lowest rank:
//!
//! ```
//! # use drawpoker_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert!(ah.rank() < kd.rank());
//! ```
//!
//! five cards [Hand]s grouped by suit:
//!
//! ```
//! # use drawpoker_cards::Hand;
//! let hand: Hand = "KS 7C 2H 7S KH".parse().unwrap();
//! assert_eq!(hand.to_string(), "2H KH 7C KS 7S");
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and refilling hands after a
//! discard:
//!
//! ```
//! # use drawpoker_cards::{Deck, Hand};
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let hands = deck.deal_hands(2).unwrap();
//! assert_eq!(deck.count(), Deck::SIZE - 2 * Hand::SIZE);
//!
//! // Keep the first two cards and draw three new ones.
//! let keep = &hands[0].cards()[..2];
//! let hand = deck.refill(keep).unwrap();
//! assert!(hand.contains(keep[0]) && hand.contains(keep[1]));
//! ```
//!
//! To iterate through all 5 cards hands:
//!
//! ```no_run
//! # use drawpoker_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each_hand(|hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};

mod error;
pub use error::CardsError;

mod hand;
pub use hand::Hand;
