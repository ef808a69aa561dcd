// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw poker hand evaluator.
//!
//! Evaluates five cards hands where the ace is the lowest rank, the only
//! straight with an ace is ace to five and there is no ace high straight.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the hand
//! and get its category and organized cards:
//!
//! ```
//! # use drawpoker_eval::*;
//! let hand: Hand = "AH 2H 3H 4H 5H".parse().unwrap();
//! let value = HandValue::eval(&hand);
//! assert_eq!(value.category(), Category::StraightFlush);
//! assert_eq!(value.organized().to_string(), "5H 4H 3H 2H AH");
//! ```
//!
//! or [compare] two hands:
//!
//! ```
//! # use drawpoker_eval::*;
//! let kings: Hand = "KH KD 7C 7S 2H".parse().unwrap();
//! let queens: Hand = "QH QD 4C 4S 9H".parse().unwrap();
//! assert_eq!(compare(&kings, &queens), Outcome::First);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod category;
pub use category::Category;

mod organize;
pub use organize::{OrganizedHand, organize};

mod tally;
pub use tally::RankTally;

mod value;
pub use value::{HandValue, Outcome, compare};

// Reexport cards types.
pub use drawpoker_cards::{Card, CardsError, Deck, Hand, Rank, Suit};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_hands_categories() {
        let mut counts = [0usize; Category::COUNT];
        Deck::default().for_each_hand(|cards| {
            let hand = Hand::new(*cards).unwrap();
            counts[Category::of(&hand) as usize] += 1;
        });

        // Ace high straights count as high card.
        assert_eq!(counts[Category::HighCard as usize], 1_303_560);
        assert_eq!(counts[Category::OnePair as usize], 1_098_240);
        assert_eq!(counts[Category::TwoPair as usize], 123_552);
        assert_eq!(counts[Category::ThreeOfAKind as usize], 54_912);
        assert_eq!(counts[Category::Straight as usize], 9_180);
        assert_eq!(counts[Category::Flush as usize], 5_112);
        assert_eq!(counts[Category::FullHouse as usize], 3_744);
        assert_eq!(counts[Category::FourOfAKind as usize], 624);
        assert_eq!(counts[Category::StraightFlush as usize], 36);
        assert_eq!(counts.iter().sum::<usize>(), 2_598_960);
    }
}
