// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories.
use serde::{Deserialize, Serialize};
use std::fmt;

use drawpoker_cards::{Hand, Suit};

use crate::RankTally;

/// A hand category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 9;

    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = Category> {
        use Category::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// Computes the category of a hand.
    ///
    /// Predicates are checked from the weakest to the strongest category and
    /// the strongest satisfied one wins, high card when none holds.
    pub fn of(hand: &Hand) -> Category {
        let tally = RankTally::new(hand);
        let flush = Suit::suits().any(|s| hand.suit_count(s) == Hand::SIZE);

        let mut category = Category::HighCard;
        let mut upgrade = |holds: bool, c: Category| {
            if holds {
                category = c;
            }
        };

        upgrade(tally.has_pair(), Category::OnePair);
        upgrade(tally.has_two_pair(), Category::TwoPair);
        upgrade(tally.has_three_of_a_kind(), Category::ThreeOfAKind);
        upgrade(tally.has_straight(), Category::Straight);
        upgrade(flush, Category::Flush);
        upgrade(tally.has_full_house(), Category::FullHouse);
        upgrade(tally.has_four_of_a_kind(), Category::FourOfAKind);
        upgrade(tally.has_straight() && flush, Category::StraightFlush);

        category
    }

    /// The category points, 0 for high card up to 8 for a straight flush.
    pub fn points(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        };

        f.pad(label)
    }
}
