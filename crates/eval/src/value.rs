// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand values and comparison.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use drawpoker_cards::Hand;

use crate::{Category, OrganizedHand, organize};

/// The value of a hand, its category and the organized cards used to break
/// ties between hands with the same category.
#[derive(Debug, Clone, Copy)]
pub struct HandValue {
    category: Category,
    organized: OrganizedHand,
}

impl HandValue {
    /// Evaluates a hand.
    pub fn eval(hand: &Hand) -> Self {
        let category = Category::of(hand);
        let organized = organize(hand, category);
        Self {
            category,
            organized,
        }
    }

    /// The hand category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The hand cards in category order.
    pub fn organized(&self) -> &OrganizedHand {
        &self.organized
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.organized.ranks().cmp(other.organized.ranks()))
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandValue {}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.organized, self.category)
    }
}

/// The result of comparing two hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The first hand wins.
    First,
    /// The second hand wins.
    Second,
    /// The hands have the same value.
    Tie,
}

impl From<Ordering> for Outcome {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Outcome::First,
            Ordering::Less => Outcome::Second,
            Ordering::Equal => Outcome::Tie,
        }
    }
}

/// Compares two hands.
///
/// The stronger category wins, hands with the same category are compared by
/// the ranks of their organized cards starting from the leading card.
pub fn compare(first: &Hand, second: &Hand) -> Outcome {
    HandValue::eval(first).cmp(&HandValue::eval(second)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawpoker_cards::{Deck, Rank};
    use rand::prelude::*;

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    #[test]
    fn compare_categories() {
        let sflush = hand("AH 2H 3H 4H 5H");
        let quads = hand("KH KD KC KS 5H");
        let pair = hand("KH KD 7C 6S 2H");

        assert_eq!(compare(&sflush, &quads), Outcome::First);
        assert_eq!(compare(&quads, &sflush), Outcome::Second);
        assert_eq!(compare(&pair, &quads), Outcome::Second);
    }

    #[test]
    fn compare_two_pair() {
        let kings = hand("KH KD 7C 7S 2H");
        let queens = hand("QH QD 4C 4S 9H");
        assert_eq!(HandValue::eval(&kings).category(), Category::TwoPair);
        assert_eq!(HandValue::eval(&queens).category(), Category::TwoPair);
        assert_eq!(HandValue::eval(&kings).organized().lead().to_string(), "KH");
        assert_eq!(compare(&kings, &queens), Outcome::First);

        // Three queens and a pair of fours is a full house.
        let full = hand("QH QD QC 4S 4H");
        assert_eq!(HandValue::eval(&full).category(), Category::FullHouse);
        assert_eq!(compare(&kings, &full), Outcome::Second);

        // Same pairs, the kicker decides.
        let kicker = hand("KC KS 7H 7D 3C");
        assert_eq!(compare(&kings, &kicker), Outcome::Second);
    }

    #[test]
    fn compare_full_house() {
        let fives = hand("5H 5D 5C 9S 9H");
        let nines = hand("9D 9C 9S 5H 5S");

        // The higher rank leads, the triple or the pair.
        assert_eq!(HandValue::eval(&fives).organized().lead().rank(), Rank::Nine);
        assert_eq!(HandValue::eval(&nines).organized().lead().rank(), Rank::Nine);
        assert_eq!(compare(&fives, &nines), Outcome::Second);
        assert_eq!(compare(&nines, &fives), Outcome::First);

        // Kings over threes leads with the kings.
        let kings = hand("3H 3D 3C KS KH");
        let queens = hand("4H 4D 4C QS QH");
        assert_eq!(compare(&kings, &queens), Outcome::First);

        let sixes = hand("6H 6D 6C 2S 2H");
        let fours = hand("4H 4D 4C KS KH");
        assert_eq!(compare(&sixes, &fours), Outcome::Second);
        assert_eq!(compare(&sixes, &hand("5H 5D 5C 2C 2D")), Outcome::First);
    }

    #[test]
    fn compare_high_cards() {
        let king = hand("KH 9D 7C 4S 2H");
        let queen = hand("QH JD 9C 4S 2D");
        assert_eq!(compare(&king, &queen), Outcome::First);

        // Same leading card, the next organized card decides.
        let king_ten = hand("KS TD 3C 4H 2C");
        assert_eq!(compare(&king, &king_ten), Outcome::Second);

        // Same organized ranks with different suits.
        let other = hand("KD 2D 9C 7S 4S");
        assert_eq!(compare(&king, &other), Outcome::Tie);
    }

    #[test]
    fn compare_straights() {
        let wheel = hand("AH 2D 3C 4S 5H");
        let six_high = hand("2H 3D 4C 5S 6H");
        assert_eq!(compare(&wheel, &six_high), Outcome::Second);

        let king_high = hand("9H TD JC QS KH");
        assert_eq!(compare(&king_high, &six_high), Outcome::First);
    }

    #[test]
    fn compare_is_reflexive_and_antisymmetric() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10_000 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let hands = deck.deal_hands(2).unwrap();

            assert_eq!(compare(&hands[0], &hands[0]), Outcome::Tie);

            let outcome = compare(&hands[0], &hands[1]);
            let reversed = compare(&hands[1], &hands[0]);
            match outcome {
                Outcome::First => assert_eq!(reversed, Outcome::Second),
                Outcome::Second => assert_eq!(reversed, Outcome::First),
                Outcome::Tie => assert_eq!(reversed, Outcome::Tie),
            }
        }
    }

    #[test]
    fn compare_is_transitive() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..5_000 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let values = deck
                .deal_hands(3)
                .unwrap()
                .iter()
                .map(HandValue::eval)
                .collect::<Vec<_>>();

            for (a, b, c) in [(0, 1, 2), (0, 2, 1), (1, 0, 2), (1, 2, 0), (2, 0, 1), (2, 1, 0)] {
                let (a, b, c) = (values[a], values[b], values[c]);
                if a > b && b > c {
                    assert!(a > c, "{a} > {b} > {c}");
                }

                if a == b && b == c {
                    assert_eq!(a, c);
                }
            }
        }
    }
}
