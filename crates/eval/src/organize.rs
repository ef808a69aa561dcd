// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand organization.
//!
//! Orders the cards of a hand so that the cards that make the hand category
//! come first, the most significant rank first, followed by the kickers. The
//! organized hand is used for display and as the tie-break key when two hands
//! have the same category.
use std::{cmp::Reverse, fmt, ops::Deref};

use drawpoker_cards::{Card, Hand, Rank};

use crate::{Category, RankTally};

/// The cards of a hand in category order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrganizedHand([Card; Hand::SIZE]);

impl OrganizedHand {
    /// The organized cards.
    pub fn cards(&self) -> &[Card; Hand::SIZE] {
        &self.0
    }

    /// The card that leads the hand.
    pub fn lead(&self) -> Card {
        self.0[0]
    }

    /// The organized cards ranks.
    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        self.0.iter().map(|c| c.rank())
    }
}

impl Deref for OrganizedHand {
    type Target = [Card];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for OrganizedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }

            write!(f, "{card}")?;
        }

        Ok(())
    }
}

/// Organizes a hand given its category.
pub fn organize(hand: &Hand, category: Category) -> OrganizedHand {
    let tally = RankTally::new(hand);
    let mut cards = *hand.cards();

    match category {
        Category::HighCard => {
            // max_by_key returns the last max, we want the first one.
            let high = cards
                .iter()
                .enumerate()
                .max_by_key(|(idx, c)| (c.rank(), Reverse(*idx)))
                .map(|(idx, _)| idx)
                .unwrap_or_default();
            cards[..=high].rotate_right(1);
        }
        Category::OnePair => lead_with_kind(&mut cards, &tally, 2),
        Category::ThreeOfAKind => lead_with_kind(&mut cards, &tally, 3),
        Category::FourOfAKind => lead_with_kind(&mut cards, &tally, 4),
        Category::TwoPair => {
            let mut pairs = tally.ranks_with(2).rev();
            let high = pairs.next();
            let low = pairs.next();
            cards.sort_by_key(|c| match Some(c.rank()) {
                r if r == high => 0,
                r if r == low => 1,
                _ => 2,
            });
        }
        Category::Straight | Category::Flush | Category::StraightFlush => {
            cards.sort_by_key(|c| Reverse(c.rank()));
        }
        Category::FullHouse => {
            // The higher of the triple and pair ranks leads.
            let triple = tally.first_with(3);
            let pair = tally.first_with(2);
            let (high, low) = if triple > pair {
                (triple, pair)
            } else {
                (pair, triple)
            };
            cards.sort_by_key(|c| match Some(c.rank()) {
                r if r == high => 0,
                r if r == low => 1,
                _ => 2,
            });
        }
    }

    OrganizedHand(cards)
}

/// Moves the cards of the first rank with `count` cards to the front.
fn lead_with_kind(cards: &mut [Card], tally: &RankTally, count: u8) {
    if let Some(rank) = tally.first_with(count) {
        cards.sort_by_key(|c| c.rank() != rank);
    }
}
