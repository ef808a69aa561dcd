// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A five cards hand.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Card, CardsError, Suit};

/// A five cards Poker hand.
///
/// The cards are grouped by suit, hearts first followed by diamonds, clubs,
/// and spades, cards with the same suit keep the order in which they were
/// given. This grouping order is the order returned by [Hand::iter].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Card>", try_from = "Vec<Card>")]
pub struct Hand {
    cards: [Card; Hand::SIZE],
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand, fails if a card is repeated.
    pub fn new(mut cards: [Card; Hand::SIZE]) -> Result<Self, CardsError> {
        for (idx, card) in cards.iter().enumerate() {
            if cards[..idx].contains(card) {
                return Err(CardsError::DuplicateCard(*card));
            }
        }

        // Stable sort keeps the dealing order within a suit.
        cards.sort_by_key(|c| c.suit());
        Ok(Self { cards })
    }

    /// The hand cards in grouping order.
    pub fn cards(&self) -> &[Card; Hand::SIZE] {
        &self.cards
    }

    /// Iterates the cards in grouping order.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// Checks if the hand has the given card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Iterates the cards with the given suit.
    pub fn suit_group(&self, suit: Suit) -> impl Iterator<Item = Card> + '_ {
        self.iter().filter(move |c| c.suit() == suit)
    }

    /// Number of cards with the given suit.
    pub fn suit_count(&self, suit: Suit) -> usize {
        self.suit_group(suit).count()
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = CardsError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let cards = <[Card; Hand::SIZE]>::try_from(cards)
            .map_err(|_| CardsError::InvalidHand(cards.len()))?;
        Hand::new(cards)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = CardsError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Hand::try_from(cards.as_slice())
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.cards.to_vec()
    }
}

impl FromStr for Hand {
    type Err = CardsError;

    /// Parses white space separated cards like `AH 2H 3D 4C 5S`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Card>, _>>()?;
        Hand::try_from(cards)
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = Card;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Card>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter().copied()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }

            write!(f, "{card}")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand({self})")
    }
}
