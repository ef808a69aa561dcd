// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Discard strategies.
use log::debug;
use std::ops::Deref;

use drawpoker_eval::{Card, Category, Hand, HandValue, Rank, RankTally, Suit};

/// A draw poker strategy.
pub trait Strategy {
    /// Chooses the cards to keep from a hand, the other cards are discarded.
    fn choose_keep(&mut self, hand: &Hand) -> KeepSet;
}

/// The cards a player keeps before drawing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeepSet(Vec<Card>);

impl KeepSet {
    /// Creates a keep set from a list of cards.
    pub fn new(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    /// The kept cards.
    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    /// The cards of the hand that are not kept.
    pub fn discarded<'a>(&'a self, hand: &'a Hand) -> impl Iterator<Item = Card> + 'a {
        hand.iter().filter(|c| !self.0.contains(c))
    }
}

impl Deref for KeepSet {
    type Target = [Card];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A strategy that never discards.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandPat;

impl Strategy for StandPat {
    fn choose_keep(&mut self, hand: &Hand) -> KeepSet {
        KeepSet(hand.iter().collect())
    }
}

/// A rule based discard strategy.
///
/// Made hands (straight, flush, full house, straight flush) are never broken,
/// a high card hand looks for a four cards flush or straight draw, all other
/// hands keep the cards that make their category.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardStrategy;

impl DiscardStrategy {
    /// Computes the cards to keep for a hand.
    pub fn keep(hand: &Hand) -> KeepSet {
        let value = HandValue::eval(hand);
        let organized = value.organized();

        let count = match value.category() {
            Category::Straight
            | Category::Flush
            | Category::FullHouse
            | Category::StraightFlush => Hand::SIZE,
            Category::HighCard => {
                if let Some(draw) = flush_draw(hand).or_else(|| straight_draw(hand)) {
                    debug!("{hand}: drawing to {}", fmt_cards(&draw));
                    return KeepSet(draw);
                }

                1
            }
            Category::OnePair => 2,
            Category::TwoPair => 4,
            Category::ThreeOfAKind => 3,
            Category::FourOfAKind => {
                // Keep a queen or king kicker.
                if organized[4].rank() >= Rank::Queen {
                    Hand::SIZE
                } else {
                    4
                }
            }
        };

        debug!("{hand}: {} keeping {count} cards", value.category());
        KeepSet(organized[..count].to_vec())
    }
}

impl Strategy for DiscardStrategy {
    fn choose_keep(&mut self, hand: &Hand) -> KeepSet {
        Self::keep(hand)
    }
}

/// Four cards of the same suit.
fn flush_draw(hand: &Hand) -> Option<Vec<Card>> {
    Suit::suits()
        .find(|&s| hand.suit_count(s) == Hand::SIZE - 1)
        .map(|s| hand.suit_group(s).collect())
}

/// Four cards that need one card to make a straight, the hand must have no
/// pairs.
fn straight_draw(hand: &Hand) -> Option<Vec<Card>> {
    let mut runs = RankTally::new(hand).runs();

    // A run of three in the middle leaves a single card at each end.
    match runs.len() {
        2 => {}
        3 if runs[1].len() != 3 => {}
        _ => return None,
    }

    let last = runs.len() - 1;
    if runs[0].len() == 1 {
        runs.remove(0);
    } else if runs[last].len() == 1 {
        runs.remove(last);
    } else {
        return None;
    }

    let ranks = runs.concat();
    if ranks.len() != Hand::SIZE - 1 {
        return None;
    }

    Some(hand.iter().filter(|c| ranks.contains(&c.rank())).collect())
}

fn fmt_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawpoker_eval::Deck;
    use rand::prelude::*;

    fn keep(hand: &str) -> String {
        fmt_cards(&DiscardStrategy::keep(&hand.parse().unwrap()))
    }

    #[test]
    fn keep_made_hands() {
        assert_eq!(keep("AH 2H 3H 4H 5H"), "5H 4H 3H 2H AH");
        assert_eq!(keep("AH 2D 3H 4C 5H"), "5H 4C 3H 2D AH");
        assert_eq!(keep("AH 2H 7H 4H JH"), "JH 7H 4H 2H AH");
        assert_eq!(keep("5H 9H 5D 9D 5C"), "9H 9D 5H 5D 5C");
    }

    #[test]
    fn keep_n_of_a_kind() {
        assert_eq!(keep("KH KD 7C 4S 2H"), "KH KD");
        assert_eq!(keep("KH KD 7C 7S 2H"), "KH KD 7C 7S");
        assert_eq!(keep("KH KD KC 7S 2H"), "KH KD KC");
    }

    #[test]
    fn keep_four_of_a_kind_kicker() {
        assert_eq!(keep("KH KD KC KS 5H"), "KH KD KC KS");
        assert_eq!(keep("KH KD KC KS JH"), "KH KD KC KS");
        assert_eq!(keep("KH KD KC KS QH"), "KH KD KC KS QH");
        assert_eq!(keep("5H 5D 5C 5S KH"), "5H 5D 5C 5S KH");
    }

    #[test]
    fn keep_high_card() {
        assert_eq!(keep("2H 5H 3D KC 9S"), "KC");
        assert_eq!(keep("AH 3D 5C 7S 9H"), "9H");
    }

    #[test]
    fn keep_flush_draw() {
        assert_eq!(keep("2H 5H 9H KH 7S"), "2H 5H 9H KH");
        assert_eq!(keep("2S 5S 9S KS 7H"), "2S 5S 9S KS");

        // Flush draw is preferred to a straight draw.
        assert_eq!(keep("5H 6H 7H 8D KH"), "5H 6H 7H KH");
    }

    #[test]
    fn keep_straight_draw() {
        // Open ended.
        assert_eq!(keep("5H 6D 7C 8S KH"), "5H 6D 7C 8S");
        assert_eq!(keep("2H 6D 7C 8S 9H"), "9H 6D 7C 8S");
        assert_eq!(keep("TH JD QC KS 2H"), "TH JD QC KS");

        // Inside straight draws.
        assert_eq!(keep("5H 6D 7C 9S KH"), "5H 6D 7C 9S");
        assert_eq!(keep("5H 6D 8C 9S KH"), "5H 6D 8C 9S");
        assert_eq!(keep("AH 5D 7C 8S 9H"), "9H 5D 7C 8S");
    }

    #[test]
    fn no_straight_draw() {
        // Single cards around a run of three.
        assert_eq!(keep("2H 5D 6C 7S KH"), "KH");
        // Too many gaps.
        assert_eq!(keep("AH 3D 5C 7S 9H"), "9H");
        // No single card at either end.
        assert_eq!(keep("2H 3D 7C 8S 9H"), "9H");
        assert_eq!(keep("2H 3D 6C 9S TH"), "TH");
        // No wrap around the ace.
        assert_eq!(keep("JH QD KC AS 2H"), "KC");
    }

    #[test]
    fn keep_split_straight_draw() {
        // Single card at the low end, two runs of two.
        assert_eq!(keep("2H 7D 8C QS KH"), "KH 7D 8C QS");
        // Single card at the high end.
        assert_eq!(keep("2H 3D 7C 8S KH"), "2H 3D 7C 8S");
    }

    #[test]
    fn keep_is_a_subset() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..10_000 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let hand = deck.deal_hands(1).unwrap()[0];
            let keep = DiscardStrategy.choose_keep(&hand);

            assert!(keep.len() <= Hand::SIZE);
            assert!(keep.iter().all(|&c| hand.contains(c)));
            assert_eq!(keep.discarded(&hand).count(), Hand::SIZE - keep.len());
        }
    }

    #[test]
    fn stand_pat() {
        let hand = "2H 5H 3D KC 9S".parse::<Hand>().unwrap();
        let keep = StandPat.choose_keep(&hand);
        assert_eq!(keep.cards(), hand.cards());
        assert_eq!(keep.discarded(&hand).count(), 0);
    }
}
