// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Per rank cards count.
use drawpoker_cards::{Card, Rank};

/// The number of cards for each rank in a set of cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankTally([u8; Rank::COUNT]);

impl RankTally {
    /// Counts the cards ranks.
    pub fn new<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        let mut counts = [0; Rank::COUNT];
        for card in cards {
            counts[card.rank() as usize - 1] += 1;
        }

        Self(counts)
    }

    /// The number of cards with the given rank.
    #[inline]
    pub fn count(&self, rank: Rank) -> u8 {
        self.0[rank as usize - 1]
    }

    /// The total number of cards.
    pub fn len(&self) -> usize {
        self.0.iter().map(|&c| c as usize).sum()
    }

    /// Checks if there are no cards.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ranks that have exactly `count` cards, from ace to king.
    pub fn ranks_with(&self, count: u8) -> impl DoubleEndedIterator<Item = Rank> + '_ {
        Rank::ranks().filter(move |&r| self.count(r) == count)
    }

    /// The lowest rank that has exactly `count` cards.
    pub fn first_with(&self, count: u8) -> Option<Rank> {
        self.ranks_with(count).next()
    }

    /// Splits the ranks with at least one card into runs of consecutive
    /// ranks, from ace to king.
    pub fn runs(&self) -> Vec<Vec<Rank>> {
        let mut runs: Vec<Vec<Rank>> = Vec::new();
        let mut in_run = false;

        for rank in Rank::ranks() {
            if self.count(rank) == 0 {
                in_run = false;
                continue;
            }

            match runs.last_mut() {
                Some(run) if in_run => run.push(rank),
                _ => runs.push(vec![rank]),
            }

            in_run = true;
        }

        runs
    }

    /// Some rank has a pair.
    pub fn has_pair(&self) -> bool {
        self.first_with(2).is_some()
    }

    /// At least two ranks have a pair.
    pub fn has_two_pair(&self) -> bool {
        self.ranks_with(2).nth(1).is_some()
    }

    /// Some rank has three cards.
    pub fn has_three_of_a_kind(&self) -> bool {
        self.first_with(3).is_some()
    }

    /// Five consecutive ranks, with the ace only at the bottom.
    pub fn has_straight(&self) -> bool {
        let mut sequence = 0;
        for rank in Rank::ranks() {
            if self.count(rank) == 0 {
                sequence = 0;
                continue;
            }

            sequence += 1;
            if sequence == 5 {
                return true;
            }
        }

        false
    }

    /// A three of a kind and a pair.
    pub fn has_full_house(&self) -> bool {
        self.has_pair() && self.has_three_of_a_kind()
    }

    /// Some rank has four cards.
    pub fn has_four_of_a_kind(&self) -> bool {
        self.first_with(4).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawpoker_cards::{Hand, Suit};

    fn tally(hand: &str) -> RankTally {
        RankTally::new(&hand.parse::<Hand>().unwrap())
    }

    #[test]
    fn tally_counts() {
        let t = tally("AH 2H AD AC AS");
        assert_eq!(t.count(Rank::Ace), 4);
        assert_eq!(t.count(Rank::Deuce), 1);
        assert_eq!(t.count(Rank::King), 0);
        assert_eq!(t.len(), 5);

        let t = tally("AD 2D 3D 4D 5D");
        assert!(Rank::ranks().take(5).all(|r| t.count(r) == 1));
        assert!(Rank::ranks().skip(5).all(|r| t.count(r) == 0));

        let t = tally("AD TH 2D 2C JS");
        assert_eq!(t.count(Rank::Deuce), 2);
        assert_eq!(t.count(Rank::Ten), 1);
        assert_eq!(t.count(Rank::Jack), 1);

        let t = RankTally::new([Card::new(Rank::King, Suit::Spades)]);
        assert_eq!(t.len(), 1);
        assert!(RankTally::default().is_empty());
    }

    #[test]
    fn tally_ranks_with() {
        let t = tally("KH KD 5C 5S 2H");
        assert_eq!(
            t.ranks_with(2).collect::<Vec<_>>(),
            vec![Rank::Five, Rank::King]
        );
        assert_eq!(t.first_with(2), Some(Rank::Five));
        assert_eq!(t.first_with(1), Some(Rank::Deuce));
        assert_eq!(t.first_with(3), None);
    }

    #[test]
    fn tally_runs() {
        let t = tally("5H 6D 7C 8S KH");
        assert_eq!(
            t.runs(),
            vec![
                vec![Rank::Five, Rank::Six, Rank::Seven, Rank::Eight],
                vec![Rank::King]
            ]
        );

        let t = tally("AH 3D 5C 7S 9H");
        assert_eq!(t.runs().len(), 5);

        let t = tally("QH KD AC 2S 3H");
        assert_eq!(
            t.runs(),
            vec![
                vec![Rank::Ace, Rank::Deuce, Rank::Trey],
                vec![Rank::Queen, Rank::King]
            ]
        );

        assert!(RankTally::default().runs().is_empty());
    }

    #[test]
    fn tally_predicates() {
        assert!(tally("2H 3D 2C 5S 7H").has_pair());
        assert!(!tally("AH KD 2C 5S 7H").has_pair());

        assert!(tally("AH AD 2C 2S JH").has_two_pair());
        assert!(tally("4H 4D JC JS 2H").has_two_pair());
        assert!(!tally("2H 2D 2C QS KH").has_two_pair());

        assert!(tally("AH AD AC 2S 2H").has_three_of_a_kind());
        assert!(tally("4H 4D JC JS JH").has_three_of_a_kind());
        assert!(!tally("2H 2D AC QS KH").has_three_of_a_kind());

        assert!(tally("AH 2D 3C 4S 5H").has_straight());
        assert!(tally("9H TD JC QS KH").has_straight());
        assert!(!tally("AH 2D 3C QS KH").has_straight());
        assert!(!tally("TH JD QC KS AH").has_straight());

        assert!(tally("AH AD AC 2S 2H").has_full_house());
        assert!(tally("4H 4D JC JS JH").has_full_house());
        assert!(!tally("2H 2D QC QS KH").has_full_house());

        assert!(tally("AH AD AC AS 2H").has_four_of_a_kind());
        assert!(tally("5H 5D 5C 5S JH").has_four_of_a_kind());
        assert!(!tally("AH 2D 3C QS KH").has_four_of_a_kind());
    }
}
