// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards errors.
use thiserror::Error;

use crate::Card;

/// Errors returned when building cards, hands, or dealing from a deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardsError {
    /// The text is not a valid card.
    #[error("invalid card `{0}`")]
    InvalidCard(String),
    /// A hand must have exactly five cards.
    #[error("invalid hand with {0} cards")]
    InvalidHand(usize),
    /// The same card appears twice in a hand.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// There are no more cards in the deck.
    #[error("the deck is empty")]
    EmptyDeck,
}
