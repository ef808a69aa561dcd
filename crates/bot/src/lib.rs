// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw poker bot.
//!
//! A rule based [DiscardStrategy] that chooses which cards to keep before the
//! draw, and a simulation that plays it against a hand that never draws:
//!
//! ```
//! # use drawpoker_bot::*;
//! let hand = "KH KD 7C 4S 2H".parse().unwrap();
//! let keep = DiscardStrategy.choose_keep(&hand);
//! assert_eq!(keep.len(), 2);
//!
//! let config = Config { rounds: 100, tasks: 2, seed: Some(1) };
//! let stats = drawpoker_bot::run(&config, || DiscardStrategy).unwrap();
//! assert_eq!(stats.rounds(), 100);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod sim;
pub use sim::{Config, Round, Stats, draw, play_round, run};

mod strategy;
pub use strategy::{DiscardStrategy, KeepSet, StandPat, Strategy};

// Reexport evaluator types.
pub use drawpoker_eval as eval;
