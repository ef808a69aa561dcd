// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A simple example bot strategy.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;

use drawpoker_bot::{
    Config, KeepSet, Strategy,
    eval::{Category, Hand, HandValue},
};

/// Keeps the hand if it has at least a pair, else draws five new cards.
struct PairOrNothing;

impl Strategy for PairOrNothing {
    fn choose_keep(&mut self, hand: &Hand) -> KeepSet {
        if HandValue::eval(hand).category() >= Category::OnePair {
            KeepSet::new(hand.iter().collect())
        } else {
            KeepSet::default()
        }
    }
}

#[derive(Debug, Parser)]
struct Cli {
    /// Number of rounds to play.
    #[clap(long, short, default_value_t = 100_000)]
    rounds: u64,
    /// Number of parallel tasks.
    #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=64))]
    tasks: u16,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = Config {
        rounds: cli.rounds,
        tasks: cli.tasks as usize,
        seed: None,
    };

    let stats = drawpoker_bot::run(&config, || PairOrNothing)?;
    println!("{stats}");

    Ok(())
}
