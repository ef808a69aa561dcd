// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw poker bot simulation.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::error;

use drawpoker_bot::DiscardStrategy;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of rounds to play.
    #[clap(long, short, default_value_t = 1_000_000)]
    rounds: u64,
    /// Number of parallel tasks.
    #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=64))]
    tasks: u16,
    /// Seed for reproducible runs.
    #[clap(long, short)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = drawpoker_bot::Config {
        rounds: cli.rounds,
        tasks: cli.tasks as usize,
        seed: cli.seed,
    };

    match drawpoker_bot::run(&config, || DiscardStrategy) {
        Ok(stats) => {
            println!("{stats}");
            Ok(())
        }
        Err(e) => {
            error!("{e}");
            Err(e)
        }
    }
}
