// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw poker terminal game.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::error;
use std::io;

pub mod terminal;

#[derive(Debug, Parser)]
struct Cli {
    /// Seed for a reproducible game.
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

    let mut game = terminal::Game::new(io::stdin().lock(), io::stdout(), cli.seed);
    if let Err(e) = game.run() {
        error!("{e}");
        return Err(e);
    }

    Ok(())
}
