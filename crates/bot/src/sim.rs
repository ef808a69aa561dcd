// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Head to head rounds and simulation.
use anyhow::{Result, anyhow, ensure};
use log::{debug, info};
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, thread, time::Instant};

use drawpoker_eval::{CardsError, Deck, Hand, Outcome, compare};

use crate::{StandPat, Strategy};

/// Simulation configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of rounds to play.
    pub rounds: u64,
    /// Number of parallel tasks.
    pub tasks: usize,
    /// Optional seed, each task uses `seed + task_id`.
    pub seed: Option<u64>,
}

/// The final hands of a round and its outcome.
#[derive(Debug, Clone, Copy)]
pub struct Round {
    /// The first player final hand.
    pub first: Hand,
    /// The second player final hand.
    pub second: Hand,
    /// The round outcome.
    pub outcome: Outcome,
}

/// Discards the cards not chosen by a strategy and refills the hand.
pub fn draw<S>(deck: &mut Deck, hand: &Hand, strategy: &mut S) -> Result<Hand, CardsError>
where
    S: Strategy + ?Sized,
{
    let keep = strategy.choose_keep(hand);
    deck.refill(&keep)
}

/// Deals two hands, lets each strategy draw, and compares the final hands.
pub fn play_round<A, B>(deck: &mut Deck, first: &mut A, second: &mut B) -> Result<Round, CardsError>
where
    A: Strategy + ?Sized,
    B: Strategy + ?Sized,
{
    let hands = deck.deal_hands(2)?;
    let first = draw(deck, &hands[0], first)?;
    let second = draw(deck, &hands[1], second)?;
    let outcome = compare(&first, &second);

    Ok(Round {
        first,
        second,
        outcome,
    })
}

/// Simulation results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Rounds won by the first hand.
    pub first: u64,
    /// Rounds won by the second hand.
    pub second: u64,
    /// Split rounds.
    pub ties: u64,
}

impl Stats {
    /// Total number of rounds.
    pub fn rounds(&self) -> u64 {
        self.first + self.second + self.ties
    }

    /// Adds a round outcome.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::First => self.first += 1,
            Outcome::Second => self.second += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    fn merge(mut self, other: Stats) -> Stats {
        self.first += other.first;
        self.second += other.second;
        self.ties += other.ties;
        self
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "No Discard:        {}", self.first)?;
        writeln!(f, "Strategic Discard: {}", self.second)?;
        write!(f, "Split Pot:         {}", self.ties)
    }
}

/// Runs the simulation, a hand that stands pat plays against a hand that
/// draws using the strategy returned by the factory, the factory is called
/// once for each task.
pub fn run<F, S>(config: &Config, factory: F) -> Result<Stats>
where
    F: Fn() -> S + Sync,
    S: Strategy,
{
    ensure!(config.tasks > 0, "the number of tasks must be positive");

    let now = Instant::now();
    let tasks = config.tasks as u64;
    let factory = &factory;

    let stats = thread::scope(|s| {
        let handles = (0..tasks)
            .map(|task_id| {
                // Spread the remainder over the first tasks.
                let rounds = config.rounds / tasks + u64::from(task_id < config.rounds % tasks);
                let mut rng = match config.seed {
                    Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(task_id)),
                    None => SmallRng::from_os_rng(),
                };

                s.spawn(move || -> Result<Stats> {
                    let mut strategy = factory();
                    let mut stats = Stats::default();

                    for _ in 0..rounds {
                        let mut deck = Deck::new_and_shuffled(&mut rng);
                        let round = play_round(&mut deck, &mut StandPat, &mut strategy)?;
                        stats.record(round.outcome);
                    }

                    debug!("Task {task_id} completed {rounds} rounds");
                    Ok(stats)
                })
            })
            .collect::<Vec<_>>();

        handles.into_iter().try_fold(Stats::default(), |acc, h| {
            let stats = h.join().map_err(|_| anyhow!("simulation task panicked"))??;
            Ok::<_, anyhow::Error>(acc.merge(stats))
        })
    })?;

    info!(
        "Played {} rounds with {} tasks in {:.3}s",
        stats.rounds(),
        config.tasks,
        now.elapsed().as_secs_f64()
    );

    Ok(stats)
}
