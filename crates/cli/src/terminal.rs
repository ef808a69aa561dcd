// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal game loop.
use anyhow::Result;
use crossterm::style::{StyledContent, Stylize};
use log::debug;
use rand::prelude::*;
use std::io::{BufRead, Write};

use drawpoker_bot::{
    DiscardStrategy, KeepSet,
    eval::{Card, Category, Deck, Hand, HandValue, Outcome, Rank, Suit},
};

/// A game between the player and the bot.
///
/// The game reads the player choices from `input` and writes to `output` so
/// that it can be driven by a terminal or by a script.
pub struct Game<R, W> {
    input: R,
    output: W,
    rng: StdRng,
    bot: DiscardStrategy,
}

impl<R: BufRead, W: Write> Game<R, W> {
    /// Creates a new game, a seed makes the deals reproducible.
    pub fn new(input: R, output: W, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            input,
            output,
            rng,
            bot: DiscardStrategy,
        }
    }

    /// Plays rounds until the player quits or the input is closed.
    pub fn run(&mut self) -> Result<()> {
        if !self.greet()? {
            return Ok(());
        }

        loop {
            if self.play_round()?.is_none() {
                break;
            }

            match self.prompt("Would you like to play again (y/n): ")? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {}
                _ => break,
            }
        }

        Ok(())
    }

    fn greet(&mut self) -> Result<bool> {
        writeln!(self.output, "{}", "Welcome to the Poker Championship".bold())?;
        writeln!(self.output, "=================================")?;
        writeln!(self.output)?;

        for category in Category::categories().rev().filter(|&c| c != Category::HighCard) {
            writeln!(self.output, "{:>2}:{:>17}", category.points(), category)?;
        }

        writeln!(self.output)?;
        writeln!(self.output, "*** King is the Highest Rank ***")?;
        writeln!(self.output, "================================")?;

        let ready = self.prompt("press enter to continue...")?.is_some();
        writeln!(self.output, "--------------------------------")?;
        Ok(ready)
    }

    /// Plays a round, returns None if the input was closed before the draw.
    fn play_round(&mut self) -> Result<Option<Outcome>> {
        let mut deck = Deck::new_and_shuffled(&mut self.rng);
        let hands = deck.deal_hands(2)?;

        writeln!(self.output, "Your Hand:")?;
        let organized = HandValue::eval(&hands[0]).organized().to_vec();
        self.print_cards(&organized)?;

        writeln!(self.output, "invalid input will discard the card")?;
        let Some(line) = self.prompt("what Card(s) would you like to keep Ex.351: ")? else {
            return Ok(None);
        };

        let keep = parse_keep(&line, &organized);
        let player = deck.refill(&keep)?;
        let bot = drawpoker_bot::draw(&mut deck, &hands[1], &mut self.bot)?;
        debug!("Player drew {}, bot drew {}", player, bot);

        let outcome = self.show_result(&player, &bot)?;
        Ok(Some(outcome))
    }

    fn show_result(&mut self, player: &Hand, bot: &Hand) -> Result<Outcome> {
        let player = HandValue::eval(player);
        let bot = HandValue::eval(bot);

        writeln!(self.output, "{}", "YOUR HAND".bold())?;
        writeln!(self.output, "==============")?;
        self.print_cards(player.organized())?;
        writeln!(self.output, "\n")?;

        writeln!(self.output, "{}", "CPU HAND".bold())?;
        writeln!(self.output, "==============")?;
        self.print_cards(bot.organized())?;
        writeln!(self.output, "\n")?;

        let outcome = Outcome::from(player.cmp(&bot));
        let message = result_message(player.category(), bot.category(), outcome);
        writeln!(self.output, "{}", message.bold().dark_yellow())?;

        Ok(outcome)
    }

    fn print_cards(&mut self, cards: &[Card]) -> Result<()> {
        for (idx, card) in cards.iter().enumerate() {
            writeln!(self.output, "   C{}: {}", idx + 1, styled_card(*card))?;
        }

        self.output.flush()?;
        Ok(())
    }

    /// Reads a line from the input, returns None at the end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line))
    }
}

/// Parses the player keep choices, the card positions from 1 to 5 found in
/// the line, any other character is ignored.
pub fn parse_keep(line: &str, organized: &[Card]) -> KeepSet {
    let cards = organized
        .iter()
        .enumerate()
        .filter(|(idx, _)| {
            char::from_digit(*idx as u32 + 1, 10).is_some_and(|pos| line.contains(pos))
        })
        .map(|(_, card)| *card)
        .collect();

    KeepSet::new(cards)
}

/// The result line for a round.
pub fn result_message(first: Category, second: Category, outcome: Outcome) -> String {
    match outcome {
        Outcome::First if first > second => format!("HAND ONE WINS WITH: {first}"),
        Outcome::Second if second > first => format!("HAND TWO WINS WITH: {second}"),
        Outcome::First => "HAND ONE WINS WITH: Highest Card".to_string(),
        Outcome::Second => "HAND TWO WINS WITH: Highest Card".to_string(),
        Outcome::Tie => "SPLIT POT".to_string(),
    }
}

fn styled_card(card: Card) -> StyledContent<String> {
    let rank = match card.rank() {
        r @ (Rank::Ace | Rank::Jack | Rank::Queen | Rank::King) => r.to_string(),
        r => r.value().to_string(),
    };

    let suit = match card.suit() {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    };

    let text = format!("{rank:>2} of {suit}");
    match card.suit() {
        Suit::Hearts | Suit::Diamonds => text.red(),
        Suit::Clubs | Suit::Spades => text.white(),
    }
}
