// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Tridraw payout tables CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum, value_parser};
use log::{error, info};
use std::{process::ExitCode, time::Instant};

use tridraw_eval::{Card, Deck, EmptyHold, EvalConfig, Evaluator, Hand, Payouts, Weighting};

mod output;

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    /// How to evaluate a hold that discards all the cards.
    #[clap(long, value_enum, global = true, default_value_t = EmptyHoldArg::Baseline)]
    empty_hold: EmptyHoldArg,
    /// How hands are weighted in the deck-wide table.
    #[clap(long, value_enum, global = true, default_value_t = WeightingArg::Outcomes)]
    weighting: WeightingArg,
    /// Comma separated payouts from royal flush to high card.
    #[clap(long, global = true, default_value_t = Payouts::STANDARD)]
    payouts: Payouts,
    /// Number of parallel tasks for the deck-wide table.
    #[clap(long, short, global = true, default_value_t = 1, value_parser = value_parser!(u16).range(1..=256))]
    tasks: u16,
    /// Print results as JSON.
    #[clap(long, global = true)]
    json: bool,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Deck-wide payout table when each hand is played with its best hold.
    Table,
    /// Deck-wide payout table when hands are played as dealt.
    Baseline,
    /// Evaluates all the holds of a hand.
    Hand {
        /// The hand cards, for example QH KH AH.
        #[clap(num_args = 3, required_unless_present = "random")]
        cards: Vec<Card>,
        /// Deal a random hand.
        #[clap(long, conflicts_with = "cards")]
        random: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EmptyHoldArg {
    /// Use the table of all the hands in the full deck.
    Baseline,
    /// Draw three cards from the deck without the discarded hand.
    Redraw,
}

impl From<EmptyHoldArg> for EmptyHold {
    fn from(arg: EmptyHoldArg) -> Self {
        match arg {
            EmptyHoldArg::Baseline => EmptyHold::Baseline,
            EmptyHoldArg::Redraw => EmptyHold::Redraw,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum WeightingArg {
    /// Sum the outcomes of each hand best hold.
    Outcomes,
    /// Give every hand the same weight.
    PerHand,
}

impl From<WeightingArg> for Weighting {
    fn from(arg: WeightingArg) -> Self {
        match arg {
            WeightingArg::Outcomes => Weighting::Outcomes,
            WeightingArg::PerHand => Weighting::PerHand,
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = EvalConfig {
        payouts: cli.payouts,
        empty_hold: cli.empty_hold.into(),
        weighting: cli.weighting.into(),
    };

    let eval = Evaluator::new(config);

    match cli.command.unwrap_or(Command::Table) {
        Command::Table => {
            let now = Instant::now();
            let report = match cli.tasks {
                1 => eval.optimal_play()?,
                n => eval.par_optimal_play(n as usize)?,
            };

            info!("Elapsed {:.3}s", now.elapsed().as_secs_f64());
            output::report(&config, &report, cli.json)
        }
        Command::Baseline => {
            let baseline = eval.baseline()?;
            output::baseline(&config, &baseline, cli.json)
        }
        Command::Hand { cards, random } => {
            let hand = if random {
                let mut deck = Deck::new_and_shuffled(&mut rand::rng());
                Hand::deal(&mut deck).ok_or_else(|| anyhow!("Not enough cards to deal a hand"))?
            } else {
                Hand::try_from(cards.as_slice())?
            };

            let analysis = eval.analyze(&hand);
            output::analysis(&config, &analysis, cli.json)
        }
    }
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_defaults() {
        let cli = Cli::try_parse_from(["tridraw"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.payouts, Payouts::STANDARD);
        assert_eq!(cli.tasks, 1);
        assert!(!cli.json);
        assert_eq!(EmptyHold::from(cli.empty_hold), EmptyHold::Baseline);
        assert_eq!(Weighting::from(cli.weighting), Weighting::Outcomes);
    }

    #[test]
    fn parse_options() {
        let cli = Cli::try_parse_from([
            "tridraw",
            "table",
            "--empty-hold",
            "redraw",
            "--weighting",
            "per-hand",
            "--payouts",
            "800,60,100,30,6,4,1,0",
            "-t",
            "4",
            "--json",
        ])
        .unwrap();

        assert!(matches!(cli.command, Some(Command::Table)));
        assert_eq!(EmptyHold::from(cli.empty_hold), EmptyHold::Redraw);
        assert_eq!(Weighting::from(cli.weighting), Weighting::PerHand);
        assert_eq!(cli.payouts.to_string(), "800,60,100,30,6,4,1,0");
        assert_eq!(cli.tasks, 4);
        assert!(cli.json);
    }

    #[test]
    fn parse_hand() {
        let cli = Cli::try_parse_from(["tridraw", "hand", "QH", "KH", "AH"]).unwrap();
        let Some(Command::Hand { cards, random }) = cli.command else {
            panic!("expected hand command");
        };

        assert!(!random);
        assert_eq!(Hand::try_from(cards.as_slice()).unwrap().to_string(), "QH KH AH");

        let cli = Cli::try_parse_from(["tridraw", "hand", "--random"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Hand { random: true, .. })));
    }

    #[test]
    fn reject_invalid() {
        assert!(Cli::try_parse_from(["tridraw", "hand", "QH", "KH"]).is_err());
        assert!(Cli::try_parse_from(["tridraw", "hand", "QH", "KH", "ZZ"]).is_err());
        assert!(Cli::try_parse_from(["tridraw", "hand"]).is_err());
        assert!(Cli::try_parse_from(["tridraw", "--payouts", "1,2,3"]).is_err());
        assert!(Cli::try_parse_from(["tridraw", "--tasks", "0"]).is_err());
    }
}
