// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Tridraw three-card draw poker payout evaluator.
//!
//! Three cards hands are classified in one of 8 [HandCategory], each with a
//! payout multiple from a [Payouts] schedule. Before drawing a player keeps
//! any subset of the dealt cards, a [Hold], and replaces the others with
//! cards from the rest of the deck.
//!
//! The [Evaluator] enumerates every draw for each hold and finds the hold
//! with the highest expected return:
//!
//! ```
//! # use tridraw_eval::*;
//! let eval = Evaluator::default();
//! let hand = "QH KH AH".parse::<Hand>().unwrap();
//!
//! let analysis = eval.analyze(&hand);
//! assert_eq!(analysis.category, HandCategory::RoyalFlush);
//! assert_eq!(analysis.best.hold, Hold::KEEP_ALL);
//! assert_eq!(analysis.best.expected_return, 250.0);
//! ```
//!
//! and aggregates the best holds of all the hands in the deck in a
//! [PayoutReport] with [Evaluator::optimal_play]. The no draw report is
//! computed with [Evaluator::baseline], that also checks that counting
//! ordered and unordered hands gives the same probabilities:
//!
//! ```
//! # use tridraw_eval::*;
//! let report = Evaluator::default().baseline().unwrap().report;
//! assert_eq!(report.hands, 22_100);
//! assert_eq!(report.frequencies[HandCategory::RoyalFlush], 4);
//! assert!((report.probabilities.sum() - 1.0).abs() < 1e-9);
//! ```
//!
//! The **`parallel`** feature enables [Evaluator::par_optimal_play] that
//! splits the hands between a number of threads.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod category;
pub use category::{HandCategory, Payouts};

pub mod check;

mod classify;
pub use classify::classify;

mod error;
pub use error::Error;

mod evaluator;
pub use evaluator::{
    BaselineReport, EmptyHold, EvalConfig, Evaluator, HandAnalysis, HoldEvaluation, PayoutReport,
    Weighting,
};

mod hold;
pub use hold::Hold;

#[cfg(feature = "parallel")]
mod parallel;

mod table;
pub use table::{CategoryValues, FrequencyTable};

// Reexport cards types.
pub use tridraw_cards::{Card, CardError, Deck, Hand, Rank, Suit};
