// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator errors.
use thiserror::Error;
use tridraw_cards::CardError;

use crate::HandCategory;

/// Errors returned by the evaluator.
#[derive(Debug, Error)]
pub enum Error {
    /// Two enumeration methods computed different probabilities.
    #[error("{category} probability mismatch: {left} != {right}")]
    Consistency {
        /// The first category that doesn't match.
        category: HandCategory,
        /// The probability from the first table.
        left: f64,
        /// The probability from the second table.
        right: f64,
    },
    /// A malformed card or hand.
    #[error(transparent)]
    Card(#[from] CardError),
    /// A payout schedule that cannot be parsed.
    #[error("invalid payouts '{0}', expected 8 comma separated non negative integers")]
    InvalidPayouts(String),
}
