// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cross checks between independent enumerations.
//!
//! The same deck statistics are computed by enumerating ordered triples
//! (permutations) and unordered triples (combinations), the per category
//! probabilities of the two must be identical.
use log::debug;
use tridraw_cards::Deck;

use crate::{Error, FrequencyTable, classify};

/// Classifies every ordered triple of distinct cards in the deck.
///
/// For the full deck this counts 52 * 51 * 50 = 132600 hands.
pub fn permutation_frequencies(deck: &Deck) -> FrequencyTable {
    let cards = deck.cards();
    let mut table = FrequencyTable::default();

    for (i, &c1) in cards.iter().enumerate() {
        for (j, &c2) in cards.iter().enumerate() {
            if i == j {
                continue;
            }

            for (k, &c3) in cards.iter().enumerate() {
                if k == i || k == j {
                    continue;
                }

                table.add(classify(&[c1, c2, c3]));
            }
        }
    }

    debug!("Permutations: {} hands", table.total());
    table
}

/// Classifies every unordered triple of distinct cards in the deck.
///
/// For the full deck this counts 52 choose 3 = 22100 hands.
pub fn combination_frequencies(deck: &Deck) -> FrequencyTable {
    let table = deck
        .combinations::<3>()
        .map(|cards| classify(&cards))
        .collect::<FrequencyTable>();

    debug!("Combinations: {} hands", table.total());
    table
}

/// Checks that two tables give the same probability for every category.
///
/// Probabilities are compared as exact fractions.
pub fn check_consistency(left: &FrequencyTable, right: &FrequencyTable) -> Result<(), Error> {
    let (lt, rt) = (left.total() as u128, right.total() as u128);

    for (category, lc) in left.iter() {
        let rc = right[category];
        if lc as u128 * rt != rc as u128 * lt {
            let (lp, rp) = (left.probabilities(), right.probabilities());
            return Err(Error::Consistency {
                category,
                left: lp[category],
                right: rp[category],
            });
        }
    }

    Ok(())
}
