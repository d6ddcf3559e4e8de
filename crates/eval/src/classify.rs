// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Three cards hand classifier.
use tridraw_cards::Card;

use crate::HandCategory;

/// Returns the category of a three cards hand.
///
/// Aces are low except for the queen, king, ace straight, so ace, deuce, trey
/// is a straight and king, ace, deuce is not. The result doesn't depend on
/// the order of the cards.
pub fn classify(cards: &[Card; 3]) -> HandCategory {
    let mut cards = *cards;
    cards.sort_by_key(Card::value);

    let [c1, c2, c3] = cards;
    let (v1, v2, v3) = (c1.value(), c2.value(), c3.value());

    let flush = c1.suit() == c2.suit() && c2.suit() == c3.suit();
    let mut straight = false;

    // Queen, king, ace is the only straight with a high ace.
    if (v1, v2, v3) == (1, 12, 13) {
        if flush {
            return HandCategory::RoyalFlush;
        }

        straight = true;
    }

    if straight || (v1 + 1 == v2 && v2 + 1 == v3) {
        if flush {
            return HandCategory::StraightFlush;
        }

        straight = true;
    }

    if v1 == 1 && v2 == 1 && v3 == 1 {
        return HandCategory::ThreeAces;
    }

    if v1 == v2 && v2 == v3 {
        return HandCategory::ThreeOfAKind;
    }

    if straight {
        return HandCategory::Straight;
    }

    if flush {
        return HandCategory::Flush;
    }

    // Sorted so no need to check first against last.
    if v1 == v2 || v2 == v3 {
        return HandCategory::Pair;
    }

    HandCategory::HighCard
}
