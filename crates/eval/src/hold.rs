// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw decisions.
use serde::{Deserialize, Serialize};
use std::fmt;
use tridraw_cards::{Card, Hand};

/// The cards kept from a hand before drawing.
///
/// A hold is a bit mask, bit i set means the card at position i is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Hold(u8);

impl Hold {
    /// Draw three new cards.
    pub const DISCARD_ALL: Hold = Hold(0b000);

    /// Keep the hand as dealt.
    pub const KEEP_ALL: Hold = Hold(0b111);

    /// Creates a hold from a mask, only the lower 3 bits are used.
    pub const fn from_mask(mask: u8) -> Self {
        Self(mask & 0b111)
    }

    /// Creates a hold from the kept positions, fails for positions > 2.
    pub fn from_positions(positions: &[usize]) -> Option<Self> {
        positions
            .iter()
            .try_fold(0u8, |mask, &pos| (pos < Hand::SIZE).then(|| mask | (1 << pos)))
            .map(Self)
    }

    /// All holds in mask order.
    pub fn all() -> impl DoubleEndedIterator<Item = Hold> + ExactSizeIterator {
        (0..8).map(Hold)
    }

    /// The hold mask.
    pub fn mask(&self) -> u8 {
        self.0
    }

    /// Checks if the card at a position is kept.
    pub fn keeps(&self, pos: usize) -> bool {
        pos < Hand::SIZE && self.0 & (1 << pos) != 0
    }

    /// The number of kept cards.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Checks if all cards are discarded.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The number of cards to draw.
    pub fn draws(&self) -> usize {
        Hand::SIZE - self.len()
    }

    /// The kept positions in increasing order.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        (0..Hand::SIZE).filter(|&pos| self.keeps(pos))
    }

    /// The kept cards from a hand.
    pub fn kept(&self, hand: &Hand) -> Vec<Card> {
        self.positions().map(|pos| hand[pos]).collect()
    }
}

impl fmt::Display for Hold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let positions = self.positions().map(|p| p.to_string()).collect::<Vec<_>>();
        write!(f, "[{}]", positions.join(", "))
    }
}
