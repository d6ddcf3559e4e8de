// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and payout schedules.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::Error;

/// A three cards hand category, ordered from the highest payout to the lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// Queen, king and ace of the same suit.
    RoyalFlush = 0,
    /// Three consecutive ranks of the same suit.
    StraightFlush,
    /// Three aces.
    ThreeAces,
    /// Three cards of the same rank other than aces.
    ThreeOfAKind,
    /// Three consecutive ranks.
    Straight,
    /// Three cards of the same suit.
    Flush,
    /// Two cards of the same rank.
    Pair,
    /// None of the above.
    HighCard,
}

impl HandCategory {
    /// The number of categories.
    pub const COUNT: usize = 8;

    /// All categories from the highest payout to the lowest.
    pub const ALL: [HandCategory; Self::COUNT] = [
        HandCategory::RoyalFlush,
        HandCategory::StraightFlush,
        HandCategory::ThreeAces,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::Pair,
        HandCategory::HighCard,
    ];

    /// This category position in [HandCategory::ALL].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::RoyalFlush => "Royal Flush",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::ThreeAces => "Three Aces",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::Pair => "Pair",
            HandCategory::HighCard => "High Card",
        };

        f.pad(name)
    }
}

/// The payout multiple for each hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payouts([u32; HandCategory::COUNT]);

impl Payouts {
    /// The standard schedule.
    pub const STANDARD: Payouts = Payouts([250, 50, 100, 40, 10, 5, 1, 0]);

    /// Creates a schedule from payouts in [HandCategory::ALL] order.
    pub const fn new(payouts: [u32; HandCategory::COUNT]) -> Self {
        Self(payouts)
    }

    /// The payout for a category.
    #[inline]
    pub fn payout(&self, category: HandCategory) -> u32 {
        self.0[category.index()]
    }

    /// Iterates categories with their payout.
    pub fn iter(&self) -> impl Iterator<Item = (HandCategory, u32)> + '_ {
        HandCategory::ALL.into_iter().zip(self.0.iter().copied())
    }
}

impl Default for Payouts {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl FromStr for Payouts {
    type Err = Error;

    /// Parses 8 comma separated payouts in [HandCategory::ALL] order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidPayouts(s.to_string());

        let values = s
            .split(',')
            .map(|v| v.trim().parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;

        let payouts = <[u32; HandCategory::COUNT]>::try_from(values).map_err(|_| invalid())?;
        Ok(Self(payouts))
    }
}

impl fmt::Display for Payouts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self.0.map(|v| v.to_string());
        write!(f, "{}", values.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_order() {
        for (idx, category) in HandCategory::ALL.into_iter().enumerate() {
            assert_eq!(category.index(), idx);
        }

        assert!(HandCategory::RoyalFlush < HandCategory::HighCard);
        assert_eq!(HandCategory::ThreeOfAKind.to_string(), "Three of a Kind");
        assert_eq!(format!("{:>6}", HandCategory::Pair), "  Pair");
    }

    #[test]
    fn standard_payouts() {
        let payouts = Payouts::default();
        assert_eq!(payouts.payout(HandCategory::RoyalFlush), 250);
        assert_eq!(payouts.payout(HandCategory::StraightFlush), 50);
        assert_eq!(payouts.payout(HandCategory::ThreeAces), 100);
        assert_eq!(payouts.payout(HandCategory::ThreeOfAKind), 40);
        assert_eq!(payouts.payout(HandCategory::Straight), 10);
        assert_eq!(payouts.payout(HandCategory::Flush), 5);
        assert_eq!(payouts.payout(HandCategory::Pair), 1);
        assert_eq!(payouts.payout(HandCategory::HighCard), 0);
        assert_eq!(payouts.iter().count(), HandCategory::COUNT);
    }

    #[test]
    fn parse_payouts() {
        let payouts = "250,50,100,40,10,5,1,0".parse::<Payouts>().unwrap();
        assert_eq!(payouts, Payouts::STANDARD);
        assert_eq!(payouts.to_string(), "250,50,100,40,10,5,1,0");

        let payouts = "800, 60, 100, 30, 6, 4, 1, 0".parse::<Payouts>().unwrap();
        assert_eq!(payouts.payout(HandCategory::RoyalFlush), 800);

        assert!(matches!(
            "1,2,3".parse::<Payouts>(),
            Err(Error::InvalidPayouts(_))
        ));
        assert!(matches!(
            "250,50,100,40,10,5,1,-1".parse::<Payouts>(),
            Err(Error::InvalidPayouts(_))
        ));
    }
}
