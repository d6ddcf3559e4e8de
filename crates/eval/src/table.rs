// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Per category tables.
use serde::{Serialize, Serializer};
use std::{iter, ops};

use crate::{HandCategory, Payouts};

/// Number of outcomes for each hand category.
///
/// The table always covers all categories, a missing category has a zero
/// count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrequencyTable([u64; HandCategory::COUNT]);

impl FrequencyTable {
    /// Counts one outcome for the given category.
    #[inline]
    pub fn add(&mut self, category: HandCategory) {
        self.0[category.index()] += 1;
    }

    /// The number of outcomes for a category.
    pub fn count(&self, category: HandCategory) -> u64 {
        self.0[category.index()]
    }

    /// The total number of outcomes.
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// Iterates categories with their count.
    pub fn iter(&self) -> impl Iterator<Item = (HandCategory, u64)> + '_ {
        HandCategory::ALL.into_iter().zip(self.0.iter().copied())
    }

    /// Returns a table with every count multiplied by `factor`.
    pub fn scaled(&self, factor: u64) -> Self {
        Self(self.0.map(|c| c * factor))
    }

    /// Sum of payouts over all outcomes.
    pub fn payout(&self, payouts: &Payouts) -> u64 {
        self.iter()
            .map(|(category, count)| count * u64::from(payouts.payout(category)))
            .sum()
    }

    /// The probability of each category, all zeros for an empty table.
    pub fn probabilities(&self) -> CategoryValues {
        let total = self.total();
        if total == 0 {
            return CategoryValues::default();
        }

        CategoryValues(self.0.map(|c| c as f64 / total as f64))
    }

    /// The expected return of each category, its probability times its payout.
    pub fn expected_returns(&self, payouts: &Payouts) -> CategoryValues {
        let probs = self.probabilities();
        CategoryValues(HandCategory::ALL.map(|c| payouts.payout(c) as f64 * probs[c]))
    }

    /// The total expected return.
    pub fn expected_return(&self, payouts: &Payouts) -> f64 {
        self.expected_returns(payouts).sum()
    }
}

impl ops::Index<HandCategory> for FrequencyTable {
    type Output = u64;

    fn index(&self, category: HandCategory) -> &Self::Output {
        &self.0[category.index()]
    }
}

impl ops::AddAssign for FrequencyTable {
    fn add_assign(&mut self, rhs: Self) {
        for (l, r) in self.0.iter_mut().zip(rhs.0) {
            *l += r;
        }
    }
}

impl ops::Add for FrequencyTable {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl iter::Sum for FrequencyTable {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), ops::Add::add)
    }
}

impl FromIterator<HandCategory> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = HandCategory>>(iter: T) -> Self {
        let mut table = Self::default();
        iter.into_iter().for_each(|c| table.add(c));
        table
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// A floating point value for each hand category.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CategoryValues([f64; HandCategory::COUNT]);

impl CategoryValues {
    /// Iterates categories with their value.
    pub fn iter(&self) -> impl Iterator<Item = (HandCategory, f64)> + '_ {
        HandCategory::ALL.into_iter().zip(self.0.iter().copied())
    }

    /// Sum of values in category order.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl ops::Index<HandCategory> for CategoryValues {
    type Output = f64;

    fn index(&self, category: HandCategory) -> &Self::Output {
        &self.0[category.index()]
    }
}

impl Serialize for CategoryValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
