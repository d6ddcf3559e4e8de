// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw decisions evaluation and deck-wide payout tables.
//!
//! The [Evaluator] enumerates every draw for each of the 8 holds of a hand,
//! picks the hold with the highest expected return, and aggregates the
//! optimal holds of all the 22100 three cards hands into a [PayoutReport].
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use tridraw_cards::{Card, Deck, Hand, Rank, Suit, nck};

use crate::{
    CategoryValues, Error, FrequencyTable, HandCategory, Hold, Payouts,
    check::{check_consistency, combination_frequencies, permutation_frequencies},
    classify,
};

/// How a hold that discards all cards is evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmptyHold {
    /// Use the table of all the hands in the full deck.
    #[default]
    Baseline,
    /// Draw three cards from the deck without the discarded hand.
    Redraw,
}

/// How hands contribute to the deck-wide table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weighting {
    /// Sum the outcome counts of each hand best hold.
    #[default]
    Outcomes,
    /// Scale each hand table to a common number of outcomes so that every
    /// hand has the same weight.
    PerHand,
}

/// Evaluator configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalConfig {
    /// The payout schedule.
    pub payouts: Payouts,
    /// The discard all hold evaluation.
    pub empty_hold: EmptyHold,
    /// The deck-wide aggregation weighting.
    pub weighting: Weighting,
}

/// The outcomes of a hold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldEvaluation {
    /// The evaluated hold.
    pub hold: Hold,
    /// The categories of all the enumerated draws.
    pub frequencies: FrequencyTable,
    /// The number of enumerated draws.
    pub outcomes: u64,
    /// The sum of the payouts of all the draws.
    pub payout: u64,
    /// The expected return of this hold.
    pub expected_return: f64,
}

impl HoldEvaluation {
    fn new(hold: Hold, frequencies: FrequencyTable, payouts: &Payouts) -> Self {
        Self {
            hold,
            frequencies,
            outcomes: frequencies.total(),
            payout: frequencies.payout(payouts),
            expected_return: frequencies.expected_return(payouts),
        }
    }

    /// Checks if this hold has a strictly higher expected return than other.
    ///
    /// Returns are compared as exact fractions.
    pub fn beats(&self, other: &HoldEvaluation) -> bool {
        self.payout as u128 * other.outcomes as u128 > other.payout as u128 * self.outcomes as u128
    }
}

/// Keeps the current best unless the next evaluation beats it.
fn pick(best: HoldEvaluation, next: HoldEvaluation) -> HoldEvaluation {
    if next.beats(&best) { next } else { best }
}

/// The evaluation of all the holds of a hand.
#[derive(Debug, Clone, Serialize)]
pub struct HandAnalysis {
    /// The evaluated hand.
    pub hand: Hand,
    /// The hand category as dealt.
    pub category: HandCategory,
    /// All the holds in mask order.
    pub holds: Vec<HoldEvaluation>,
    /// The hold with the highest expected return.
    pub best: HoldEvaluation,
}

/// Frequencies, probabilities and returns for a set of hands.
#[derive(Debug, Clone, Serialize)]
pub struct PayoutReport {
    /// The number of hands dealt.
    pub hands: u64,
    /// The outcomes count for each category.
    pub frequencies: FrequencyTable,
    /// The total number of outcomes.
    pub outcomes: u64,
    /// Each category probability.
    pub probabilities: CategoryValues,
    /// Each category expected return.
    pub returns: CategoryValues,
    /// The expected return per hand.
    pub total_return: f64,
}

impl PayoutReport {
    /// Creates a report from a frequency table.
    pub fn new(hands: u64, frequencies: FrequencyTable, payouts: &Payouts) -> Self {
        let returns = frequencies.expected_returns(payouts);
        Self {
            hands,
            frequencies,
            outcomes: frequencies.total(),
            probabilities: frequencies.probabilities(),
            returns,
            total_return: returns.sum(),
        }
    }
}

/// The no draw report checked against the permutations count.
#[derive(Debug, Clone, Serialize)]
pub struct BaselineReport {
    /// Frequencies from ordered hands.
    pub permutations: FrequencyTable,
    /// The report from unordered hands.
    #[serde(flatten)]
    pub report: PayoutReport,
}

/// Three card draw evaluator.
#[derive(Debug, Clone)]
pub struct Evaluator {
    config: EvalConfig,
    deck: Deck,
    baseline: FrequencyTable,
    common_outcomes: u64,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(EvalConfig::default())
    }
}

impl Evaluator {
    /// Creates an evaluator for a full deck.
    pub fn new(config: EvalConfig) -> Self {
        let deck = Deck::default();
        let baseline = combination_frequencies(&deck);

        // All possible outcome counts for a hand best hold.
        let remaining = Deck::SIZE - Hand::SIZE;
        let empty_outcomes = match config.empty_hold {
            EmptyHold::Baseline => baseline.total(),
            EmptyHold::Redraw => nck(remaining, 3) as u64,
        };

        let common_outcomes = [nck(remaining, 1) as u64, nck(remaining, 2) as u64, empty_outcomes]
            .into_iter()
            .fold(1, lcm);

        debug!("Evaluator {config:?} common outcomes {common_outcomes}");

        Self {
            config,
            deck,
            baseline,
            common_outcomes,
        }
    }

    /// The evaluator configuration.
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// The full deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The frequencies of all the hands in the full deck.
    pub fn baseline_frequencies(&self) -> &FrequencyTable {
        &self.baseline
    }

    /// The number of outcomes each hand is scaled to with [Weighting::PerHand].
    pub fn common_outcomes(&self) -> u64 {
        self.common_outcomes
    }

    /// Evaluates a hold by enumerating all the draws from the remaining deck.
    ///
    /// The remaining deck must not contain the hand cards.
    pub fn evaluate_hold(&self, hand: &Hand, hold: Hold, remaining: &Deck) -> HoldEvaluation {
        debug_assert!(hand.cards().iter().all(|&c| !remaining.contains(c)));

        let kept = hold.kept(hand);
        let frequencies = match hold.draws() {
            0 => draw::<0>(&kept, remaining),
            1 => draw::<1>(&kept, remaining),
            2 => draw::<2>(&kept, remaining),
            _ => match self.config.empty_hold {
                EmptyHold::Baseline => self.baseline,
                EmptyHold::Redraw => draw::<3>(&kept, remaining),
            },
        };

        HoldEvaluation::new(hold, frequencies, &self.config.payouts)
    }

    /// Evaluates all the holds of a hand in mask order.
    pub fn holds(&self, hand: &Hand, remaining: &Deck) -> [HoldEvaluation; 8] {
        std::array::from_fn(|mask| self.evaluate_hold(hand, Hold::from_mask(mask as u8), remaining))
    }

    /// Returns the hold with the highest expected return.
    ///
    /// When more holds have the same return the one with the lowest mask wins.
    pub fn best_hold(&self, hand: &Hand, remaining: &Deck) -> HoldEvaluation {
        let [first, rest @ ..] = self.holds(hand, remaining);
        rest.into_iter().fold(first, pick)
    }

    /// Evaluates all the holds of a hand dealt from a full deck.
    pub fn analyze(&self, hand: &Hand) -> HandAnalysis {
        let remaining = self.deck.without(hand.cards());
        let holds = self.holds(hand, &remaining);
        let [first, rest @ ..] = holds.clone();

        HandAnalysis {
            hand: *hand,
            category: classify(hand.cards()),
            holds: holds.to_vec(),
            best: rest.into_iter().fold(first, pick),
        }
    }

    /// The deck-wide report when every hand is played with its best hold.
    pub fn optimal_play(&self) -> Result<PayoutReport, Error> {
        let hands = self.deck.combinations::<3>();
        let num_hands = hands.len() as u64;

        debug!("Evaluating best holds for {num_hands} hands");
        let frequencies = self.accumulate(hands)?;

        let report = PayoutReport::new(num_hands, frequencies, &self.config.payouts);
        info!(
            "Optimal play {} outcomes total return {:.6}",
            report.outcomes, report.total_return
        );

        Ok(report)
    }

    /// The deck-wide report when hands are played as dealt.
    ///
    /// Fails if counting hands as permutations and as combinations gives
    /// different probabilities.
    pub fn baseline(&self) -> Result<BaselineReport, Error> {
        let permutations = permutation_frequencies(&self.deck);
        check_consistency(&permutations, &self.baseline)?;

        let report = PayoutReport::new(self.baseline.total(), self.baseline, &self.config.payouts);
        info!("Baseline total return {:.6}", report.total_return);

        Ok(BaselineReport {
            permutations,
            report,
        })
    }

    /// Sums the weighted best hold tables of the given hands.
    pub(crate) fn accumulate<I>(&self, hands: I) -> Result<FrequencyTable, Error>
    where
        I: Iterator<Item = [Card; 3]>,
    {
        let mut total = FrequencyTable::default();

        for cards in hands {
            let hand = Hand::new(cards)?;
            let remaining = self.deck.without(&cards);
            let best = self.best_hold(&hand, &remaining);

            trace!(
                "{hand}: hold {} return {:.4}",
                best.hold, best.expected_return
            );

            total += match self.config.weighting {
                Weighting::Outcomes => best.frequencies,
                Weighting::PerHand => best.frequencies.scaled(self.common_outcomes / best.outcomes),
            };
        }

        Ok(total)
    }
}

/// Classifies the kept cards with every K cards draw from the deck.
fn draw<const K: usize>(kept: &[Card], remaining: &Deck) -> FrequencyTable {
    debug_assert_eq!(kept.len() + K, Hand::SIZE);

    let mut cards = [Card::new(Rank::Ace, Suit::Hearts); Hand::SIZE];
    cards[..kept.len()].copy_from_slice(kept);

    remaining
        .combinations::<K>()
        .map(|drawn| {
            cards[kept.len()..].copy_from_slice(&drawn);
            classify(&cards)
        })
        .collect()
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

fn lcm(a: u64, b: u64) -> u64 {
    a / gcd(a, b) * b
}
