// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel deck-wide aggregation.
use log::{debug, info};
use std::{panic, thread};
use tridraw_cards::Card;

use crate::{Error, Evaluator, FrequencyTable, PayoutReport};

impl Evaluator {
    /// Parallel [Evaluator::optimal_play] using `num_tasks` threads.
    ///
    /// Each task sums the best holds of one every `num_tasks` hands into its
    /// own table, the tables are then added together so the report is the
    /// same as the sequential one.
    ///
    /// Panics if num_tasks is 0.
    pub fn par_optimal_play(&self, num_tasks: usize) -> Result<PayoutReport, Error> {
        let hands = self.deck().combinations::<3>();
        let num_hands = hands.len() as u64;

        debug!("Evaluating best holds for {num_hands} hands with {num_tasks} tasks");
        let frequencies = self.par_accumulate(num_tasks, hands)?;

        let report = PayoutReport::new(num_hands, frequencies, &self.config().payouts);
        info!(
            "Optimal play {} outcomes total return {:.6}",
            report.outcomes, report.total_return
        );

        Ok(report)
    }

    pub(crate) fn par_accumulate<I>(&self, num_tasks: usize, hands: I) -> Result<FrequencyTable, Error>
    where
        I: Iterator<Item = [Card; 3]> + Clone + Send,
    {
        assert!(num_tasks > 0);

        thread::scope(|s| {
            let tasks = (0..num_tasks)
                .map(|task_id| {
                    let hands = hands.clone().skip(task_id).step_by(num_tasks);
                    s.spawn(move || self.accumulate(hands))
                })
                .collect::<Vec<_>>();

            tasks
                .into_iter()
                .map(|task| task.join().unwrap_or_else(|e| panic::resume_unwind(e)))
                .sum()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EvalConfig, Weighting};

    #[test]
    fn same_as_sequential() {
        for weighting in [Weighting::Outcomes, Weighting::PerHand] {
            let eval = Evaluator::new(EvalConfig {
                weighting,
                ..Default::default()
            });

            let hands = eval.deck().combinations::<3>().skip(5_000).take(101);
            let seq = eval.accumulate(hands.clone()).unwrap();

            for num_tasks in [1, 3, 4] {
                let par = eval.par_accumulate(num_tasks, hands.clone()).unwrap();
                assert_eq!(par, seq);
            }
        }
    }

    #[test]
    #[ignore]
    fn par_optimal_play() {
        let eval = Evaluator::default();
        let par = eval.par_optimal_play(4).unwrap();
        let seq = eval.optimal_play().unwrap();

        assert_eq!(par.frequencies, seq.frequencies);
        assert_eq!(par.total_return.to_bits(), seq.total_return.to_bits());
    }
}
