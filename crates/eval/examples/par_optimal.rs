// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --release --features=parallel --example par_optimal
// ```

use std::time::Instant;

use tridraw_eval::*;

fn main() -> Result<(), Error> {
    // Evaluate the best hold of all 22100 hands with 4 parallel tasks.
    const NUM_TASKS: usize = 4;

    let eval = Evaluator::default();

    let now = Instant::now();
    let report = eval.par_optimal_play(NUM_TASKS)?;
    let elapsed = now.elapsed().as_secs_f64();

    println!("Total hands      {}", report.hands);
    println!("Total outcomes   {}", report.outcomes);
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", report.hands as f64 / elapsed);

    for (category, count) in report.frequencies.iter() {
        println!("{:<16} {count}", format!("{category}:"));
    }

    println!("\nTotal return:    {:.6}", report.total_return);
    Ok(())
}
