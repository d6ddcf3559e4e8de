// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example all_hands
// ...
// Total hands      22100
//
// Royal Flush:     4
// Straight Flush:  44
// Three Aces:      4
// Three of a Kind: 48
// Straight:        720
// Flush:           1096
// Pair:            3744
// High Card:       16440
// ```

use std::time::Instant;

use tridraw_eval::*;

fn main() {
    // Classify all 22100 hands.
    let now = Instant::now();
    let mut counts = FrequencyTable::default();

    Deck::default().for_each(3, |hand| {
        if let Ok(cards) = <[Card; 3]>::try_from(hand) {
            counts.add(classify(&cards));
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.total();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for (category, count) in counts.iter() {
        println!("{:<16} {count}", format!("{category}:"));
    }
}
