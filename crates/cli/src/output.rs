// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal and JSON output.
use anyhow::Result;
use serde::Serialize;

use tridraw_eval::{
    BaselineReport, Card, EvalConfig, HandAnalysis, HandCategory, HoldEvaluation, PayoutReport,
};

const WIDTH: usize = 64;

/// Results tagged with the configuration used to compute them.
#[derive(Serialize)]
struct Output<'a, T> {
    config: &'a EvalConfig,
    #[serde(flatten)]
    result: &'a T,
}

fn json<T: Serialize>(config: &EvalConfig, result: &T) -> Result<()> {
    let output = Output { config, result };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn separator() {
    println!("{}", "-".repeat(WIDTH));
}

fn header(config: &EvalConfig) {
    println!(
        "Payouts: {}  Empty hold: {:?}  Weighting: {:?}",
        config.payouts, config.empty_hold, config.weighting
    );
}

fn report_table(report: &PayoutReport, permutations: Option<&[u64]>) {
    separator();
    match permutations {
        Some(_) => println!(
            "{:<16}{:>12}{:>12}{:>12}{:>12}",
            "Category", "Perms", "Combs", "Probability", "Return"
        ),
        None => println!(
            "{:<16}{:>16}{:>16}{:>16}",
            "Category", "Frequency", "Probability", "Return"
        ),
    }
    separator();

    for category in HandCategory::ALL {
        let (count, prob, ret) = (
            report.frequencies[category],
            report.probabilities[category],
            report.returns[category],
        );

        match permutations {
            Some(perms) => println!(
                "{category:<16}{:>12}{count:>12}{prob:>12.8}{ret:>12.8}",
                perms[category.index()]
            ),
            None => println!("{category:<16}{count:>16}{prob:>16.10}{ret:>16.10}"),
        }
    }

    separator();
    println!("Hands:         {}", report.hands);
    println!("Outcomes:      {}", report.outcomes);
    println!("Total return:  {:.10}", report.total_return);
}

/// Prints the optimal play report.
pub fn report(config: &EvalConfig, report: &PayoutReport, as_json: bool) -> Result<()> {
    if as_json {
        return json(config, report);
    }

    header(config);
    report_table(report, None);
    Ok(())
}

/// Prints the no draw report with the permutations count.
pub fn baseline(config: &EvalConfig, baseline: &BaselineReport, as_json: bool) -> Result<()> {
    if as_json {
        return json(config, baseline);
    }

    let perms = baseline
        .permutations
        .iter()
        .map(|(_, count)| count)
        .collect::<Vec<_>>();

    header(config);
    report_table(&baseline.report, Some(perms.as_slice()));
    Ok(())
}

fn cards_label(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "--".to_string();
    }

    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn hold_row(analysis: &HandAnalysis, eval: &HoldEvaluation) {
    let kept = cards_label(&eval.hold.kept(&analysis.hand));
    let best = if eval.hold == analysis.best.hold { "*" } else { "" };
    println!(
        "{:<12}{kept:<12}{:>12}{:>12}{:>14.8} {best}",
        eval.hold.to_string(),
        eval.outcomes,
        eval.payout,
        eval.expected_return
    );
}

/// Prints all the holds of a hand.
pub fn analysis(config: &EvalConfig, analysis: &HandAnalysis, as_json: bool) -> Result<()> {
    if as_json {
        return json(config, analysis);
    }

    header(config);
    println!("Hand: {} ({})", analysis.hand, analysis.category);

    separator();
    println!(
        "{:<12}{:<12}{:>12}{:>12}{:>14}",
        "Hold", "Keep", "Outcomes", "Payout", "Return"
    );
    separator();

    for eval in &analysis.holds {
        hold_row(analysis, eval);
    }

    separator();
    let best = &analysis.best;
    println!(
        "Best hold {} {} expected return {:.10}",
        best.hold,
        cards_label(&best.hold.kept(&analysis.hand)),
        best.expected_return
    );

    Ok(())
}
