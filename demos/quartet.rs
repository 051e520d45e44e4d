//! # Anscombe's Quartet
//!
//! Four datasets with almost identical means, variances, regression lines
//! and R², yet very different shapes. This walks through the engine one
//! call at a time, then runs the batch analysis.
//!
//! Run with: `cargo run --example quartet`

use anscombe::prelude::*;

fn main() {
    println!("=== Anscombe's Quartet ===\n");

    step_by_step();
    batch();
    quality_failures();
}

/// Individual engine calls on dataset IV
fn step_by_step() {
    println!("--- Dataset IV, step by step ---\n");

    let quartet = anscombe_quartet();
    let iv = &quartet[3];

    if let Err(e) = check_quality(&iv.x, &iv.y) {
        println!("quality check failed: {e}");
        return;
    }

    let line = fit(&iv.x, &iv.y).expect("dataset IV has spread in x");
    let r2 = r_squared(&iv.x, &iv.y, line.intercept, line.slope).expect("y is not constant");

    println!("Slope: {:.3}", line.slope);
    println!("Intercept: {:.3}", line.intercept);
    println!("R^2: {:.3}", r2);
    println!(
        "Mean x: {:.2}, variance x: {:.2}, std dev x: {:.2}",
        mean(&iv.x).unwrap_or(f64::NAN),
        variance(&iv.x).unwrap_or(f64::NAN),
        std_dev(&iv.x).unwrap_or(f64::NAN)
    );
    println!();
}

/// Whole quartet through the batch runner
fn batch() {
    println!("--- All four datasets ---\n");

    let options = AnalysisOptions::default();
    let outcomes = analyze_all(&anscombe_quartet(), &options);

    println!("{:<5} {:>8} {:>10} {:>6} {:>6}", "set", "slope", "intercept", "R^2", "r");
    for outcome in &outcomes {
        match &outcome.result {
            Ok(a) => println!(
                "{:<5} {:>8.3} {:>10.3} {:>6.3} {:>6.3}",
                a.name, a.regression.slope, a.regression.intercept, a.r_squared, a.correlation
            ),
            Err(e) => println!("{:<5} error: {e}", outcome.name),
        }
    }
    println!();
}

/// Bad datasets are reported and skipped without stopping the batch
fn quality_failures() {
    println!("--- Failure isolation ---\n");

    let mut datasets = anscombe_quartet();
    datasets.push(Dataset::new("short", vec![1.0, 2.0, 3.0], vec![1.0, 2.0]));
    datasets.push(Dataset::new("nan", vec![1.0, 2.0], vec![f64::NAN, 2.0]));
    datasets.push(Dataset::new("vertical", vec![8.0; 3], vec![1.0, 2.0, 3.0]));

    let options = AnalysisOptions::default();
    let outcomes = analyze_all(&datasets, &options);

    if let Err(e) = print_report(&outcomes, &options) {
        eprintln!("failed to write report: {e}");
    }
}

fn print_report(outcomes: &[DatasetOutcome], options: &AnalysisOptions) -> Result<(), StatsError> {
    let mut report = ReportWriter::new(std::io::stdout().lock(), options);
    report.write_all(outcomes)?;
    report.finish()?;
    Ok(())
}
