use anyhow::{Context, Result};

use nanolab::parsers::{atomic_fractions, parse_formula};

/// Print the elements of a formula with their atomic fractions
pub fn run(formula: &str, json: bool) -> Result<()> {
    let counts = parse_formula(formula).context("Failed to parse formula")?;
    let fractions = atomic_fractions(&counts)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&fractions)?);
        return Ok(());
    }

    println!("{:<8} {:>6} {:>12}", "Element", "Count", "Fraction");
    for (count, fraction) in counts.iter().zip(&fractions) {
        println!(
            "{:<8} {:>6} {:>12.6}",
            count.element, count.count, fraction.atomic_fraction
        );
    }
    Ok(())
}
