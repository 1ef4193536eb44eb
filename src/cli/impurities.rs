use anyhow::{Context, Result};
use std::path::PathBuf;

use nanolab::parsers::ImpurityTable;

/// Print an impurity table with mass fractions
pub fn run(file: PathBuf, json: bool) -> Result<()> {
    let table = ImpurityTable::from_path(&file)
        .with_context(|| format!("Failed to parse impurity file: {}", file.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&table.to_components())?);
        return Ok(());
    }

    println!("{:<8} {:>12} {:<6} {:>14}", "Element", "Value", "Unit", "Mass fraction");
    for impurity in &table.impurities {
        println!(
            "{:<8} {:>12} {:<6} {:>14.3e}",
            impurity.element,
            impurity.value,
            impurity.unit.symbol(),
            impurity.mass_fraction()
        );
    }
    println!();
    println!(
        "{} impurities, total mass fraction {:.3e}",
        table.len(),
        table.total_mass_fraction()
    );
    Ok(())
}
