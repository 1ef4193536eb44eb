use anyhow::{Context, Result};
use std::path::PathBuf;

use nanolab::parsers::EdxTable;

fn show(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.3}", v))
}

/// Print the averages of an EDX export
pub fn run(file: PathBuf, json: bool) -> Result<()> {
    let table = EdxTable::from_path(&file)
        .with_context(|| format!("Failed to parse EDX file: {}", file.display()))?;
    let averages = table.averages();

    if json {
        println!("{}", serde_json::to_string_pretty(&averages)?);
        return Ok(());
    }

    println!("Spectra: {}", table.len());
    println!("avg S  (at%): {}", show(averages.s));
    println!("avg P  (at%): {}", show(averages.p));
    println!("avg M1 (at%): {}", show(averages.m1));
    Ok(())
}
