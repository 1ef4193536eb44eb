use anyhow::{anyhow, Result};

use nanolab::normalize::{Entry, EntryArchive};
use nanolab::packages::{registry, section_definition};

/// List packages and their sections
pub fn packages() -> Result<()> {
    for package in registry() {
        println!("{}: {}", package.name, package.description);
        for section in package.sections {
            println!("  {}", section);
        }
    }
    Ok(())
}

/// Print a section definition
pub fn show(section: &str, json: bool) -> Result<()> {
    let definition = section_definition(section)
        .ok_or_else(|| anyhow!("Unknown section '{}' (see `nanolab packages`)", section))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&definition)?);
    } else {
        print!("{}", definition);
    }
    Ok(())
}

/// Print a default-filled archive for an entry section
pub fn template(section: &str) -> Result<()> {
    let entry = Entry::template(section)
        .ok_or_else(|| anyhow!("'{}' is not an entry section", section))?;
    println!("{}", EntryArchive::new(entry).to_json()?);
    Ok(())
}
