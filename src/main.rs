//! # nanolab
//!
//! Command-line tool for sputtering lab records.
//!
//! ## Usage
//!
//! ```bash
//! # Derive composition, impurities and EDX averages from the raw files
//! nanolab normalize target.archive.json --upload-dir uploads/ --in-place
//!
//! # Check a record
//! nanolab validate substrate.archive.json
//!
//! # Inspect raw files
//! nanolab formula BaZrS3
//! nanolab impurities DTU_target_Cu2S_T_001_impurities.txt
//! nanolab edx substrate_edx.csv
//!
//! # Explore the schemas
//! nanolab packages
//! nanolab schema DTUSputtering
//! nanolab template DTUTarget > target.archive.json
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
