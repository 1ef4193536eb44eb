use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod edx;
mod formula;
mod impurities;
mod normalize;
mod schema;
mod validate;

pub use config::Config;

/// nanolab - Sputtering lab records: normalize, validate and inspect
#[derive(Parser)]
#[command(name = "nanolab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (defaults to ./nanolab.toml when present)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the normalizers of an archive and write the result
    Normalize {
        /// Archive JSON file
        #[arg(value_name = "ARCHIVE")]
        archive: PathBuf,

        /// Directory raw files are resolved against (defaults to the archive's directory)
        #[arg(short, long, value_name = "DIR")]
        upload_dir: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Overwrite the archive with the normalized result
        #[arg(long, conflicts_with = "output")]
        in_place: bool,
    },

    /// Check an archive for inconsistent values and missing raw files
    Validate {
        /// Archive JSON file
        #[arg(value_name = "ARCHIVE")]
        archive: PathBuf,

        /// Directory raw files are resolved against (defaults to the archive's directory)
        #[arg(short, long, value_name = "DIR")]
        upload_dir: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Split a chemical formula into elements and atomic fractions
    Formula {
        /// Formula, e.g. Cu2S or BaZrS3
        #[arg(value_name = "FORMULA")]
        formula: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a target impurity file
    Impurities {
        /// Impurity table (`<element> <value> <unit>` per line)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse an EDX export and print the averages
    Edx {
        /// EDX CSV export
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the schema packages
    Packages,

    /// Show the definition of a section
    Schema {
        /// Section name, e.g. DTUTarget
        #[arg(value_name = "SECTION")]
        section: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print an archive with every default filled in
    Template {
        /// Entry section name, e.g. DTUSputtering
        #[arg(value_name = "SECTION")]
        section: String,
    },
}

impl Cli {
    /// Get the verbosity level
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

/// Initialize logging based on verbosity level; `RUST_LOG` takes precedence
pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

/// Dispatch to the appropriate command handler
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = || Config::load(cli.config.as_deref());

    match cli.command {
        Commands::Normalize {
            archive,
            upload_dir,
            output,
            in_place,
        } => normalize::run(archive, upload_dir, output, in_place, &config()?),
        Commands::Validate {
            archive,
            upload_dir,
            json,
        } => validate::run(archive, upload_dir, json, &config()?),
        Commands::Formula { formula, json } => formula::run(&formula, json),
        Commands::Impurities { file, json } => impurities::run(file, json),
        Commands::Edx { file, json } => edx::run(file, json),
        Commands::Packages => schema::packages(),
        Commands::Schema { section, json } => schema::show(&section, json),
        Commands::Template { section } => schema::template(&section),
    }
}
