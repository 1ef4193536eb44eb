//! # Entry validation
//!
//! Consistency checks on lab records, run before or after normalization. Each
//! check ends up as a named line in a [`ValidationReport`]:
//!
//! 1. **Composition**: atomic fractions sum to 1, mass fractions within [0, 1]
//! 2. **Quantities**: positive dimensions, EDX averages within [0, 100],
//!    non-negative deposition times and pressures
//! 3. **Raw files**: auxiliary files are set and present in the upload
//!
//! ## Usage
//!
//! ```
//! use nanolab::normalize::Entry;
//! use nanolab::sections::DtuSubstrate;
//! use nanolab::validator::validate_entry;
//!
//! let report = validate_entry(&Entry::Substrate(DtuSubstrate::default()));
//! assert!(!report.has_failures());
//! // no EDX file set
//! assert!(report.has_warnings());
//! ```

use std::fs;
use std::path::Path;

use crate::normalize::{Entry, EntryArchive, RawFiles};

pub use composition::ATOMIC_FRACTION_TOLERANCE;
pub use report::{CheckStatus, ValidationCheck, ValidationReport};

mod composition;
mod quantities;
mod raw_files;
mod report;

/// Errors reading an entry to validate
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// I/O error reading the archive
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Archive is not valid entry JSON
    #[error("Archive error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Validate a record on its own
pub fn validate_entry(entry: &Entry) -> ValidationReport {
    run_checks(entry, entry.section_name(), None)
}

/// Validate a record and check its raw files against the upload
pub fn validate_entry_with_files(entry: &Entry, files: &dyn RawFiles) -> ValidationReport {
    run_checks(entry, entry.section_name(), Some(files))
}

/// Read an archive JSON file and validate its record
pub fn validate_archive_file(
    path: &Path,
    files: Option<&dyn RawFiles>,
) -> Result<ValidationReport, ValidationError> {
    let content = fs::read_to_string(path)?;
    let archive: EntryArchive = serde_json::from_str(&content)?;
    let subject = archive
        .entry_name
        .clone()
        .unwrap_or_else(|| path.display().to_string());
    Ok(run_checks(&archive.data, &subject, files))
}

fn run_checks(entry: &Entry, subject: &str, files: Option<&dyn RawFiles>) -> ValidationReport {
    let mut report = ValidationReport::new(subject, entry.section_name());

    match entry {
        Entry::Target(target) => {
            composition::check_composition(&target.system, &mut report);
            report.add_check(ValidationCheck::from_problems(
                "Dimensions",
                quantities::positive(&[("thickness", Some(target.thickness))]),
            ));
            raw_files::check_raw_file(
                "Impurity file",
                target.impurity_file.as_deref(),
                files,
                &mut report,
            );
        }
        Entry::Substrate(substrate) => {
            composition::check_composition(&substrate.system, &mut report);
            quantities::check_substrate(substrate, &mut report);
            raw_files::check_raw_file(
                "EDX file",
                substrate.edx_data_file.as_deref(),
                files,
                &mut report,
            );
        }
        Entry::GasSupply(gas) => {
            composition::check_composition(&gas.system, &mut report);
            report.add_check(ValidationCheck::from_problems(
                "Quantities",
                quantities::non_negative(&[
                    ("molecular_mass", gas.molecular_mass),
                    ("total_volume_consumption", gas.total_volume_consumption),
                    ("time_used_gas", gas.time_used_gas),
                ]),
            ));
        }
        Entry::Sputtering(run) => {
            quantities::check_sputtering(run, &mut report);
            raw_files::check_raw_file("Log file", run.log_file.as_deref(), files, &mut report);
        }
        Entry::Instrument(instrument) => {
            quantities::check_instrument(instrument, &mut report);
        }
        Entry::Ellipsometry(measurement) => {
            raw_files::check_raw_file(
                "Measurement file",
                measurement.reference_file(),
                files,
                &mut report,
            );
            if measurement.samples.is_empty() {
                report.add_check(ValidationCheck::warning(
                    "Sample references",
                    "no sample linked",
                ));
            } else {
                report.add_check(ValidationCheck::ok("Sample references"));
            }
        }
    }

    log::debug!(
        "{} {}: {} checks, {} failed",
        report.section,
        report.subject,
        report.checks.len(),
        report.failure_count()
    );
    report
}
