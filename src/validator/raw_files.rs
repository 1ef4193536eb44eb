use crate::normalize::RawFiles;

use super::{ValidationCheck, ValidationReport};

/// Warn when an auxiliary file is not set, or set but absent from the upload
pub(super) fn check_raw_file(
    check: &str,
    file: Option<&str>,
    files: Option<&dyn RawFiles>,
    report: &mut ValidationReport,
) {
    let result = match (file.filter(|f| !f.is_empty()), files) {
        (None, _) => {
            ValidationCheck::warning(check, "no file uploaded; derived quantities are empty")
        }
        (Some(name), Some(files)) if !files.exists(name) => {
            ValidationCheck::warning(check, format!("{} not found in the upload", name))
        }
        _ => ValidationCheck::ok(check),
    };
    report.add_check(result);
}
