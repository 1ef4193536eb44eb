use anyhow::Result;
use log::info;
use std::path::PathBuf;

use nanolab::normalize::UploadDir;
use nanolab::validator::validate_archive_file;

use super::normalize::resolve_upload_dir;
use super::Config;

/// Validate an archive file
pub fn run(
    archive: PathBuf,
    upload_dir: Option<PathBuf>,
    json: bool,
    config: &Config,
) -> Result<()> {
    let files = UploadDir::new(resolve_upload_dir(&archive, upload_dir, config));
    info!("Validating {} against {}", archive.display(), files.root().display());

    match validate_archive_file(&archive, Some(&files)) {
        Ok(report) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.format_colored());
            }

            // Exit with error code if validation failed
            if report.has_failures() {
                std::process::exit(1);
            }

            Ok(())
        }
        Err(e) => {
            eprintln!("Validation error: {}", e);
            std::process::exit(1);
        }
    }
}
