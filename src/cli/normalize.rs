use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use nanolab::normalize::{EntryArchive, NormalizeContext, UploadDir};

use super::Config;

/// Upload directory: flag, then config file, then the archive's directory
pub(super) fn resolve_upload_dir(
    archive: &Path,
    flag: Option<PathBuf>,
    config: &Config,
) -> PathBuf {
    flag.or_else(|| config.normalize.upload_dir.clone())
        .unwrap_or_else(|| {
            archive
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."))
        })
}

/// Normalize an archive file
pub fn run(
    archive_path: PathBuf,
    upload_dir: Option<PathBuf>,
    output: Option<PathBuf>,
    in_place: bool,
    config: &Config,
) -> Result<()> {
    let mut archive = EntryArchive::from_path(&archive_path)
        .with_context(|| format!("Failed to read archive: {}", archive_path.display()))?;

    let files = UploadDir::new(resolve_upload_dir(&archive_path, upload_dir, config));
    info!("Raw files from {}", files.root().display());

    let normalize_config = config.normalize_config();
    let ctx = NormalizeContext::new(&files, &normalize_config);
    archive
        .normalize(&ctx)
        .with_context(|| format!("Failed to normalize {}", archive_path.display()))?;

    let json = archive.to_json()?;
    let target = if in_place { Some(archive_path) } else { output };
    match target {
        Some(path) => {
            fs::write(&path, json + "\n")
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
