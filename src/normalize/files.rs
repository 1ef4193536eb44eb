use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, Cursor, Read};
use std::path::{Component, Path, PathBuf};

use super::NormalizeError;

/// Access to the raw files uploaded next to an entry
pub trait RawFiles {
    /// Open the raw file `name` (a path relative to the upload)
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>, NormalizeError>;

    /// Whether the raw file exists
    fn exists(&self, name: &str) -> bool;
}

/// Raw files stored in an upload directory on disk
#[derive(Debug, Clone)]
pub struct UploadDir {
    root: PathBuf,
}

impl UploadDir {
    /// Use `root` as the upload directory
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Upload directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &str) -> io::Result<PathBuf> {
        let relative = Path::new(name);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "raw file path must stay inside the upload",
            ));
        }
        Ok(self.root.join(relative))
    }
}

impl RawFiles for UploadDir {
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>, NormalizeError> {
        let file = self
            .resolve(name)
            .and_then(File::open)
            .map_err(|source| NormalizeError::RawFile {
                name: name.to_string(),
                source,
            })?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn exists(&self, name: &str) -> bool {
        self.resolve(name).map(|p| p.is_file()).unwrap_or(false)
    }
}

/// Raw files held in memory, keyed by name
#[derive(Debug, Clone, Default)]
pub struct InMemoryFiles {
    files: HashMap<String, Vec<u8>>,
}

impl InMemoryFiles {
    /// Create an empty file set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.files.insert(name.into(), content.into());
    }

    /// Builder-style [`InMemoryFiles::insert`]
    pub fn with_file(mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(name, content);
        self
    }
}

impl RawFiles for InMemoryFiles {
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>, NormalizeError> {
        match self.files.get(name) {
            Some(content) => Ok(Box::new(Cursor::new(content.as_slice()))),
            None => Err(NormalizeError::RawFile {
                name: name.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such raw file"),
            }),
        }
    }

    fn exists(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }
}
