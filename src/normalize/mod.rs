//! # Normalization
//!
//! Normalization is the hook the ELN runs after an entry is saved: it derives
//! quantities (atomic fractions, impurity mass fractions, EDX averages,
//! corrected temperatures) from the entered values and the uploaded raw files.
//!
//! Every section implements [`Normalize`]. Sections with sub-sections normalize
//! their children first. The first error aborts the whole entry.
//!
//! ```
//! use nanolab::normalize::{InMemoryFiles, Normalize, NormalizeConfig, NormalizeContext};
//! use nanolab::sections::DtuTarget;
//!
//! let files = InMemoryFiles::new()
//!     .with_file("DTU_target_Cu2S_T_001.txt", "Fe 12 ppm\nO 0.01 wt%\n");
//! let config = NormalizeConfig::default();
//! let ctx = NormalizeContext::new(&files, &config);
//!
//! let mut target = DtuTarget::default();
//! target.impurity_file = Some("DTU_target_Cu2S_T_001.txt".to_string());
//! target.normalize(&ctx)?;
//!
//! assert_eq!(target.supplier_id.as_deref(), Some("Testbourne"));
//! assert_eq!(target.system.components.len(), 2);
//! # Ok::<(), nanolab::normalize::NormalizeError>(())
//! ```

mod archive;
mod error;
mod files;

pub use archive::{Entry, EntryArchive};
pub use error::NormalizeError;
pub use files::{InMemoryFiles, RawFiles, UploadDir};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::parsers::default_suppliers;

/// Settings that influence normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Supplier code (from target file names) to supplier name
    pub suppliers: BTreeMap<String, String>,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            suppliers: default_suppliers(),
        }
    }
}

/// Everything a normalizer may read
pub struct NormalizeContext<'a> {
    /// Raw files of the upload
    pub files: &'a dyn RawFiles,
    /// Normalization settings
    pub config: &'a NormalizeConfig,
}

impl<'a> NormalizeContext<'a> {
    /// Create a new context
    pub fn new(files: &'a dyn RawFiles, config: &'a NormalizeConfig) -> Self {
        Self { files, config }
    }
}

/// Post-save hook deriving quantities of a section
pub trait Normalize {
    /// Derive quantities in place
    fn normalize(&mut self, ctx: &NormalizeContext<'_>) -> Result<(), NormalizeError>;
}

impl<T: Normalize> Normalize for Vec<T> {
    fn normalize(&mut self, ctx: &NormalizeContext<'_>) -> Result<(), NormalizeError> {
        for item in self.iter_mut() {
            item.normalize(ctx)?;
        }
        Ok(())
    }
}

impl<T: Normalize> Normalize for Option<T> {
    fn normalize(&mut self, ctx: &NormalizeContext<'_>) -> Result<(), NormalizeError> {
        match self {
            Some(inner) => inner.normalize(ctx),
            None => Ok(()),
        }
    }
}
