//! # nanolab - Records for a Sputtering Laboratory
//!
//! `nanolab` describes the samples, instruments, gases, targets, substrates and
//! measurements of a physical vapor deposition lab as typed records, and
//! derives the quantities that can be computed from uploaded raw files.
//!
//! ## Key Features
//!
//! - **Declarative Schemas**: every record carries a [`schema::SectionDef`] with
//!   field types, SI units, display units, defaults and ELN editor hints.
//!
//! - **SI Storage**: values are stored in SI units; display units only affect
//!   how values are entered and shown (see [`units`]).
//!
//! - **Raw File Parsing**: target impurity tables (ppm / wt% / ppb), EDX
//!   atomic-percent exports and chemical formulas (see [`parsers`]).
//!
//! - **Normalization**: targets get their composition and impurity mass
//!   fractions, substrates their EDX averages, deposition runs their corrected
//!   substrate temperatures (see [`normalize`]).
//!
//! - **Validation**: consistency checks with a printable report (see
//!   [`validator`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use nanolab::normalize::{Entry, EntryArchive, InMemoryFiles, NormalizeConfig, NormalizeContext};
//! use nanolab::validator::validate_entry;
//!
//! let json = r#"{
//!     "entry_name": "CuS target",
//!     "data": {"m_def": "DTUTarget", "impurity_file": "DTU_target_CuS_T_003_imp.txt"}
//! }"#;
//! let mut archive = EntryArchive::from_json(json)?;
//!
//! let files = InMemoryFiles::new()
//!     .with_file("DTU_target_CuS_T_003_imp.txt", "Fe 20 ppm\nAg 5 ppm\n");
//! let config = NormalizeConfig::default();
//! archive.normalize(&NormalizeContext::new(&files, &config))?;
//!
//! let Entry::Target(target) = &archive.data else { unreachable!() };
//! assert_eq!(target.system.elemental_composition.len(), 2);
//! assert_eq!(target.supplier_id.as_deref(), Some("Testbourne"));
//!
//! assert!(!validate_entry(&archive.data).has_failures());
//! # Ok::<(), nanolab::normalize::NormalizeError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`units`]: SI units, display units and conversions
//! - [`schema`]: section and quantity definitions
//! - [`parsers`]: formula, target file name, impurity and EDX parsers
//! - [`sections`]: the lab records
//! - [`normalize`]: raw file access, the normalize hook and entry archives
//! - [`packages`]: schema packages registered with the ELN
//! - [`validator`]: record consistency checks

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod normalize;
pub mod packages;
pub mod parsers;
pub mod schema;
pub mod sections;
pub mod units;
pub mod validator;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::normalize::{
        Entry, EntryArchive, InMemoryFiles, Normalize, NormalizeConfig, NormalizeContext,
        NormalizeError, RawFiles, UploadDir,
    };
    pub use crate::parsers::{
        elemental_composition, parse_formula, EdxTable, ImpurityTable, ImpurityUnit, ParseError,
        TargetFileName,
    };
    pub use crate::schema::{QuantityDef, Section, SectionDef};
    pub use crate::sections::{
        CompositeSystem, DtuEllipsometryMeasurement, DtuGasSupply, DtuInstrument, DtuSputtering,
        DtuSubstrate, DtuTarget,
    };
    pub use crate::units::{from_si, to_si, DisplayUnit, Unit};
    pub use crate::validator::{validate_entry, ValidationReport};
}
