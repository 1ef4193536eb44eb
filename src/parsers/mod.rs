//! # Lab Export Parsers
//!
//! Stateless parsers for the auxiliary files the normalizers read:
//!
//! - [`formula`]: element/count pairs and atomic fractions from a formula string
//! - [`target_file`]: lab id, supplier code and formula encoded in a target's
//!   impurity file name
//! - [`impurity`]: space separated impurity concentration tables (`ppm`, `wt%`, `ppb`)
//! - [`edx`]: comma separated EDX atomic-percent exports
//!
//! All parsers fail fast: the first malformed row aborts with a [`ParseError`].

mod error;
pub mod edx;
pub mod formula;
pub mod impurity;
pub mod target_file;

pub use edx::{EdxAverages, EdxSpectrum, EdxTable};
pub use error::ParseError;
pub use formula::{atomic_fractions, elemental_composition, parse_formula, ElementCount};
pub use impurity::{Impurity, ImpurityTable, ImpurityUnit};
pub use target_file::{default_suppliers, TargetFileName};
