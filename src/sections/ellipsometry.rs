//! Spectroscopic ellipsometry mappings.
//!
//! The exported files are named after the measured sample
//! (`<user>_<number>_...`), which is how the measurement gets linked to it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::normalize::{Normalize, NormalizeContext, NormalizeError};
use crate::schema::{QuantityDef, Section, SectionDef, SubSectionDef};

use super::{CompositeSystemReference, EntityInfo};

/// Result at one mapping position
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EllipsometryMappingResult {
    /// Position label on the sample
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl Section for EllipsometryMappingResult {
    const NAME: &'static str = "EllipsometryMappingResult";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .extends(&["MappingResult"])
            .quantity_def(
                QuantityDef::string("position")
                    .label("Position")
                    .describe("The position of the measured spot"),
            )
    }
}

/// Instrument metadata of a mapping (read from the native file)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EllipsometryMetadata {}

impl Section for EllipsometryMetadata {
    const NAME: &'static str = "EllipsometryMetadata";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
    }
}

/// An ellipsometry mapping measurement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DtuEllipsometryMeasurement {
    /// Identification
    #[serde(flatten)]
    pub info: EntityInfo,
    /// Native SESNAP file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_file: Option<String>,
    /// Exported n and k text file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_and_k_file: Option<String>,
    /// Exported thickness text file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness_file: Option<String>,
    /// Instrument metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<EllipsometryMetadata>,
    /// Per-position results
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<EllipsometryMappingResult>,
    /// Measured samples
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<CompositeSystemReference>,
}

/// Lab id of the sample a measurement file belongs to
///
/// The first two `_`-separated tokens of the file stem.
///
/// ```
/// use nanolab::sections::sample_lab_id_from_file;
/// assert_eq!(
///     sample_lab_id_from_file("raw/user_0001_nk.txt").as_deref(),
///     Some("user_0001")
/// );
/// assert_eq!(sample_lab_id_from_file("scan.txt"), None);
/// ```
pub fn sample_lab_id_from_file(file_name: &str) -> Option<String> {
    let stem = Path::new(file_name).file_stem()?.to_str()?;
    let mut tokens = stem.split('_').filter(|t| !t.is_empty());
    let user = tokens.next()?;
    let number = tokens.next()?;
    Some(format!("{user}_{number}"))
}

impl DtuEllipsometryMeasurement {
    /// File the sample reference is derived from
    pub fn reference_file(&self) -> Option<&str> {
        [&self.native_file, &self.n_and_k_file, &self.thickness_file]
            .into_iter()
            .filter_map(|f| f.as_deref())
            .find(|f| !f.is_empty())
    }

    /// Add a reference to the sample by lab id, unless already present
    ///
    /// Returns `true` when a reference was added.
    pub fn add_sample_reference(&mut self, lab_id: &str) -> bool {
        if self
            .samples
            .iter()
            .any(|s| s.lab_id.as_deref() == Some(lab_id))
        {
            return false;
        }
        self.samples.push(CompositeSystemReference::from_lab_id(lab_id));
        true
    }
}

impl Section for DtuEllipsometryMeasurement {
    const NAME: &'static str = "DTUEllipsometryMeasurement";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .entry("Ellipsometry Measurement")
            .extends(&["MappingMeasurement", "PlotSection", "Schema"])
            .quantity_def(QuantityDef::string("name"))
            .quantity_def(QuantityDef::string("lab_id"))
            .quantity_def(QuantityDef::rich_text("description"))
            .quantity_def(QuantityDef::datetime("datetime"))
            .quantity_def(QuantityDef::file("native_file").label("native SESNAP file"))
            .quantity_def(QuantityDef::file("n_and_k_file").label("exported n and k text file"))
            .quantity_def(
                QuantityDef::file("thickness_file").label("exported thickness text file"),
            )
            .sub_section(SubSectionDef::one("metadata", EllipsometryMetadata::NAME))
            .sub_section(SubSectionDef::many("results", EllipsometryMappingResult::NAME))
            .sub_section(SubSectionDef::many("samples", CompositeSystemReference::NAME))
    }
}

impl Normalize for DtuEllipsometryMeasurement {
    fn normalize(&mut self, _ctx: &NormalizeContext<'_>) -> Result<(), NormalizeError> {
        let Some(file) = self.reference_file().map(str::to_string) else {
            return Ok(());
        };
        match sample_lab_id_from_file(&file) {
            Some(lab_id) => {
                if self.add_sample_reference(&lab_id) {
                    log::info!("Ellipsometry {} linked to sample {}", file, lab_id);
                }
            }
            None => log::warn!("Cannot derive a sample lab id from {}", file),
        }
        Ok(())
    }
}
