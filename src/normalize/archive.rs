use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::schema::Section;
use crate::sections::{
    DtuEllipsometryMeasurement, DtuGasSupply, DtuInstrument, DtuSputtering, DtuSubstrate,
    DtuTarget,
};

use super::{Normalize, NormalizeContext, NormalizeError};

/// Top-level record of an entry, tagged by its section name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "m_def")]
#[allow(clippy::large_enum_variant)]
pub enum Entry {
    /// Sputter target
    #[serde(rename = "DTUTarget")]
    Target(DtuTarget),
    /// Substrate
    #[serde(rename = "DTUSubstrate")]
    Substrate(DtuSubstrate),
    /// Gas bottle
    #[serde(rename = "DTUGasSupply")]
    GasSupply(DtuGasSupply),
    /// Sputter deposition run
    #[serde(rename = "DTUSputtering")]
    Sputtering(DtuSputtering),
    /// Deposition chamber
    #[serde(rename = "DTUInstrument")]
    Instrument(DtuInstrument),
    /// Ellipsometry mapping
    #[serde(rename = "DTUEllipsometryMeasurement")]
    Ellipsometry(DtuEllipsometryMeasurement),
}

impl Entry {
    /// Section name of the record
    pub fn section_name(&self) -> &'static str {
        match self {
            Entry::Target(_) => DtuTarget::NAME,
            Entry::Substrate(_) => DtuSubstrate::NAME,
            Entry::GasSupply(_) => DtuGasSupply::NAME,
            Entry::Sputtering(_) => DtuSputtering::NAME,
            Entry::Instrument(_) => DtuInstrument::NAME,
            Entry::Ellipsometry(_) => DtuEllipsometryMeasurement::NAME,
        }
    }

    /// Record with every default filled in, for the given section name
    pub fn template(section: &str) -> Option<Self> {
        let entry = if section == DtuTarget::NAME {
            Entry::Target(DtuTarget::default())
        } else if section == DtuSubstrate::NAME {
            Entry::Substrate(DtuSubstrate::default())
        } else if section == DtuGasSupply::NAME {
            Entry::GasSupply(DtuGasSupply::default())
        } else if section == DtuSputtering::NAME {
            Entry::Sputtering(DtuSputtering::default())
        } else if section == DtuInstrument::NAME {
            Entry::Instrument(DtuInstrument::default())
        } else if section == DtuEllipsometryMeasurement::NAME {
            Entry::Ellipsometry(DtuEllipsometryMeasurement::default())
        } else {
            return None;
        };
        Some(entry)
    }
}

impl Normalize for Entry {
    fn normalize(&mut self, ctx: &NormalizeContext<'_>) -> Result<(), NormalizeError> {
        match self {
            Entry::Target(s) => s.normalize(ctx),
            Entry::Substrate(s) => s.normalize(ctx),
            Entry::GasSupply(s) => s.normalize(ctx),
            Entry::Sputtering(s) => s.normalize(ctx),
            Entry::Instrument(s) => s.normalize(ctx),
            Entry::Ellipsometry(s) => s.normalize(ctx),
        }
    }
}

/// An entry as stored by the ELN: optional name plus the data section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryArchive {
    /// Entry (mainfile) name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_name: Option<String>,
    /// The record
    pub data: Entry,
}

impl EntryArchive {
    /// Wrap a record
    pub fn new(data: Entry) -> Self {
        Self {
            entry_name: None,
            data,
        }
    }

    /// Read an archive from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, NormalizeError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, NormalizeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, NormalizeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Normalize the data section
    pub fn normalize(&mut self, ctx: &NormalizeContext<'_>) -> Result<(), NormalizeError> {
        log::info!(
            "Normalizing {} entry {}",
            self.data.section_name(),
            self.entry_name.as_deref().unwrap_or("<unnamed>")
        );
        self.data.normalize(ctx)
    }
}
