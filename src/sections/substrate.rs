use serde::{Deserialize, Serialize};

use crate::normalize::{Normalize, NormalizeContext, NormalizeError};
use crate::parsers::EdxTable;
use crate::schema::{QuantityDef, Section, SectionDef};
use crate::units::DisplayUnit;

use super::CompositeSystem;

/// Polished sides of a wafer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubstratePolishing {
    /// Single side polished
    #[default]
    #[serde(rename = "1 sided")]
    OneSided,
    /// Double side polished
    #[serde(rename = "2 sided")]
    TwoSided,
    /// Unpolished
    #[serde(rename = "none")]
    None,
}

impl SubstratePolishing {
    /// Allowed values, as stored
    pub const VALUES: &'static [&'static str] = &["1 sided", "2 sided", "none"];
}

/// Doping type of a wafer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DopingType {
    /// n-type
    #[default]
    #[serde(rename = "n")]
    N,
    /// p-type
    #[serde(rename = "p")]
    P,
    /// Intrinsic
    #[serde(rename = "none")]
    None,
}

impl DopingType {
    /// Allowed values, as stored
    pub const VALUES: &'static [&'static str] = &["n", "p", "none"];
}

/// Default supplier of the lab's wafers
pub const DEFAULT_SUBSTRATE_SUPPLIER: &str = "Siegert Wafer";

/// A substrate (wafer piece)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DtuSubstrate {
    /// Identification and composition
    #[serde(flatten)]
    pub system: CompositeSystem,

    /// Supplier
    pub supplier_id: String,

    /// Polished sides
    pub substrate_polishing: SubstratePolishing,

    /// Doping type
    pub doping_type_of_substrate: DopingType,

    /// Doping expressed as electrical resistivity, in ohm*m
    pub doping_of_substrate: f64,

    /// Dopant element(s)
    pub doping_elements: String,

    /// Length in m
    pub length: f64,

    /// Width in m
    pub width: f64,

    /// Thickness in m
    pub thickness: f64,

    /// Handling history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substrate_history: Option<String>,

    /// Raw EDX export of the substrate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edx_data_file: Option<String>,

    /// Average S atomic percent from EDX
    #[serde(rename = "avg_S", skip_serializing_if = "Option::is_none")]
    pub avg_s: Option<f64>,

    /// Average P atomic percent from EDX
    #[serde(rename = "avg_P", skip_serializing_if = "Option::is_none")]
    pub avg_p: Option<f64>,

    /// Average first metal (Cu) atomic percent from EDX
    #[serde(rename = "avg_M1", skip_serializing_if = "Option::is_none")]
    pub avg_m1: Option<f64>,

    /// Average second metal atomic percent from EDX
    #[serde(rename = "avg_M2", skip_serializing_if = "Option::is_none")]
    pub avg_m2: Option<f64>,
}

impl Default for DtuSubstrate {
    fn default() -> Self {
        Self {
            system: CompositeSystem::default(),
            supplier_id: DEFAULT_SUBSTRATE_SUPPLIER.to_string(),
            substrate_polishing: SubstratePolishing::default(),
            doping_type_of_substrate: DopingType::default(),
            doping_of_substrate: 0.2,
            doping_elements: "P".to_string(),
            length: 0.04,
            width: 0.04,
            thickness: 0.000675,
            substrate_history: None,
            edx_data_file: None,
            avg_s: None,
            avg_p: None,
            avg_m1: None,
            avg_m2: None,
        }
    }
}

impl Section for DtuSubstrate {
    const NAME: &'static str = "DTUSubstrate";

    fn definition() -> SectionDef {
        let avg = |name: &'static str, description: &'static str| {
            QuantityDef::float(name).describe(description).derived()
        };

        SectionDef::new(Self::NAME)
            .entry("Substrate")
            .extends(&["CompositeSystem", "Schema"])
            .quantity_def(
                QuantityDef::string("supplier_id").default_str(DEFAULT_SUBSTRATE_SUPPLIER),
            )
            .quantity_def(
                QuantityDef::enumeration("substrate_polishing", SubstratePolishing::VALUES)
                    .default_str("1 sided"),
            )
            .quantity_def(
                QuantityDef::enumeration("doping_type_of_substrate", DopingType::VALUES)
                    .default_str("n"),
            )
            .quantity_def(
                QuantityDef::float("doping_of_substrate")
                    .display(DisplayUnit::OhmCentimetre)
                    .default_float(0.2)
                    .describe(
                        "The doping of the substrate measured as the electrical resistivity.",
                    ),
            )
            .quantity_def(QuantityDef::string("doping_elements").default_str("P"))
            .quantity_def(
                QuantityDef::float("length")
                    .display(DisplayUnit::Millimetre)
                    .default_float(0.04),
            )
            .quantity_def(
                QuantityDef::float("width")
                    .display(DisplayUnit::Millimetre)
                    .default_float(0.04),
            )
            .quantity_def(
                QuantityDef::float("thickness")
                    .display(DisplayUnit::Millimetre)
                    .default_float(0.000675),
            )
            .quantity_def(QuantityDef::rich_text("substrate_history"))
            .quantity_def(QuantityDef::file("edx_data_file").label("EDX file"))
            .quantity_def(avg("avg_S", "The average S atomic percent from the EDX measurement"))
            .quantity_def(avg("avg_P", "The average P atomic percent from the EDX measurement"))
            .quantity_def(avg("avg_M1", "The average M1 atomic percent from the EDX measurement"))
            .quantity_def(avg("avg_M2", "The average M2 atomic percent from the EDX measurement"))
    }
}

impl Normalize for DtuSubstrate {
    fn normalize(&mut self, ctx: &NormalizeContext<'_>) -> Result<(), NormalizeError> {
        let Some(edx_file) = self.edx_data_file.clone().filter(|f| !f.is_empty()) else {
            return Ok(());
        };

        let reader = ctx.files.open(&edx_file)?;
        let table =
            EdxTable::from_reader(reader).map_err(|e| NormalizeError::parse(&edx_file, e))?;
        if table.is_empty() {
            log::warn!("EDX file {} contains no spectra", edx_file);
        }

        let averages = table.averages();
        self.avg_s = averages.s;
        self.avg_p = averages.p;
        self.avg_m1 = averages.m1;
        self.avg_m2 = Some(0.0);

        log::info!(
            "Substrate EDX averages from {} spectra: S={:?} P={:?} M1={:?}",
            table.len(),
            self.avg_s,
            self.avg_p,
            self.avg_m1
        );
        Ok(())
    }
}
