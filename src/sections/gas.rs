use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::normalize::{Normalize, NormalizeContext, NormalizeError};
use crate::schema::{QuantityDef, Section, SectionDef};
use crate::units::DisplayUnit;

use super::CompositeSystem;

/// A gas bottle connected to the deposition chamber
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DtuGasSupply {
    /// Identification and composition
    #[serde(flatten)]
    pub system: CompositeSystem,

    /// Molecular formula, e.g. "H2S"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub molecular_formula: Option<String>,

    /// Molecular mass in g (entered in Da)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub molecular_mass: Option<f64>,

    /// CAS registry number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cas_number: Option<String>,

    /// Supplier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,

    /// Purity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purity: Option<f64>,

    /// Impurities as listed on the certificate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impurities: Option<String>,

    /// Production date of the bottle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_production: Option<DateTime<Utc>>,

    /// Installation date on the chamber
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_installation: Option<DateTime<Utc>>,

    /// Consumed volume in m^3
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_volume_consumption: Option<f64>,

    /// Time the gas has been flowing, in s
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_used_gas: Option<f64>,

    /// Common name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_name: Option<String>,

    /// IUPAC name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iupac_name: Option<String>,

    /// InChI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inchi: Option<String>,

    /// InChIKey
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inchi_key: Option<String>,

    /// SMILES
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smiles: Option<String>,

    /// Canonical SMILES
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_smiles: Option<String>,
}

impl Section for DtuGasSupply {
    const NAME: &'static str = "DTUGasSupply";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .entry("Gas Supply")
            .extends(&["CompositeSystem", "Schema"])
            .quantity_def(QuantityDef::string("molecular_formula"))
            .quantity_def(QuantityDef::float("molecular_mass").display(DisplayUnit::Dalton))
            .quantity_def(QuantityDef::string("cas_number"))
            .quantity_def(QuantityDef::string("supplier_id"))
            .quantity_def(QuantityDef::float("purity"))
            .quantity_def(QuantityDef::rich_text("impurities"))
            .quantity_def(QuantityDef::datetime("date_of_production"))
            .quantity_def(QuantityDef::datetime("date_of_installation"))
            .quantity_def(
                QuantityDef::float("total_volume_consumption").display(DisplayUnit::Litre),
            )
            .quantity_def(QuantityDef::float("time_used_gas").display(DisplayUnit::Minute))
            .quantity_def(QuantityDef::string("gas_name"))
            .quantity_def(QuantityDef::string("iupac_name"))
            .quantity_def(QuantityDef::string("inchi"))
            .quantity_def(QuantityDef::string("inchi_key"))
            .quantity_def(QuantityDef::string("smiles"))
            .quantity_def(QuantityDef::string("canonical_smiles"))
    }
}

impl Normalize for DtuGasSupply {
    fn normalize(&mut self, _ctx: &NormalizeContext<'_>) -> Result<(), NormalizeError> {
        Ok(())
    }
}
