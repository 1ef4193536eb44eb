use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::normalize::{Normalize, NormalizeContext, NormalizeError};
use crate::parsers::{elemental_composition, ImpurityTable, TargetFileName};
use crate::schema::{QuantityDef, Section, SectionDef};
use crate::units::DisplayUnit;

use super::CompositeSystem;

/// Default target thickness: 1/4 inch
pub const DEFAULT_TARGET_THICKNESS: f64 = 0.00635;

/// A sputter target (or S cracker charge)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DtuTarget {
    /// Identification and composition
    #[serde(flatten)]
    pub system: CompositeSystem,

    /// Supplier name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,

    /// Purity as stated by the supplier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purity: Option<f64>,

    /// Raw file with the impurity table; its name encodes formula and supplier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impurity_file: Option<String>,

    /// Thickness in m
    pub thickness: f64,

    /// Mounted in a magkeeper gun
    #[serde(rename = "magkeeper_Target")]
    pub magkeeper_target: bool,

    /// Last refill or mounting date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refill_or_mounting_date: Option<DateTime<Utc>>,

    /// Time the target has been used in the system, in s
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_used: Option<f64>,
}

impl Default for DtuTarget {
    fn default() -> Self {
        Self {
            system: CompositeSystem::default(),
            supplier_id: None,
            purity: None,
            impurity_file: None,
            thickness: DEFAULT_TARGET_THICKNESS,
            magkeeper_target: true,
            refill_or_mounting_date: None,
            time_used: None,
        }
    }
}

impl Section for DtuTarget {
    const NAME: &'static str = "DTUTarget";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .entry("Target")
            .extends(&["CompositeSystem", "Schema"])
            .quantity_def(QuantityDef::string("supplier_id"))
            .quantity_def(QuantityDef::float("purity"))
            .quantity_def(
                QuantityDef::file("impurity_file")
                    .label("file with impurities")
                    .describe(
                        "Upload a text file specifying the impurities here. \
                         File has to be created with a separate code.",
                    ),
            )
            .quantity_def(
                QuantityDef::float("thickness")
                    .display(DisplayUnit::Millimetre)
                    .default_float(DEFAULT_TARGET_THICKNESS),
            )
            .quantity_def(QuantityDef::boolean("magkeeper_Target").default_bool(true))
            .quantity_def(QuantityDef::datetime("refill_or_mounting_date"))
            .quantity_def(
                QuantityDef::float("time_used")
                    .display(DisplayUnit::Minute)
                    .describe("The time the target or cracker has been used in the system"),
            )
    }
}

impl Normalize for DtuTarget {
    fn normalize(&mut self, ctx: &NormalizeContext<'_>) -> Result<(), NormalizeError> {
        let Some(impurity_file) = self.impurity_file.clone().filter(|f| !f.is_empty()) else {
            return Ok(());
        };

        let file_info = TargetFileName::parse(&impurity_file)
            .map_err(|e| NormalizeError::parse(&impurity_file, e))?;
        self.system.info.lab_id = Some(file_info.lab_id());
        if let Some(supplier) = file_info.supplier(&ctx.config.suppliers) {
            self.supplier_id = Some(supplier.to_string());
        }

        self.system.elemental_composition = elemental_composition(&file_info.formula)
            .map_err(|e| NormalizeError::parse(&impurity_file, e))?;

        let reader = ctx.files.open(&impurity_file)?;
        let table = ImpurityTable::from_reader(reader)
            .map_err(|e| NormalizeError::parse(&impurity_file, e))?;
        self.system.components = table.to_components();

        log::info!(
            "Target {}: {} elements, {} impurities",
            file_info.lab_id(),
            self.system.elemental_composition.len(),
            self.system.components.len()
        );
        Ok(())
    }
}
