//! The sputter chamber and its maintenance log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::normalize::{Normalize, NormalizeContext, NormalizeError};
use crate::schema::{QuantityDef, Section, SectionDef, SubSectionDef};
use crate::units::DisplayUnit;

use super::InstrumentBase;

/// A purge of the chamber
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Purge {
    /// When the purge ended
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_last_purge: Option<DateTime<Utc>>,
    /// Number of cycles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_purge_cycles: Option<f64>,
    /// Duration of one cycle in s
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_per_purge_cycles: Option<f64>,
    /// Pressure in Pa
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure_during_purge: Option<f64>,
}

impl Section for Purge {
    const NAME: &'static str = "Purge";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .quantity_def(QuantityDef::datetime("date_of_last_purge"))
            .quantity_def(QuantityDef::float("number_of_purge_cycles"))
            .quantity_def(QuantityDef::float("time_per_purge_cycles").display(DisplayUnit::Minute))
            .quantity_def(
                QuantityDef::float("pressure_during_purge").display(DisplayUnit::Millibar),
            )
    }
}

/// A full cleaning of the chamber
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProperCleaning {
    /// Date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_last_cleaning: Option<DateTime<Utc>>,
    /// Remarks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_about_last_cleaning: Option<String>,
}

impl Section for ProperCleaning {
    const NAME: &'static str = "ProperCleaning";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .quantity_def(QuantityDef::datetime("date_of_last_cleaning"))
            .quantity_def(QuantityDef::rich_text("comment_about_last_cleaning"))
    }
}

/// The chamber was opened from the back
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpeningToAir {
    /// Date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_last_opened_from_back: Option<DateTime<Utc>>,
    /// Remarks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_about_last_opened_to_air: Option<String>,
}

impl Section for OpeningToAir {
    const NAME: &'static str = "OpeningToAir";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .quantity_def(QuantityDef::datetime("date_of_last_opened_from_back"))
            .quantity_def(QuantityDef::rich_text("comment_about_last_opened_to_air"))
    }
}

/// Inlet of the non-toxic gas line (lengths in m)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct NonToxicGasInlet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_toxic_gas_inlet_position_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_toxic_gas_inlet_position_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_toxic_gas_inlet_position_z: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_toxic_gas_inlet_direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_toxic_gas_inlet_pipe_diameter: Option<f64>,
}

impl Section for NonToxicGasInlet {
    const NAME: &'static str = "NonToxicGasInlet";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .quantity_def(
                QuantityDef::float("non_toxic_gas_inlet_position_x")
                    .display(DisplayUnit::Centimetre),
            )
            .quantity_def(
                QuantityDef::float("non_toxic_gas_inlet_position_y")
                    .display(DisplayUnit::Centimetre),
            )
            .quantity_def(
                QuantityDef::float("non_toxic_gas_inlet_position_z")
                    .display(DisplayUnit::Centimetre),
            )
            .quantity_def(QuantityDef::string("non_toxic_gas_inlet_direction"))
            .quantity_def(
                QuantityDef::float("non_toxic_gas_inlet_pipe_diameter")
                    .display(DisplayUnit::Millimetre),
            )
    }
}

/// Inlet of the toxic gas line (lengths in m)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct ToxicGasInlet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toxic_gas_inlet_position_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toxic_gas_inlet_position_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toxic_gas_inlet_position_z: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toxic_gas_inlet_direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toxic_gas_inlet_pipe_diameter: Option<f64>,
}

impl Section for ToxicGasInlet {
    const NAME: &'static str = "ToxicGasInlet";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .quantity_def(
                QuantityDef::float("toxic_gas_inlet_position_x").display(DisplayUnit::Centimetre),
            )
            .quantity_def(
                QuantityDef::float("toxic_gas_inlet_position_y").display(DisplayUnit::Centimetre),
            )
            .quantity_def(
                QuantityDef::float("toxic_gas_inlet_position_z").display(DisplayUnit::Centimetre),
            )
            .quantity_def(QuantityDef::string("toxic_gas_inlet_direction"))
            .quantity_def(
                QuantityDef::float("toxic_gas_inlet_pipe_diameter")
                    .display(DisplayUnit::Millimetre),
            )
    }
}

/// Placement of a magnetron gun (Taurus, Magkeeper 3, Magkeeper 4)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GunPlacement {
    /// When the placement was changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_changes: Option<DateTime<Utc>>,
    /// Aim point x in m
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointed_towards_x: Option<f64>,
    /// Aim point y in m
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointed_towards_y: Option<f64>,
    /// Distance to the substrate in m
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_to_substrate: Option<f64>,
    /// Tilt in rad
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_angle: Option<f64>,
    /// Rotation in rad
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

impl Section for GunPlacement {
    const NAME: &'static str = "GunPlacement";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .quantity_def(QuantityDef::datetime("date_of_changes"))
            .quantity_def(QuantityDef::float("pointed_towards_x").display(DisplayUnit::Centimetre))
            .quantity_def(QuantityDef::float("pointed_towards_y").display(DisplayUnit::Centimetre))
            .quantity_def(
                QuantityDef::float("distance_to_substrate").display(DisplayUnit::Centimetre),
            )
            .quantity_def(QuantityDef::float("set_angle").display(DisplayUnit::Degree))
            .quantity_def(QuantityDef::float("rotation").display(DisplayUnit::Degree))
    }
}

/// Placement of the sulfur cracker
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SCrackerSource {
    /// When the placement was changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_changes: Option<DateTime<Utc>>,
    /// Aim point x in m
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointed_towards_x: Option<f64>,
    /// Aim point y in m
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointed_towards_y: Option<f64>,
    /// Distance to the substrate in m
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_to_substrate: Option<f64>,
    /// Tilt in rad
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_angle: Option<f64>,
    /// How far the cracker reaches into the chamber, in m
    #[serde(rename = "S_cracker_extension_into_chamber", skip_serializing_if = "Option::is_none")]
    pub s_cracker_extension_into_chamber: Option<f64>,
}

impl Section for SCrackerSource {
    const NAME: &'static str = "SCrackerSource";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .quantity_def(QuantityDef::datetime("date_of_changes"))
            .quantity_def(QuantityDef::float("pointed_towards_x").display(DisplayUnit::Centimetre))
            .quantity_def(QuantityDef::float("pointed_towards_y").display(DisplayUnit::Centimetre))
            .quantity_def(
                QuantityDef::float("distance_to_substrate").display(DisplayUnit::Centimetre),
            )
            .quantity_def(QuantityDef::float("set_angle").display(DisplayUnit::Degree))
            .quantity_def(
                QuantityDef::float("S_cracker_extension_into_chamber")
                    .display(DisplayUnit::Centimetre),
            )
    }
}

/// The deposition chamber
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DtuInstrument {
    /// Identification
    #[serde(flatten)]
    pub info: InstrumentBase,
    /// Total time the chamber has been used, in s
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_used_chamber: Option<f64>,
    /// Base pressure in Pa
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_pressure: Option<f64>,
    /// Free text history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chamber_history: Option<String>,
    /// Purges
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub purge: Vec<Purge>,
    /// Cleanings
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub proper_cleaning: Vec<ProperCleaning>,
    /// Openings to air
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub opening_to_air: Vec<OpeningToAir>,
    /// Non-toxic gas inlet placements
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub non_toxic_gas_inlet: Vec<NonToxicGasInlet>,
    /// Toxic gas inlet placements
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub toxic_gas_inlet: Vec<ToxicGasInlet>,
    /// Taurus gun placements
    #[serde(rename = "Taurus_source", skip_serializing_if = "Vec::is_empty")]
    pub taurus_source: Vec<GunPlacement>,
    /// Magkeeper 3 gun placements
    #[serde(rename = "Magkeeper3_source", skip_serializing_if = "Vec::is_empty")]
    pub magkeeper3_source: Vec<GunPlacement>,
    /// Magkeeper 4 gun placements
    #[serde(rename = "Magkeeper4_source", skip_serializing_if = "Vec::is_empty")]
    pub magkeeper4_source: Vec<GunPlacement>,
    /// Sulfur cracker placements
    #[serde(rename = "S_cracker_source", skip_serializing_if = "Vec::is_empty")]
    pub s_cracker_source: Vec<SCrackerSource>,
}

impl Section for DtuInstrument {
    const NAME: &'static str = "DTUInstrument";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .entry("Instrument")
            .extends(&["Instrument", "Schema"])
            .quantity_def(QuantityDef::string("name"))
            .quantity_def(QuantityDef::string("lab_id"))
            .quantity_def(QuantityDef::rich_text("description"))
            .quantity_def(QuantityDef::datetime("datetime"))
            .quantity_def(QuantityDef::float("time_used_chamber").display(DisplayUnit::Minute))
            .quantity_def(QuantityDef::float("base_pressure").display(DisplayUnit::Millibar))
            .quantity_def(QuantityDef::rich_text("chamber_history"))
            .sub_section(SubSectionDef::many("purge", Purge::NAME))
            .sub_section(SubSectionDef::many("proper_cleaning", ProperCleaning::NAME))
            .sub_section(SubSectionDef::many("opening_to_air", OpeningToAir::NAME))
            .sub_section(SubSectionDef::many("non_toxic_gas_inlet", NonToxicGasInlet::NAME))
            .sub_section(SubSectionDef::many("toxic_gas_inlet", ToxicGasInlet::NAME))
            .sub_section(SubSectionDef::many("Taurus_source", GunPlacement::NAME))
            .sub_section(SubSectionDef::many("Magkeeper3_source", GunPlacement::NAME))
            .sub_section(SubSectionDef::many("Magkeeper4_source", GunPlacement::NAME))
            .sub_section(SubSectionDef::many("S_cracker_source", SCrackerSource::NAME))
    }
}

impl Normalize for DtuInstrument {
    fn normalize(&mut self, _ctx: &NormalizeContext<'_>) -> Result<(), NormalizeError> {
        log::debug!(
            "Instrument {}: {} purges, {} cleanings",
            self.info.lab_id.as_deref().unwrap_or("<no lab id>"),
            self.purge.len(),
            self.proper_cleaning.len()
        );
        Ok(())
    }
}
