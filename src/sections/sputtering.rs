//! Sputter deposition runs.
//!
//! A run ([`DtuSputtering`]) records the samples in the chamber, the process
//! steps with their sources, parameters and gas environment, and summary
//! parameters of the deposition. The only derived value is the corrected real
//! substrate temperature, a linear calibration of the heater set point.

use serde::{Deserialize, Serialize};

use crate::normalize::{Normalize, NormalizeContext, NormalizeError};
use crate::schema::{QuantityDef, Section, SectionDef, SubSectionDef};
use crate::units::DisplayUnit;

use super::{CompositeSystemReference, DtuGasSupply, EntityInfo};

/// Default sputter pressure: 5 mtorr in Pa
pub const DEFAULT_SPUTTER_PRESSURE: f64 = 0.6666;

/// Default heater set point in K
pub const DEFAULT_SET_POINT_TEMPERATURE: f64 = 300.0;

/// Default deposition time: 30 minutes
pub const DEFAULT_DEPOSITION_TIME: f64 = 1800.0;

/// Slope of the heater calibration
pub const TEMPERATURE_CALIBRATION_SLOPE: f64 = 0.905;

/// Offset of the heater calibration
pub const TEMPERATURE_CALIBRATION_OFFSET: f64 = 12.0;

/// Real substrate temperature for a heater set point
///
/// Applied to the stored (kelvin) set point value.
///
/// ```
/// use nanolab::sections::corrected_temperature;
/// assert!((corrected_temperature(300.0) - 283.5).abs() < 1e-9);
/// ```
pub fn corrected_temperature(set_point: f64) -> f64 {
    set_point * TEMPERATURE_CALIBRATION_SLOPE + TEMPERATURE_CALIBRATION_OFFSET
}

/// How a sample is held on the platen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodOfContact {
    /// Clamped
    #[default]
    Clamps,
    /// Held in a frame
    Frame,
    /// Anything else
    Other,
}

impl MethodOfContact {
    /// Allowed values, as stored
    pub const VALUES: &'static [&'static str] = &["clamps", "frame", "other"];
}

/// Power supply mode of a source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerType {
    /// Radio frequency
    #[default]
    #[serde(rename = "RF")]
    Rf,
    /// Direct current
    #[serde(rename = "DC")]
    Dc,
    /// Pulsed direct current
    #[serde(rename = "pulsed_DC")]
    PulsedDc,
}

impl PowerType {
    /// Allowed values, as stored
    pub const VALUES: &'static [&'static str] = &["RF", "DC", "pulsed_DC"];
}

/// Side the samples are taken out from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TakenOut {
    /// Front load lock
    #[default]
    Front,
    /// Back door
    Back,
}

impl TakenOut {
    /// Allowed values, as stored
    pub const VALUES: &'static [&'static str] = &["front", "back"];
}

/// Platen stage mounted during the run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageUsed {
    /// Heating stage
    #[default]
    Heating,
    /// Cooling stage
    Cooling,
}

impl StageUsed {
    /// Allowed values, as stored
    pub const VALUES: &'static [&'static str] = &["heating", "cooling"];
}

/// A sample placed in the chamber
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DtuSample {
    /// Referenced sample
    #[serde(flatten)]
    pub reference: CompositeSystemReference,
    /// Platen x position in m
    #[serde(rename = "Substrate_position_x", skip_serializing_if = "Option::is_none")]
    pub substrate_position_x: Option<f64>,
    /// Platen y position in m
    #[serde(rename = "Substrate_position_y", skip_serializing_if = "Option::is_none")]
    pub substrate_position_y: Option<f64>,
    /// Mounting
    pub method_of_contact: MethodOfContact,
}

impl Section for DtuSample {
    const NAME: &'static str = "DTUsamples";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .extends(&["CompositeSystemReference"])
            .quantity_def(
                QuantityDef::float("Substrate_position_x").display(DisplayUnit::Centimetre),
            )
            .quantity_def(
                QuantityDef::float("Substrate_position_y").display(DisplayUnit::Centimetre),
            )
            .quantity_def(
                QuantityDef::enumeration("method_of_contact", MethodOfContact::VALUES)
                    .default_str("clamps"),
            )
    }
}

/// Chamber state during a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chamber {
    /// Substrate shutter open
    pub shutters_open: bool,
    /// RF bias on the platen in V
    #[serde(rename = "applied_RF_bias_platen")]
    pub applied_rf_bias_platen: f64,
    /// Total pressure in Pa
    pub total_pressure: f64,
}

impl Default for Chamber {
    fn default() -> Self {
        Self {
            shutters_open: false,
            applied_rf_bias_platen: 0.0,
            total_pressure: DEFAULT_SPUTTER_PRESSURE,
        }
    }
}

impl Section for Chamber {
    const NAME: &'static str = "Chamber";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .quantity_def(
                QuantityDef::boolean("shutters_open")
                    .default_bool(false)
                    .describe("Position of the substrate shutter."),
            )
            .quantity_def(
                QuantityDef::float("applied_RF_bias_platen")
                    .display(DisplayUnit::Volt)
                    .default_float(0.0),
            )
            .quantity_def(
                QuantityDef::float("total_pressure")
                    .display(DisplayUnit::Millitorr)
                    .default_float(DEFAULT_SPUTTER_PRESSURE),
            )
    }
}

/// Substrate heater settings of a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubstrateHeating {
    /// Heater set point in K
    pub set_point_temperature: f64,
    /// Calibrated real temperature in K
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corrected_real_temperature: Option<f64>,
}

impl Default for SubstrateHeating {
    fn default() -> Self {
        Self {
            set_point_temperature: DEFAULT_SET_POINT_TEMPERATURE,
            corrected_real_temperature: None,
        }
    }
}

impl Section for SubstrateHeating {
    const NAME: &'static str = "Substrate";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .quantity_def(
                QuantityDef::float("set_point_temperature")
                    .display(DisplayUnit::DegreeCelsius)
                    .default_float(DEFAULT_SET_POINT_TEMPERATURE),
            )
            .quantity_def(
                QuantityDef::float("corrected_real_temperature")
                    .display(DisplayUnit::DegreeCelsius)
                    .describe("set_point_temperature * 0.905 + 12")
                    .derived(),
            )
    }
}

impl Normalize for SubstrateHeating {
    fn normalize(&mut self, _ctx: &NormalizeContext<'_>) -> Result<(), NormalizeError> {
        self.corrected_real_temperature = Some(corrected_temperature(self.set_point_temperature));
        Ok(())
    }
}

/// Sulfur cracker settings of a step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SCracker {
    /// Zone 1 temperature in K
    #[serde(rename = "Zone1_temperature", skip_serializing_if = "Option::is_none")]
    pub zone1_temperature: Option<f64>,
    /// Zone 2 temperature in K
    #[serde(rename = "Zone2_temperature", skip_serializing_if = "Option::is_none")]
    pub zone2_temperature: Option<f64>,
    /// Zone 3 temperature in K
    #[serde(rename = "Zone3_temperature", skip_serializing_if = "Option::is_none")]
    pub zone3_temperature: Option<f64>,
    /// Valve on time in s
    #[serde(rename = "valve_ON_time", skip_serializing_if = "Option::is_none")]
    pub valve_on_time: Option<f64>,
    /// Valve frequency in Hz
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valve_frequency: Option<f64>,
    /// Sulfur partial pressure in Pa
    #[serde(rename = "S_partial_pressure", skip_serializing_if = "Option::is_none")]
    pub s_partial_pressure: Option<f64>,
}

impl Section for SCracker {
    const NAME: &'static str = "SCracker";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .quantity_def(
                QuantityDef::float("Zone1_temperature").display(DisplayUnit::DegreeCelsius),
            )
            .quantity_def(
                QuantityDef::float("Zone2_temperature").display(DisplayUnit::DegreeCelsius),
            )
            .quantity_def(
                QuantityDef::float("Zone3_temperature").display(DisplayUnit::DegreeCelsius),
            )
            .quantity_def(QuantityDef::float("valve_ON_time").display(DisplayUnit::Second))
            .quantity_def(QuantityDef::float("valve_frequency").display(DisplayUnit::Hertz))
            .quantity_def(QuantityDef::float("S_partial_pressure").display(DisplayUnit::Millibar))
    }
}

/// Ramp rates and active sources of a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Special {
    /// Platen temperature ramp in K/s
    pub platen_temperature_ramp_rate: f64,
    /// Target power ramp in W/s
    pub target_ramp_rate: f64,
    /// Targets powered during the step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_targets: Option<String>,
    /// Gases flowing during the step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_gases: Option<String>,
    /// Total deposition rate in m/s
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_deposition_rate: Option<f64>,
}

impl Default for Special {
    fn default() -> Self {
        Self {
            platen_temperature_ramp_rate: 0.3333,
            target_ramp_rate: 1.0,
            active_targets: None,
            active_gases: None,
            total_deposition_rate: None,
        }
    }
}

impl Section for Special {
    const NAME: &'static str = "Special";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .quantity_def(
                QuantityDef::float("platen_temperature_ramp_rate")
                    .display(DisplayUnit::DegreeCelsiusPerMinute)
                    .default_float(0.3333),
            )
            .quantity_def(
                QuantityDef::float("target_ramp_rate")
                    .display(DisplayUnit::WattPerSecond)
                    .default_float(1.0),
            )
            .quantity_def(QuantityDef::string("active_targets"))
            .quantity_def(QuantityDef::string("active_gases"))
            .quantity_def(
                QuantityDef::float("total_deposition_rate").display(DisplayUnit::AngstromPerSecond),
            )
    }
}

/// Parameter block of a step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SputterParameters {
    /// Chamber state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chamber: Option<Chamber>,
    /// Substrate heater
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substrate: Option<SubstrateHeating>,
    /// Sulfur cracker
    #[serde(rename = "S_cracker", skip_serializing_if = "Option::is_none")]
    pub s_cracker: Option<SCracker>,
    /// Ramps and active sources
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special: Option<Special>,
}

impl Section for SputterParameters {
    const NAME: &'static str = "DTUsputter_parameters";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .sub_section(SubSectionDef::one("chamber", Chamber::NAME))
            .sub_section(SubSectionDef::one("substrate", SubstrateHeating::NAME))
            .sub_section(SubSectionDef::one("S_cracker", SCracker::NAME))
            .sub_section(SubSectionDef::one("special", Special::NAME))
    }
}

impl Normalize for SputterParameters {
    fn normalize(&mut self, ctx: &NormalizeContext<'_>) -> Result<(), NormalizeError> {
        self.substrate.normalize(ctx)
    }
}

/// A sputter source (gun) in a step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DtuSource {
    /// Source name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Source shutter open
    pub source_shutter_open: bool,
    /// Power supply mode
    pub power_type: PowerType,
    /// Applied voltage in V
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_voltage: Option<f64>,
    /// Applied power in W
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_power: Option<f64>,
}

impl Section for DtuSource {
    const NAME: &'static str = "DTUsource";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .extends(&["PVDSource"])
            .quantity_def(QuantityDef::string("name"))
            .quantity_def(QuantityDef::boolean("source_shutter_open").default_bool(false))
            .quantity_def(
                QuantityDef::enumeration("power_type", PowerType::VALUES).default_str("RF"),
            )
            .quantity_def(QuantityDef::float("applied_voltage").display(DisplayUnit::Volt))
            .quantity_def(QuantityDef::float("applied_power").display(DisplayUnit::Watt))
    }
}

/// Gas flow into the chamber
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DtuGasFlow {
    /// Reference to the gas bottle entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_supply: Option<String>,
    /// Flow rate in m^3/s at standard conditions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_rate: Option<f64>,
}

impl Section for DtuGasFlow {
    const NAME: &'static str = "DTUGasFlow";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .extends(&["GasFlow"])
            .quantity_def(QuantityDef::reference("gas_supply", DtuGasSupply::NAME))
            .quantity_def(
                QuantityDef::float("flow_rate").display(DisplayUnit::CubicCentimetrePerMinute),
            )
    }
}

/// Gas environment of a step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DtuChamberEnvironment {
    /// Gas flows
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gas_flow: Vec<DtuGasFlow>,
}

impl Section for DtuChamberEnvironment {
    const NAME: &'static str = "DTUChamberEnvironment";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .extends(&["ChamberEnvironment"])
            .sub_section(SubSectionDef::many("gas_flow", DtuGasFlow::NAME))
    }
}

/// A process step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DtuStep {
    /// Step name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Step duration in s
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Sources used in the step
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<DtuSource>,
    /// Parameter blocks
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sputter_parameters: Vec<SputterParameters>,
    /// Gas environment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<DtuChamberEnvironment>,
}

impl Section for DtuStep {
    const NAME: &'static str = "DTUsteps";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .extends(&["PVDStep"])
            .quantity_def(QuantityDef::string("name"))
            .quantity_def(QuantityDef::float("duration").display(DisplayUnit::Minute))
            .sub_section(SubSectionDef::many("sources", DtuSource::NAME))
            .sub_section(SubSectionDef::many("sputter_parameters", SputterParameters::NAME))
            .sub_section(SubSectionDef::one("environment", DtuChamberEnvironment::NAME))
    }
}

impl Normalize for DtuStep {
    fn normalize(&mut self, ctx: &NormalizeContext<'_>) -> Result<(), NormalizeError> {
        self.sputter_parameters.normalize(ctx)
    }
}

/// What happened after the deposition ended
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndOfProcess {
    /// Side the samples were taken out from
    pub taken_out: TakenOut,
    /// Heater temperature at the end in K
    #[serde(rename = "Heater_temperature", skip_serializing_if = "Option::is_none")]
    pub heater_temperature: Option<f64>,
    /// Time spent in the chamber after deposition, in s
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_chamber_after_ending_deposition: Option<f64>,
    /// Whether the chamber was purged
    pub chamber_purged: bool,
}

impl Section for EndOfProcess {
    const NAME: &'static str = "EndOfProcess";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .quantity_def(
                QuantityDef::enumeration("taken_out", TakenOut::VALUES).default_str("front"),
            )
            .quantity_def(
                QuantityDef::float("Heater_temperature").display(DisplayUnit::DegreeCelsius),
            )
            .quantity_def(
                QuantityDef::float("time_in_chamber_after_ending_deposition")
                    .display(DisplayUnit::Minute),
            )
            .quantity_def(QuantityDef::boolean("chamber_purged").default_bool(false))
    }
}

/// Instrument settings changed for the run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustedInstrumentParameters {
    /// Platen rotation in rad
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platen_rotation: Option<f64>,
    /// Stage mounted
    pub stage_used: StageUsed,
    /// Shadow mask used
    pub mask_used: bool,
    /// Mask description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_description: Option<String>,
}

impl Section for AdjustedInstrumentParameters {
    const NAME: &'static str = "AdjustedInstrumentParameters";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .quantity_def(QuantityDef::float("platen_rotation").display(DisplayUnit::Degree))
            .quantity_def(
                QuantityDef::enumeration("stage_used", StageUsed::VALUES).default_str("heating"),
            )
            .quantity_def(QuantityDef::boolean("mask_used").default_bool(false))
            .quantity_def(QuantityDef::rich_text("mask_description"))
    }
}

/// Summary parameters of the deposition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepositionParameters {
    /// Deposition temperature in K
    pub deposition_temperature: f64,
    /// Sputter pressure in Pa
    pub sputter_pressure: f64,
    /// Material space, e.g. "-P-S"
    pub material_space: String,
    /// Applied power in W
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_power: Option<f64>,
    /// Power at which the plasma ignited, in W
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plasma_ignited_at: Option<f64>,
    /// Power supply mode
    pub power_type: PowerType,
    /// Stable average voltage in V
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stable_average_voltage: Option<f64>,
    /// Remarks on the voltage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments_about_voltage: Option<String>,
    /// Ar flow in m^3/s
    #[serde(rename = "Ar_flow", skip_serializing_if = "Option::is_none")]
    pub ar_flow: Option<f64>,
    /// 10% H2S in Ar flow in m^3/s (standard conditions)
    #[serde(rename = "H2S_in_Ar_flow", skip_serializing_if = "Option::is_none")]
    pub h2s_in_ar_flow: Option<f64>,
    /// 10% PH3 in Ar flow in m^3/s (standard conditions)
    #[serde(rename = "PH3_in_Ar_flow", skip_serializing_if = "Option::is_none")]
    pub ph3_in_ar_flow: Option<f64>,
    /// Heating procedure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heating_procedure_description: Option<String>,
    /// Cooling procedure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooling_procedure_description: Option<String>,
    /// Deposition time in s
    pub deposition_time: f64,
}

impl Default for DepositionParameters {
    fn default() -> Self {
        Self {
            deposition_temperature: DEFAULT_SET_POINT_TEMPERATURE,
            sputter_pressure: DEFAULT_SPUTTER_PRESSURE,
            material_space: "-P-S".to_string(),
            applied_power: None,
            plasma_ignited_at: None,
            power_type: PowerType::default(),
            stable_average_voltage: None,
            comments_about_voltage: None,
            ar_flow: None,
            h2s_in_ar_flow: None,
            ph3_in_ar_flow: None,
            heating_procedure_description: None,
            cooling_procedure_description: None,
            deposition_time: DEFAULT_DEPOSITION_TIME,
        }
    }
}

const STANDARD_FLOW_NOTE: &str = "Equivalent flow at standard conditions, i.e. the rate at \
     0 °C (273.15 K) and 1 atm (101325 Pa).";

impl Section for DepositionParameters {
    const NAME: &'static str = "DepositionParameters";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .quantity_def(
                QuantityDef::float("deposition_temperature")
                    .display(DisplayUnit::DegreeCelsius)
                    .default_float(DEFAULT_SET_POINT_TEMPERATURE),
            )
            .quantity_def(
                QuantityDef::float("sputter_pressure")
                    .display(DisplayUnit::Millitorr)
                    .default_float(DEFAULT_SPUTTER_PRESSURE),
            )
            .quantity_def(QuantityDef::string("material_space").default_str("-P-S"))
            .quantity_def(QuantityDef::float("applied_power").display(DisplayUnit::Watt))
            .quantity_def(QuantityDef::float("plasma_ignited_at").display(DisplayUnit::Watt))
            .quantity_def(
                QuantityDef::enumeration("power_type", PowerType::VALUES).default_str("RF"),
            )
            .quantity_def(QuantityDef::float("stable_average_voltage").display(DisplayUnit::Volt))
            .quantity_def(QuantityDef::rich_text("comments_about_voltage"))
            .quantity_def(
                QuantityDef::float("Ar_flow").display(DisplayUnit::CubicCentimetrePerMinute),
            )
            .quantity_def(
                QuantityDef::float("H2S_in_Ar_flow")
                    .display(DisplayUnit::CubicCentimetrePerMinute)
                    .label("H2S in Ar flow")
                    .describe(STANDARD_FLOW_NOTE),
            )
            .quantity_def(
                QuantityDef::float("PH3_in_Ar_flow")
                    .display(DisplayUnit::CubicCentimetrePerMinute)
                    .label("PH3 in Ar flow")
                    .describe(STANDARD_FLOW_NOTE),
            )
            .quantity_def(QuantityDef::rich_text("heating_procedure_description"))
            .quantity_def(QuantityDef::rich_text("cooling_procedure_description"))
            .quantity_def(
                QuantityDef::float("deposition_time")
                    .display(DisplayUnit::Minute)
                    .default_float(DEFAULT_DEPOSITION_TIME),
            )
    }
}

/// A sputter deposition run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DtuSputtering {
    /// Identification; `lab_id` is the run id
    #[serde(flatten)]
    pub info: EntityInfo,
    /// Raw log file of the run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
    /// Samples in the chamber
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<DtuSample>,
    /// Process steps
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<DtuStep>,
    /// End of process
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_of_process: Option<EndOfProcess>,
    /// Adjusted instrument parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjusted_instrument_parameters: Option<AdjustedInstrumentParameters>,
    /// Deposition summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposition_parameters: Option<DepositionParameters>,
}

impl Section for DtuSputtering {
    const NAME: &'static str = "DTUSputtering";

    fn definition() -> SectionDef {
        SectionDef::new(Self::NAME)
            .entry("Sputtering")
            .extends(&["SputterDeposition", "Schema"])
            .quantity_def(QuantityDef::string("lab_id").label("Run ID"))
            .quantity_def(QuantityDef::file("log_file").label("Log file"))
            .sub_section(SubSectionDef::many("samples", DtuSample::NAME))
            .sub_section(SubSectionDef::many("steps", DtuStep::NAME))
            .sub_section(SubSectionDef::one("end_of_process", EndOfProcess::NAME))
            .sub_section(SubSectionDef::one(
                "adjusted_instrument_parameters",
                AdjustedInstrumentParameters::NAME,
            ))
            .sub_section(SubSectionDef::one(
                "deposition_parameters",
                DepositionParameters::NAME,
            ))
    }
}

impl Normalize for DtuSputtering {
    fn normalize(&mut self, ctx: &NormalizeContext<'_>) -> Result<(), NormalizeError> {
        self.steps.normalize(ctx)?;
        log::info!(
            "Sputtering run {}: {} samples, {} steps",
            self.info.lab_id.as_deref().unwrap_or("<no run id>"),
            self.samples.len(),
            self.steps.len()
        );
        Ok(())
    }
}
