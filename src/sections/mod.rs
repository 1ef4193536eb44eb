//! # Lab records
//!
//! Typed records for the sputtering lab: targets, substrates, gas bottles,
//! deposition runs, the chamber itself and ellipsometry mappings. Every record
//! stores SI values and implements [`Section`](crate::schema::Section) for its
//! declarative definition and [`Normalize`](crate::normalize::Normalize) for
//! the quantities it derives.
//!
//! JSON keys follow the ELN field names, so some differ from the Rust field
//! names (`avg_S`, `magkeeper_Target`, `H2S_in_Ar_flow`, ...).

mod base;
mod ellipsometry;
mod gas;
mod instrument;
mod sputtering;
mod substrate;
mod target;

pub use base::{
    Component, CompositeSystem, CompositeSystemReference, ElementalComposition, EntityInfo,
};
pub use ellipsometry::{
    sample_lab_id_from_file, DtuEllipsometryMeasurement, EllipsometryMappingResult,
    EllipsometryMetadata,
};
pub use gas::DtuGasSupply;
pub use instrument::{
    DtuInstrument, GunPlacement, NonToxicGasInlet, OpeningToAir, ProperCleaning, Purge,
    SCrackerSource, ToxicGasInlet,
};
pub use sputtering::{
    corrected_temperature, AdjustedInstrumentParameters, Chamber, DepositionParameters,
    DtuChamberEnvironment, DtuGasFlow, DtuSample, DtuSource, DtuSputtering, DtuStep,
    EndOfProcess, MethodOfContact, PowerType, SCracker, Special, SputterParameters, StageUsed,
    SubstrateHeating, TakenOut, DEFAULT_DEPOSITION_TIME, DEFAULT_SET_POINT_TEMPERATURE,
    DEFAULT_SPUTTER_PRESSURE,
};
pub use substrate::{DopingType, DtuSubstrate, SubstratePolishing, DEFAULT_SUBSTRATE_SUPPLIER};
pub use target::{DtuTarget, DEFAULT_TARGET_THICKNESS};

/// Identification of an instrument
pub type InstrumentBase = EntityInfo;

#[cfg(test)]
mod tests;
