//! Schema packages registered with the ELN.
//!
//! Each package groups the sections of one lab area. The registry is what the
//! `packages` and `schema` commands list, and what a host uses to discover the
//! available entry types.

use serde::Serialize;

use crate::schema::{Section, SectionDef};
use crate::sections::*;

/// A named group of section definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchemaPackage {
    /// Package name
    pub name: &'static str,
    /// One line description
    pub description: &'static str,
    /// Section names, entry section first
    pub sections: &'static [&'static str],
}

static REGISTRY: &[SchemaPackage] = &[
    SchemaPackage {
        name: "Sputtering",
        description: "Sputter deposition runs: samples, steps, sources and parameters",
        sections: &[
            DtuSputtering::NAME,
            DtuSample::NAME,
            DtuStep::NAME,
            DtuSource::NAME,
            SputterParameters::NAME,
            Chamber::NAME,
            SubstrateHeating::NAME,
            SCracker::NAME,
            Special::NAME,
            DtuChamberEnvironment::NAME,
            DtuGasFlow::NAME,
            EndOfProcess::NAME,
            AdjustedInstrumentParameters::NAME,
            DepositionParameters::NAME,
        ],
    },
    SchemaPackage {
        name: "Gas",
        description: "Gas bottles connected to the chamber",
        sections: &[DtuGasSupply::NAME],
    },
    SchemaPackage {
        name: "Targets",
        description: "Sputter targets and cracker charges with impurity tables",
        sections: &[DtuTarget::NAME],
    },
    SchemaPackage {
        name: "Substrate",
        description: "Wafer substrates with EDX averages",
        sections: &[DtuSubstrate::NAME],
    },
    SchemaPackage {
        name: "Instrument",
        description: "The deposition chamber and its maintenance log",
        sections: &[
            DtuInstrument::NAME,
            Purge::NAME,
            ProperCleaning::NAME,
            OpeningToAir::NAME,
            NonToxicGasInlet::NAME,
            ToxicGasInlet::NAME,
            GunPlacement::NAME,
            SCrackerSource::NAME,
        ],
    },
    SchemaPackage {
        name: "Ellipsometry",
        description: "Spectroscopic ellipsometry mappings",
        sections: &[
            DtuEllipsometryMeasurement::NAME,
            EllipsometryMetadata::NAME,
            EllipsometryMappingResult::NAME,
        ],
    },
];

/// All registered packages
pub fn registry() -> &'static [SchemaPackage] {
    REGISTRY
}

/// Look up a package by name, ignoring case
pub fn find(name: &str) -> Option<&'static SchemaPackage> {
    REGISTRY.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Definition of a section by its section name
///
/// Covers every packaged section plus the shared base sections.
pub fn section_definition(name: &str) -> Option<SectionDef> {
    let definitions: [(&str, fn() -> SectionDef); 32] = [
        (ElementalComposition::NAME, ElementalComposition::definition),
        (Component::NAME, Component::definition),
        (CompositeSystem::NAME, CompositeSystem::definition),
        (CompositeSystemReference::NAME, CompositeSystemReference::definition),
        (DtuGasSupply::NAME, DtuGasSupply::definition),
        (DtuTarget::NAME, DtuTarget::definition),
        (DtuSubstrate::NAME, DtuSubstrate::definition),
        (DtuSputtering::NAME, DtuSputtering::definition),
        (DtuSample::NAME, DtuSample::definition),
        (DtuStep::NAME, DtuStep::definition),
        (DtuSource::NAME, DtuSource::definition),
        (SputterParameters::NAME, SputterParameters::definition),
        (Chamber::NAME, Chamber::definition),
        (SubstrateHeating::NAME, SubstrateHeating::definition),
        (SCracker::NAME, SCracker::definition),
        (Special::NAME, Special::definition),
        (DtuChamberEnvironment::NAME, DtuChamberEnvironment::definition),
        (DtuGasFlow::NAME, DtuGasFlow::definition),
        (EndOfProcess::NAME, EndOfProcess::definition),
        (AdjustedInstrumentParameters::NAME, AdjustedInstrumentParameters::definition),
        (DepositionParameters::NAME, DepositionParameters::definition),
        (DtuInstrument::NAME, DtuInstrument::definition),
        (Purge::NAME, Purge::definition),
        (ProperCleaning::NAME, ProperCleaning::definition),
        (OpeningToAir::NAME, OpeningToAir::definition),
        (NonToxicGasInlet::NAME, NonToxicGasInlet::definition),
        (ToxicGasInlet::NAME, ToxicGasInlet::definition),
        (GunPlacement::NAME, GunPlacement::definition),
        (SCrackerSource::NAME, SCrackerSource::definition),
        (DtuEllipsometryMeasurement::NAME, DtuEllipsometryMeasurement::definition),
        (EllipsometryMetadata::NAME, EllipsometryMetadata::definition),
        (EllipsometryMappingResult::NAME, EllipsometryMappingResult::definition),
    ];

    definitions
        .iter()
        .find(|(section, _)| *section == name)
        .map(|(_, definition)| definition())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_names() {
        let names: Vec<_> = registry().iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec!["Sputtering", "Gas", "Targets", "Substrate", "Instrument", "Ellipsometry"]
        );
    }

    #[test]
    fn test_find_ignores_case() {
        assert_eq!(find("targets").map(|p| p.name), Some("Targets"));
        assert_eq!(find("SPUTTERING").map(|p| p.sections[0]), Some("DTUSputtering"));
        assert!(find("xrd").is_none());
    }

    #[test]
    fn test_entry_sections_are_first() {
        for package in registry() {
            let def = section_definition(package.sections[0]).unwrap();
            assert!(def.label.is_some(), "{} has no entry label", def.name);
        }
    }

    #[test]
    fn test_sub_sections_resolve() {
        for package in registry() {
            for name in package.sections {
                let def = section_definition(name).unwrap();
                for sub in &def.sub_sections {
                    assert!(
                        section_definition(sub.section).is_some(),
                        "{}.{} -> {}",
                        def.name,
                        sub.name,
                        sub.section
                    );
                }
            }
        }
    }

    #[test]
    fn test_unknown_section() {
        assert!(section_definition("DTUXRDMeasurement").is_none());
    }
}
