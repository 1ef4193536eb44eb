use super::*;
use crate::packages;
use crate::sections::{
    DepositionParameters, DtuGasSupply, DtuInstrument, DtuSputtering, DtuSubstrate, DtuTarget,
};
use crate::units::{DisplayUnit, Unit};

#[test]
fn test_target_definition() {
    let def = DtuTarget::definition();
    assert_eq!(def.name, "DTUTarget");
    assert_eq!(def.label, Some("Target"));
    assert_eq!(def.category, Some(NANOLAB_CATEGORY));

    let thickness = def.quantity("thickness").unwrap();
    assert_eq!(thickness.unit, Some(Unit::Metre));
    assert_eq!(thickness.display_unit, Some(DisplayUnit::Millimetre));
    assert_eq!(thickness.default, Some(DefaultValue::Float(0.00635)));

    let file = def.quantity("impurity_file").unwrap();
    assert_eq!(file.component, Some(EditComponent::FileEdit));
    assert_eq!(file.label, Some("file with impurities"));
}

#[test]
fn test_substrate_enum_defaults() {
    let def = DtuSubstrate::definition();
    let polishing = def.quantity("substrate_polishing").unwrap();
    assert_eq!(polishing.value_type, ValueType::Enum(&["1 sided", "2 sided", "none"]));
    assert_eq!(polishing.default, Some(DefaultValue::Str("1 sided")));

    let doping = def.quantity("doping_of_substrate").unwrap();
    assert_eq!(doping.unit, Some(Unit::OhmMetre));
    assert_eq!(doping.display_unit, Some(DisplayUnit::OhmCentimetre));
}

#[test]
fn test_sputtering_sub_sections() {
    let def = DtuSputtering::definition();
    let steps = def.sub_sections.iter().find(|s| s.name == "steps").unwrap();
    assert!(steps.repeats);
    assert_eq!(steps.section, "DTUsteps");

    let params = DepositionParameters::definition();
    let flow = params.quantity("H2S_in_Ar_flow").unwrap();
    assert_eq!(flow.unit, Some(Unit::CubicMetrePerSecond));
    assert_eq!(flow.label, Some("H2S in Ar flow"));
}

#[test]
fn test_derived_quantities_are_marked() {
    let def = DtuSubstrate::definition();
    assert!(def.quantity("avg_S").unwrap().derived);
    assert!(!def.quantity("length").unwrap().derived);
}

#[test]
fn test_display_lists_quantities() {
    let text = DtuGasSupply::definition().to_string();
    assert!(text.starts_with("DTUGasSupply (Gas Supply)"));
    assert!(text.contains("molecular_mass"));
    assert!(text.contains("display=Da"));
}

#[test]
fn test_instrument_repeating_sources() {
    let def = DtuInstrument::definition();
    let repeating = def.sub_sections.iter().filter(|s| s.repeats).count();
    assert_eq!(repeating, 9);
    assert!(def.dimensional_quantities().count() >= 2);
}

#[test]
fn test_every_registered_section_resolves() {
    for package in packages::registry() {
        for section in package.sections {
            assert!(
                packages::section_definition(section).is_some(),
                "{} is not resolvable",
                section
            );
        }
    }
}

fn assert_defaults_match<T: Section + Default + serde::Serialize>() {
    let stored = serde_json::to_value(T::default()).unwrap();
    for q in &T::definition().quantities {
        let (Some(default), Some(value)) = (&q.default, stored.get(q.name)) else {
            continue;
        };
        let field = format!("{}.{}", T::NAME, q.name);
        match default {
            DefaultValue::Float(v) => assert_eq!(value.as_f64(), Some(*v), "{}", field),
            DefaultValue::Bool(v) => assert_eq!(value.as_bool(), Some(*v), "{}", field),
            DefaultValue::Str(v) => assert_eq!(value.as_str(), Some(*v), "{}", field),
        }
    }
}

/// Record `Default` impls agree with the declared defaults
#[test]
fn test_record_defaults_match_definitions() {
    use crate::sections::{
        AdjustedInstrumentParameters, Chamber, DtuSample, DtuSource, EndOfProcess, Special,
        SubstrateHeating,
    };

    assert_defaults_match::<DtuTarget>();
    assert_defaults_match::<DtuSubstrate>();
    assert_defaults_match::<DtuGasSupply>();
    assert_defaults_match::<DtuInstrument>();
    assert_defaults_match::<DtuSputtering>();
    assert_defaults_match::<DtuSample>();
    assert_defaults_match::<Chamber>();
    assert_defaults_match::<SubstrateHeating>();
    assert_defaults_match::<Special>();
    assert_defaults_match::<DtuSource>();
    assert_defaults_match::<EndOfProcess>();
    assert_defaults_match::<AdjustedInstrumentParameters>();
    assert_defaults_match::<DepositionParameters>();
}
