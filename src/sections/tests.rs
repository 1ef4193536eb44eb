use super::*;
use crate::normalize::{
    InMemoryFiles, Normalize, NormalizeConfig, NormalizeContext, NormalizeError,
};
use crate::parsers::ParseError;

const EDX: &str = "\
Spectrum Label,X (mm),Y (mm),Substrate Si Atomic %,Layer 1 Density (g/cm³),Layer 1 Thickness (nm),Layer 1 P Atomic %,Layer 1 S Atomic %,Layer 1 Cu Atomic %
Spectrum 1,-10.0,-10.0,12.1,4.5,210,10.0,40.0,50.0
Spectrum 2,0.0,0.0,11.8,4.6,215,12.0,44.0,44.0
";

fn run<T: Normalize>(section: &mut T, files: &InMemoryFiles) -> Result<(), NormalizeError> {
    let config = NormalizeConfig::default();
    let ctx = NormalizeContext::new(files, &config);
    section.normalize(&ctx)
}

#[test]
fn test_target_defaults() {
    let target = DtuTarget::default();
    assert_eq!(target.thickness, DEFAULT_TARGET_THICKNESS);
    assert!(target.magkeeper_target);
    assert!(target.supplier_id.is_none());
}

#[test]
fn test_target_normalize() {
    let files = InMemoryFiles::new().with_file(
        "DTU_target_Cu2S_L_017_impurities.txt",
        "Fe 12 ppm\nNi 0.5 ppm\nO <0.02 wt%\n",
    );
    let mut target = DtuTarget {
        impurity_file: Some("DTU_target_Cu2S_L_017_impurities.txt".to_string()),
        ..Default::default()
    };
    run(&mut target, &files).unwrap();

    assert_eq!(target.supplier_id.as_deref(), Some("Lesker"));
    assert_eq!(target.system.info.lab_id.as_deref(), Some("Cu2S L 017"));

    let composition = &target.system.elemental_composition;
    assert_eq!(composition.len(), 2);
    assert_eq!(composition[0].element, "Cu");
    assert!((composition[0].atomic_fraction - 2.0 / 3.0).abs() < 1e-12);
    assert!((composition[1].atomic_fraction - 1.0 / 3.0).abs() < 1e-12);

    let components = &target.system.components;
    assert_eq!(components.len(), 3);
    assert_eq!(components[2].name, "O impurity");
    assert!((components[2].mass_fraction - 2e-4).abs() < 1e-15);
}

#[test]
fn test_target_unknown_supplier_is_kept() {
    let files = InMemoryFiles::new().with_file("DTU_target_ZrS2_X_001.txt", "Fe 1 ppm\n");
    let mut target = DtuTarget {
        impurity_file: Some("DTU_target_ZrS2_X_001.txt".to_string()),
        supplier_id: Some("Local".to_string()),
        ..Default::default()
    };
    run(&mut target, &files).unwrap();
    assert_eq!(target.supplier_id.as_deref(), Some("Local"));
}

#[test]
fn test_target_without_file_is_untouched() {
    let mut target = DtuTarget::default();
    run(&mut target, &InMemoryFiles::new()).unwrap();
    assert_eq!(target, DtuTarget::default());
}

#[test]
fn test_target_bad_unit_aborts() {
    let files = InMemoryFiles::new().with_file("DTU_target_Cu2S_T_001.txt", "Fe 12 mg\n");
    let mut target = DtuTarget {
        impurity_file: Some("DTU_target_Cu2S_T_001.txt".to_string()),
        ..Default::default()
    };
    let err = run(&mut target, &files).unwrap_err();
    assert!(matches!(
        err,
        NormalizeError::Parse {
            source: ParseError::UnknownImpurityUnit(_),
            ..
        }
    ));
}

#[test]
fn test_target_missing_file() {
    let mut target = DtuTarget {
        impurity_file: Some("DTU_target_Cu2S_T_001.txt".to_string()),
        ..Default::default()
    };
    let err = run(&mut target, &InMemoryFiles::new()).unwrap_err();
    assert!(matches!(err, NormalizeError::RawFile { .. }));
}

#[test]
fn test_target_cleared_file_is_skipped() {
    let mut target = DtuTarget {
        impurity_file: Some(String::new()),
        ..Default::default()
    };
    run(&mut target, &InMemoryFiles::new()).unwrap();
    assert!(target.system.info.lab_id.is_none());
    assert!(target.system.elemental_composition.is_empty());
    assert!(target.system.components.is_empty());
}

#[test]
fn test_substrate_defaults() {
    let substrate = DtuSubstrate::default();
    assert_eq!(substrate.supplier_id, DEFAULT_SUBSTRATE_SUPPLIER);
    assert_eq!(substrate.substrate_polishing, SubstratePolishing::OneSided);
    assert_eq!(substrate.doping_type_of_substrate, DopingType::N);
    assert_eq!(substrate.doping_elements, "P");
    assert_eq!(substrate.length, 0.04);
    assert_eq!(substrate.thickness, 0.000675);
}

#[test]
fn test_substrate_normalize_edx() {
    let files = InMemoryFiles::new().with_file("edx.csv", EDX);
    let mut substrate = DtuSubstrate {
        edx_data_file: Some("edx.csv".to_string()),
        ..Default::default()
    };
    run(&mut substrate, &files).unwrap();

    assert!((substrate.avg_s.unwrap() - 42.0).abs() < 1e-12);
    assert!((substrate.avg_p.unwrap() - 11.0).abs() < 1e-12);
    assert!((substrate.avg_m1.unwrap() - 47.0).abs() < 1e-12);
    assert_eq!(substrate.avg_m2, Some(0.0));
}

#[test]
fn test_substrate_cleared_edx_file_is_skipped() {
    let mut substrate = DtuSubstrate {
        edx_data_file: Some(String::new()),
        ..Default::default()
    };
    run(&mut substrate, &InMemoryFiles::new()).unwrap();
    assert!(substrate.avg_s.is_none());
    assert!(substrate.avg_m2.is_none());
}

#[test]
fn test_substrate_json_keys() {
    let substrate = DtuSubstrate {
        avg_s: Some(42.0),
        ..Default::default()
    };
    let json = serde_json::to_value(&substrate).unwrap();
    assert_eq!(json["avg_S"], 42.0);
    assert_eq!(json["substrate_polishing"], "1 sided");
    assert_eq!(json["doping_type_of_substrate"], "n");
    assert!(json.get("avg_P").is_none());
}

#[test]
fn test_corrected_temperature() {
    let mut heating = SubstrateHeating {
        set_point_temperature: 673.15,
        corrected_real_temperature: None,
    };
    run(&mut heating, &InMemoryFiles::new()).unwrap();
    let expected = 673.15 * 0.905 + 12.0;
    assert!((heating.corrected_real_temperature.unwrap() - expected).abs() < 1e-9);
}

#[test]
fn test_sputtering_normalize_recurses() {
    let mut run_record = DtuSputtering {
        steps: vec![DtuStep {
            sputter_parameters: vec![SputterParameters {
                substrate: Some(SubstrateHeating::default()),
                ..Default::default()
            }],
            ..Default::default()
        }],
        ..Default::default()
    };
    run(&mut run_record, &InMemoryFiles::new()).unwrap();

    let heating = run_record.steps[0].sputter_parameters[0]
        .substrate
        .as_ref()
        .unwrap();
    assert!((heating.corrected_real_temperature.unwrap() - 283.5).abs() < 1e-9);
}

#[test]
fn test_sputtering_defaults_and_keys() {
    let params = DepositionParameters::default();
    assert_eq!(params.deposition_temperature, DEFAULT_SET_POINT_TEMPERATURE);
    assert_eq!(params.sputter_pressure, DEFAULT_SPUTTER_PRESSURE);
    assert_eq!(params.material_space, "-P-S");
    assert_eq!(params.power_type, PowerType::Rf);
    assert_eq!(params.deposition_time, DEFAULT_DEPOSITION_TIME);

    assert_eq!(EndOfProcess::default().taken_out, TakenOut::Front);
    assert_eq!(AdjustedInstrumentParameters::default().stage_used, StageUsed::Heating);
    assert_eq!(DtuSample::default().method_of_contact, MethodOfContact::Clamps);

    let source = DtuSource {
        power_type: PowerType::PulsedDc,
        ..Default::default()
    };
    let json = serde_json::to_value(&source).unwrap();
    assert_eq!(json["power_type"], "pulsed_DC");
    assert_eq!(json["source_shutter_open"], false);
}

#[test]
fn test_sputtering_from_json() {
    let json = r#"{
        "lab_id": "mittma_0007",
        "samples": [{"lab_id": "mittma_0007_FL", "Substrate_position_x": 0.01, "method_of_contact": "frame"}],
        "deposition_parameters": {"H2S_in_Ar_flow": 1.2e-7, "power_type": "DC"}
    }"#;
    let record: DtuSputtering = serde_json::from_str(json).unwrap();
    assert_eq!(record.info.lab_id.as_deref(), Some("mittma_0007"));
    assert_eq!(record.samples[0].reference.lab_id.as_deref(), Some("mittma_0007_FL"));
    assert_eq!(record.samples[0].substrate_position_x, Some(0.01));
    assert_eq!(record.samples[0].method_of_contact, MethodOfContact::Frame);

    let params = record.deposition_parameters.unwrap();
    assert_eq!(params.h2s_in_ar_flow, Some(1.2e-7));
    assert_eq!(params.power_type, PowerType::Dc);
    assert_eq!(params.deposition_time, DEFAULT_DEPOSITION_TIME);
}

#[test]
fn test_instrument_json_keys() {
    let instrument = DtuInstrument {
        taurus_source: vec![GunPlacement {
            set_angle: Some(0.5),
            ..Default::default()
        }],
        ..Default::default()
    };
    let json = serde_json::to_value(&instrument).unwrap();
    assert_eq!(json["Taurus_source"][0]["set_angle"], 0.5);
    assert!(json.get("purge").is_none());
}

#[test]
fn test_sample_lab_id_from_file() {
    assert_eq!(
        sample_lab_id_from_file("user_0001_nk.txt").as_deref(),
        Some("user_0001")
    );
    assert_eq!(
        sample_lab_id_from_file("data/user_0002.SESNAP").as_deref(),
        Some("user_0002")
    );
    assert_eq!(sample_lab_id_from_file("nk.txt"), None);
}

#[test]
fn test_ellipsometry_adds_reference_once() {
    let mut measurement = DtuEllipsometryMeasurement {
        n_and_k_file: Some("amika_0012_BR_nk.txt".to_string()),
        thickness_file: Some("other_0001_thickness.txt".to_string()),
        ..Default::default()
    };
    let files = InMemoryFiles::new();
    run(&mut measurement, &files).unwrap();
    run(&mut measurement, &files).unwrap();

    assert_eq!(measurement.samples.len(), 1);
    assert_eq!(measurement.samples[0].lab_id.as_deref(), Some("amika_0012"));
}

#[test]
fn test_ellipsometry_prefers_native_file() {
    let measurement = DtuEllipsometryMeasurement {
        native_file: Some("a_1.SESNAP".to_string()),
        n_and_k_file: Some("b_2_nk.txt".to_string()),
        ..Default::default()
    };
    assert_eq!(measurement.reference_file(), Some("a_1.SESNAP"));
}

#[test]
fn test_ellipsometry_skips_cleared_files() {
    let measurement = DtuEllipsometryMeasurement {
        native_file: Some(String::new()),
        n_and_k_file: Some("b_2_nk.txt".to_string()),
        ..Default::default()
    };
    assert_eq!(measurement.reference_file(), Some("b_2_nk.txt"));
}
