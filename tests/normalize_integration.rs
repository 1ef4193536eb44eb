//! Integration tests for nanolab
//!
//! These tests run archives through normalization against an upload directory
//! on disk, then validate and re-read the results.

use nanolab::normalize::{
    Entry, EntryArchive, NormalizeConfig, NormalizeContext, NormalizeError, UploadDir,
};
use nanolab::packages;
use nanolab::validator::{validate_archive_file, validate_entry};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const IMPURITIES: &str = "\
Fe 12 ppm
Ni <0.5 ppm
Ca   3   ppm

O 0.02 wt%
Na 80 ppb
";

const EDX: &str = "\
Spectrum Label,X (mm),Y (mm),Substrate Si Atomic %,Layer 1 Density (g/cm³),Layer 1 Thickness (nm),Layer 1 P Atomic %,Layer 1 S Atomic %,Layer 1 Cu Atomic %
Spectrum 1,-10.0,-10.0,12.1,4.5,210,10.0,40.0,50.0
Spectrum 2,0.0,0.0,11.8,4.6,215,,44.0,44.0
Spectrum 3,10.0,10.0,12.5,4.4,205,14.0,42.0,44.0
";

fn write(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn normalize(dir: &Path, json: &str) -> Result<EntryArchive, NormalizeError> {
    let mut archive = EntryArchive::from_json(json)?;
    let files = UploadDir::new(dir);
    let config = NormalizeConfig::default();
    archive.normalize(&NormalizeContext::new(&files, &config))?;
    Ok(archive)
}

/// Target archive: file name, formula and impurity table end up in the record
#[test]
fn test_target_pipeline() {
    let dir = tempdir().unwrap();
    write(dir.path(), "raw/DTU_target_BaZrS3_T_042_impurities.txt", IMPURITIES);

    let archive = normalize(
        dir.path(),
        r#"{
            "entry_name": "BaZrS3 target",
            "data": {
                "m_def": "DTUTarget",
                "impurity_file": "raw/DTU_target_BaZrS3_T_042_impurities.txt",
                "magkeeper_Target": false
            }
        }"#,
    )
    .unwrap();

    let Entry::Target(target) = &archive.data else {
        panic!("expected a target, got {}", archive.data.section_name());
    };
    assert_eq!(target.system.info.lab_id.as_deref(), Some("BaZrS3 T 042"));
    assert_eq!(target.supplier_id.as_deref(), Some("Testbourne"));
    assert!(!target.magkeeper_target);

    let elements: Vec<_> = target
        .system
        .elemental_composition
        .iter()
        .map(|e| e.element.as_str())
        .collect();
    assert_eq!(elements, vec!["Ba", "Zr", "S"]);
    assert!((target.system.elemental_composition[2].atomic_fraction - 0.6).abs() < 1e-12);

    assert_eq!(target.system.components.len(), 5);
    assert!((target.system.components[1].mass_fraction - 0.5e-6).abs() < 1e-18);

    let report = validate_entry(&archive.data);
    assert!(!report.has_failures(), "{}", report);
    assert!(!report.has_warnings(), "{}", report);
}

/// Normalized output written to disk reads back identically
#[test]
fn test_normalized_archive_round_trip() {
    let dir = tempdir().unwrap();
    write(dir.path(), "edx.csv", EDX);

    let archive = normalize(
        dir.path(),
        r#"{"data": {"m_def": "DTUSubstrate", "edx_data_file": "edx.csv"}}"#,
    )
    .unwrap();

    let out = dir.path().join("substrate.archive.json");
    fs::write(&out, archive.to_json().unwrap()).unwrap();
    let reread = EntryArchive::from_path(&out).unwrap();
    assert_eq!(reread, archive);

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["data"]["m_def"], "DTUSubstrate");
    assert!((json["data"]["avg_S"].as_f64().unwrap() - 42.0).abs() < 1e-12);
    // missing P cell is skipped
    assert!((json["data"]["avg_P"].as_f64().unwrap() - 12.0).abs() < 1e-12);
    assert_eq!(json["data"]["avg_M2"], 0.0);

    let report = validate_archive_file(&out, Some(&UploadDir::new(dir.path()))).unwrap();
    assert!(!report.has_failures(), "{}", report);
    assert!(!report.has_warnings(), "{}", report);
}

/// Sputtering runs compute corrected temperatures in every step
#[test]
fn test_sputtering_pipeline() {
    let dir = tempdir().unwrap();
    let archive = normalize(
        dir.path(),
        r#"{"data": {
            "m_def": "DTUSputtering",
            "lab_id": "eugbe_0009",
            "steps": [
                {"name": "ramp", "sputter_parameters": [{"substrate": {"set_point_temperature": 573.15}}]},
                {"name": "deposition", "sputter_parameters": [{"substrate": {}}, {"chamber": {}}]}
            ]
        }}"#,
    )
    .unwrap();

    let Entry::Sputtering(run) = &archive.data else {
        panic!("expected a sputtering run");
    };
    let ramp = run.steps[0].sputter_parameters[0].substrate.as_ref().unwrap();
    assert!((ramp.corrected_real_temperature.unwrap() - (573.15 * 0.905 + 12.0)).abs() < 1e-9);

    let deposition = &run.steps[1].sputter_parameters;
    let heating = deposition[0].substrate.as_ref().unwrap();
    assert_eq!(heating.set_point_temperature, 300.0);
    assert!((heating.corrected_real_temperature.unwrap() - 283.5).abs() < 1e-9);
    assert_eq!(deposition[1].chamber.as_ref().unwrap().total_pressure, 0.6666);
}

/// Ellipsometry links the sample named in the exported file
#[test]
fn test_ellipsometry_pipeline() {
    let dir = tempdir().unwrap();
    let archive = normalize(
        dir.path(),
        r#"{"data": {
            "m_def": "DTUEllipsometryMeasurement",
            "thickness_file": "anned_0004_FR_thickness.txt",
            "samples": [{"lab_id": "anned_0004"}]
        }}"#,
    )
    .unwrap();

    let Entry::Ellipsometry(measurement) = &archive.data else {
        panic!("expected an ellipsometry measurement");
    };
    assert_eq!(measurement.samples.len(), 1);
}

#[test]
fn test_missing_raw_file() {
    let dir = tempdir().unwrap();
    let err = normalize(
        dir.path(),
        r#"{"data": {"m_def": "DTUSubstrate", "edx_data_file": "nope.csv"}}"#,
    )
    .unwrap_err();
    assert!(matches!(err, NormalizeError::RawFile { ref name, .. } if name == "nope.csv"));
}

#[test]
fn test_raw_file_outside_upload() {
    let dir = tempdir().unwrap();
    let err = normalize(
        dir.path(),
        r#"{"data": {"m_def": "DTUSubstrate", "edx_data_file": "../edx.csv"}}"#,
    )
    .unwrap_err();
    assert!(matches!(err, NormalizeError::RawFile { .. }));
}

#[test]
fn test_unknown_section() {
    let err = EntryArchive::from_json(r#"{"data": {"m_def": "DTUXRDMeasurement"}}"#).unwrap_err();
    assert!(matches!(err, NormalizeError::JsonError(_)));
}

/// Every entry section has a template that survives a JSON round trip
#[test]
fn test_templates_round_trip() {
    for package in packages::registry() {
        let section = package.sections[0];
        let entry = Entry::template(section).unwrap();
        assert_eq!(entry.section_name(), section);

        let json = EntryArchive::new(entry.clone()).to_json().unwrap();
        let reread = EntryArchive::from_json(&json).unwrap();
        assert_eq!(reread.data, entry);
    }
}
