use crate::sections::{DtuInstrument, DtuSputtering, DtuSubstrate};

use super::{ValidationCheck, ValidationReport};

fn require(
    values: &[(&str, Option<f64>)],
    holds: impl Fn(f64) -> bool,
    expectation: &str,
) -> Vec<String> {
    values
        .iter()
        .filter_map(|(name, value)| match value {
            Some(v) if !holds(*v) => Some(format!("{} = {} is not {}", name, v, expectation)),
            _ => None,
        })
        .collect()
}

/// Every value strictly positive (NaN fails)
pub(super) fn positive(values: &[(&str, Option<f64>)]) -> Vec<String> {
    require(values, |v| v > 0.0, "positive")
}

/// Every value zero or more (NaN fails)
pub(super) fn non_negative(values: &[(&str, Option<f64>)]) -> Vec<String> {
    require(values, |v| v >= 0.0, "non-negative")
}

/// Every value a percentage
pub(super) fn percentage(values: &[(&str, Option<f64>)]) -> Vec<String> {
    require(values, |v| (0.0..=100.0).contains(&v), "within [0, 100]")
}

pub(super) fn check_substrate(substrate: &DtuSubstrate, report: &mut ValidationReport) {
    report.add_check(ValidationCheck::from_problems(
        "Dimensions",
        positive(&[
            ("length", Some(substrate.length)),
            ("width", Some(substrate.width)),
            ("thickness", Some(substrate.thickness)),
        ]),
    ));
    report.add_check(ValidationCheck::from_problems(
        "EDX averages",
        percentage(&[
            ("avg_S", substrate.avg_s),
            ("avg_P", substrate.avg_p),
            ("avg_M1", substrate.avg_m1),
            ("avg_M2", substrate.avg_m2),
        ]),
    ));
}

pub(super) fn check_sputtering(run: &DtuSputtering, report: &mut ValidationReport) {
    let params = run.deposition_parameters.as_ref();
    report.add_check(ValidationCheck::from_problems(
        "Deposition time",
        non_negative(&[("deposition_time", params.map(|p| p.deposition_time))]),
    ));

    let mut pressures = vec![("sputter_pressure".to_string(), params.map(|p| p.sputter_pressure))];
    for (i, step) in run.steps.iter().enumerate() {
        for parameters in &step.sputter_parameters {
            if let Some(chamber) = &parameters.chamber {
                pressures.push((
                    format!("steps[{}].total_pressure", i),
                    Some(chamber.total_pressure),
                ));
            }
            if let Some(cracker) = &parameters.s_cracker {
                pressures.push((
                    format!("steps[{}].S_partial_pressure", i),
                    cracker.s_partial_pressure,
                ));
            }
        }
    }
    let pressures: Vec<(&str, Option<f64>)> =
        pressures.iter().map(|(n, v)| (n.as_str(), *v)).collect();
    report.add_check(ValidationCheck::from_problems(
        "Pressures",
        non_negative(&pressures),
    ));
}

pub(super) fn check_instrument(instrument: &DtuInstrument, report: &mut ValidationReport) {
    let mut pressures = vec![("base_pressure", instrument.base_pressure)];
    pressures.extend(
        instrument
            .purge
            .iter()
            .map(|p| ("pressure_during_purge", p.pressure_during_purge)),
    );
    report.add_check(ValidationCheck::from_problems(
        "Pressures",
        non_negative(&pressures),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::{Chamber, DepositionParameters, DtuStep, SputterParameters};

    #[test]
    fn test_missing_values_pass() {
        assert!(positive(&[("length", None)]).is_empty());
    }

    #[test]
    fn test_nan_is_rejected() {
        assert_eq!(non_negative(&[("x", Some(f64::NAN))]).len(), 1);
    }

    #[test]
    fn test_percentage_bounds() {
        assert!(percentage(&[("a", Some(0.0)), ("b", Some(100.0))]).is_empty());
        assert_eq!(percentage(&[("a", Some(100.5))]).len(), 1);
    }

    #[test]
    fn test_negative_step_pressure() {
        let run = DtuSputtering {
            steps: vec![DtuStep {
                sputter_parameters: vec![SputterParameters {
                    chamber: Some(Chamber {
                        total_pressure: -1.0,
                        ..Default::default()
                    }),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            deposition_parameters: Some(DepositionParameters::default()),
            ..Default::default()
        };
        let mut report = ValidationReport::new("run", "DTUSputtering");
        check_sputtering(&run, &mut report);

        assert_eq!(
            report.check("Deposition time").unwrap().status,
            crate::validator::CheckStatus::Ok
        );
        let pressures = report.check("Pressures").unwrap();
        assert!(matches!(
            pressures.status,
            crate::validator::CheckStatus::Failed(ref m) if m.contains("steps[0].total_pressure")
        ));
    }
}
