use crate::sections::CompositeSystem;

use super::{ValidationCheck, ValidationReport};

/// Allowed deviation of the atomic fraction sum from 1
pub const ATOMIC_FRACTION_TOLERANCE: f64 = 1e-9;

/// Composition checks; each only runs when the list is populated
pub(super) fn check_composition(system: &CompositeSystem, report: &mut ValidationReport) {
    if !system.elemental_composition.is_empty() {
        let mut problems = Vec::new();
        for entry in &system.elemental_composition {
            if !(0.0..=1.0).contains(&entry.atomic_fraction) {
                problems.push(format!(
                    "{} has atomic fraction {}",
                    entry.element, entry.atomic_fraction
                ));
            }
        }
        let total: f64 = system
            .elemental_composition
            .iter()
            .map(|e| e.atomic_fraction)
            .sum();
        if !((total - 1.0).abs() <= ATOMIC_FRACTION_TOLERANCE) {
            problems.push(format!("atomic fractions sum to {}", total));
        }
        report.add_check(ValidationCheck::from_problems(
            "Elemental composition",
            problems,
        ));
    }

    if !system.components.is_empty() {
        let problems = system
            .components
            .iter()
            .filter(|c| !(0.0..=1.0).contains(&c.mass_fraction))
            .map(|c| format!("{} has mass fraction {}", c.name, c.mass_fraction))
            .collect();
        report.add_check(ValidationCheck::from_problems(
            "Component mass fractions",
            problems,
        ));
    }
}
