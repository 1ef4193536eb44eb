//! Chemical formula parsing.
//!
//! Formulas are read the way target names are written in the lab: a sequence of
//! element symbols (`[A-Z][a-z]?`), each optionally followed by an integer count.
//! Anything between matches is skipped, so `Cu2-S` parses like `Cu2S`. Groups,
//! hydrates and charges are not interpreted.
//!
//! ```
//! use nanolab::parsers::elemental_composition;
//!
//! let composition = elemental_composition("Cu2S").unwrap();
//! assert_eq!(composition[0].element, "Cu");
//! assert!((composition[0].atomic_fraction - 2.0 / 3.0).abs() < 1e-12);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::sections::ElementalComposition;

use super::ParseError;

static ELEMENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z][a-z]?)(\d*)").expect("element pattern is valid"));

/// An element symbol with its count in a formula
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementCount {
    /// Element symbol, e.g. "Cu"
    pub element: String,
    /// Number of atoms (1 when omitted)
    pub count: u64,
}

/// Split a formula into element/count pairs, in order of appearance
///
/// Repeated symbols are kept as separate entries.
pub fn parse_formula(formula: &str) -> Result<Vec<ElementCount>, ParseError> {
    let mut counts = Vec::new();

    for captures in ELEMENT_PATTERN.captures_iter(formula) {
        let element = &captures[1];
        let digits = &captures[2];
        let count = if digits.is_empty() {
            1
        } else {
            digits.parse().map_err(|_| ParseError::InvalidCount {
                formula: formula.to_string(),
                count: digits.to_string(),
            })?
        };
        counts.push(ElementCount {
            element: element.to_string(),
            count,
        });
    }

    if counts.is_empty() {
        return Err(ParseError::EmptyFormula(formula.to_string()));
    }

    log::debug!("Parsed formula '{}' into {} elements", formula, counts.len());
    Ok(counts)
}

/// Atomic fraction of each entry: count divided by the total count
pub fn atomic_fractions(counts: &[ElementCount]) -> Result<Vec<ElementalComposition>, ParseError> {
    let total: u128 = counts.iter().map(|c| u128::from(c.count)).sum();
    if total == 0 {
        let formula: String = counts
            .iter()
            .map(|c| format!("{}{}", c.element, c.count))
            .collect();
        return Err(ParseError::EmptyFormula(formula));
    }

    Ok(counts
        .iter()
        .map(|c| ElementalComposition::new(&c.element, c.count as f64 / total as f64))
        .collect())
}

/// Parse a formula and compute atomic fractions in one step
pub fn elemental_composition(formula: &str) -> Result<Vec<ElementalComposition>, ParseError> {
    atomic_fractions(&parse_formula(formula)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(formula: &str) -> Vec<(String, u64)> {
        parse_formula(formula)
            .unwrap()
            .into_iter()
            .map(|c| (c.element, c.count))
            .collect()
    }

    #[test]
    fn test_implicit_counts() {
        assert_eq!(
            pairs("CuS"),
            vec![("Cu".to_string(), 1), ("S".to_string(), 1)]
        );
    }

    #[test]
    fn test_explicit_counts() {
        assert_eq!(
            pairs("Ba3Zr2S7"),
            vec![
                ("Ba".to_string(), 3),
                ("Zr".to_string(), 2),
                ("S".to_string(), 7)
            ]
        );
    }

    #[test]
    fn test_separators_are_ignored() {
        assert_eq!(pairs("Cu2-S"), pairs("Cu2S"));
        assert_eq!(pairs("(Zr)S2"), pairs("ZrS2"));
    }

    #[test]
    fn test_repeated_symbols_stay_separate() {
        let parsed = pairs("CuSCu");
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[2], ("Cu".to_string(), 1));
    }

    #[test]
    fn test_two_letter_symbols() {
        assert_eq!(pairs("Ag"), vec![("Ag".to_string(), 1)]);
        // lowercase without a leading capital is not a symbol
        assert_eq!(pairs("xS"), vec![("S".to_string(), 1)]);
    }

    #[test]
    fn test_no_elements() {
        assert!(matches!(
            parse_formula("123"),
            Err(ParseError::EmptyFormula(_))
        ));
        assert!(matches!(parse_formula(""), Err(ParseError::EmptyFormula(_))));
    }

    #[test]
    fn test_count_overflow() {
        assert!(matches!(
            parse_formula("Cu99999999999999999999"),
            Err(ParseError::InvalidCount { .. })
        ));
    }

    #[test]
    fn test_large_counts() {
        assert_eq!(
            pairs("Cu5000000000S"),
            vec![("Cu".to_string(), 5_000_000_000), ("S".to_string(), 1)]
        );
    }

    #[test]
    fn test_fractions() {
        let fractions = elemental_composition("Cu2S").unwrap();
        assert_eq!(fractions.len(), 2);
        assert!((fractions[0].atomic_fraction - 2.0 / 3.0).abs() < 1e-12);
        assert!((fractions[1].atomic_fraction - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_total() {
        assert!(matches!(
            elemental_composition("Cu0S0"),
            Err(ParseError::EmptyFormula(_))
        ));
    }
}
