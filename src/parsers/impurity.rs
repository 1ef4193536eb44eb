//! Impurity concentration tables.
//!
//! The supplier certificate is transcribed into a space separated file with one
//! impurity per line and no header:
//!
//! ```text
//! Fe 12 ppm
//! Ni <0.5 ppm
//! O 0.02 wt%
//! Pb 80 ppb
//! ```
//!
//! `<` marks a detection limit; it is dropped and the limit is stored as the value.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::sections::Component;

use super::ParseError;

/// Concentration unit of an impurity row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpurityUnit {
    /// Parts per million by mass
    #[serde(rename = "ppm")]
    Ppm,
    /// Weight percent
    #[serde(rename = "wt%")]
    WeightPercent,
    /// Parts per billion by mass
    #[serde(rename = "ppb")]
    Ppb,
}

impl ImpurityUnit {
    /// Factor converting a value in this unit to a mass fraction
    pub fn mass_fraction_factor(&self) -> f64 {
        match self {
            ImpurityUnit::Ppm => 1e-6,
            ImpurityUnit::WeightPercent => 1e-2,
            ImpurityUnit::Ppb => 1e-9,
        }
    }

    /// Unit as written in the table
    pub fn symbol(&self) -> &'static str {
        match self {
            ImpurityUnit::Ppm => "ppm",
            ImpurityUnit::WeightPercent => "wt%",
            ImpurityUnit::Ppb => "ppb",
        }
    }
}

impl FromStr for ImpurityUnit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ppm" => Ok(ImpurityUnit::Ppm),
            "wt%" => Ok(ImpurityUnit::WeightPercent),
            "ppb" => Ok(ImpurityUnit::Ppb),
            other => Err(ParseError::UnknownImpurityUnit(other.to_string())),
        }
    }
}

impl fmt::Display for ImpurityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One row of an impurity table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Impurity {
    /// Impurity element or species
    pub element: String,
    /// Concentration in `unit`
    pub value: f64,
    /// Concentration unit
    pub unit: ImpurityUnit,
}

impl Impurity {
    /// Mass fraction of the impurity (dimensionless)
    pub fn mass_fraction(&self) -> f64 {
        self.value * self.unit.mass_fraction_factor()
    }

    /// Component entry named `"<element> impurity"`
    pub fn to_component(&self) -> Component {
        Component::new(format!("{} impurity", self.element), self.mass_fraction())
    }
}

/// A parsed impurity table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImpurityTable {
    /// Rows in file order
    pub impurities: Vec<Impurity>,
}

impl ImpurityTable {
    /// Parse an impurity table from a file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse an impurity table from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ParseError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut impurities = Vec::new();

        for record in csv_reader.records() {
            let record = record?;
            let row = record.position().map(|p| p.line() as usize).unwrap_or(0);

            // Repeated spaces yield empty cells
            let cells: Vec<String> = record
                .iter()
                .map(|cell| cell.replace('<', ""))
                .map(|cell| cell.trim().to_string())
                .filter(|cell| !cell.is_empty())
                .collect();

            if cells.is_empty() {
                continue;
            }
            if cells.len() < 3 {
                return Err(ParseError::MalformedRow {
                    row,
                    expected: 3,
                    found: cells.len(),
                });
            }

            let value: f64 = cells[1].parse().map_err(|_| ParseError::InvalidNumber {
                row,
                column: "value".to_string(),
                value: cells[1].clone(),
            })?;
            let unit: ImpurityUnit = cells[2].parse()?;

            impurities.push(Impurity {
                element: cells[0].clone(),
                value,
                unit,
            });
        }

        log::debug!("Parsed {} impurity rows", impurities.len());
        Ok(Self { impurities })
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.impurities.len()
    }

    /// True when the table has no rows
    pub fn is_empty(&self) -> bool {
        self.impurities.is_empty()
    }

    /// One component per row, in file order
    pub fn to_components(&self) -> Vec<Component> {
        self.impurities.iter().map(Impurity::to_component).collect()
    }

    /// Sum of all impurity mass fractions
    pub fn total_mass_fraction(&self) -> f64 {
        self.impurities.iter().map(Impurity::mass_fraction).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Fe 12 ppm\nNi <0.5 ppm\nO 0.02 wt%\nPb 80 ppb\n";

    fn parse(text: &str) -> Result<ImpurityTable, ParseError> {
        ImpurityTable::from_reader(std::io::Cursor::new(text))
    }

    #[test]
    fn test_parse_mixed_units() {
        let table = parse(SAMPLE).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.impurities[1].element, "Ni");
        assert_eq!(table.impurities[1].value, 0.5);
        assert_eq!(table.impurities[2].unit, ImpurityUnit::WeightPercent);
    }

    #[test]
    fn test_mass_fractions() {
        let components = parse(SAMPLE).unwrap().to_components();
        assert_eq!(components[0].name, "Fe impurity");
        assert!((components[0].mass_fraction - 12e-6).abs() < 1e-18);
        assert!((components[2].mass_fraction - 2e-4).abs() < 1e-15);
        assert!((components[3].mass_fraction - 80e-9).abs() < 1e-20);
    }

    #[test]
    fn test_repeated_spaces_and_blank_lines() {
        let table = parse("Fe   12  ppm\n\nCu 3 ppm\n").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.impurities[0].value, 12.0);
    }

    #[test]
    fn test_unknown_unit() {
        let err = parse("Fe 12 mg/kg\n").unwrap_err();
        assert!(matches!(err, ParseError::UnknownImpurityUnit(ref u) if u == "mg/kg"));
    }

    #[test]
    fn test_units_are_case_sensitive() {
        assert!(parse("Fe 12 PPM\n").is_err());
    }

    #[test]
    fn test_invalid_value() {
        let err = parse("Fe twelve ppm\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { row: 1, .. }));
    }

    #[test]
    fn test_short_row() {
        let err = parse("Fe 12 ppm\nCu 3\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedRow {
                row: 2,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_empty_file() {
        let table = parse("").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.total_mass_fraction(), 0.0);
    }
}
