//! EDX atomic-percent exports.
//!
//! The EDX software exports one row per spectrum as comma separated values. The
//! header line is discarded and columns are taken positionally:
//!
//! | # | Column |
//! |---|--------|
//! | 0 | Spectrum Label |
//! | 1 | X (mm) |
//! | 2 | Y (mm) |
//! | 3 | Substrate Si Atomic % |
//! | 4 | Layer 1 Density (g/cm³) |
//! | 5 | Layer 1 Thickness (nm) |
//! | 6 | Layer 1 P Atomic % |
//! | 7 | Layer 1 S Atomic % |
//! | 8 | Layer 1 Cu Atomic % |
//!
//! Empty cells, and cells missing from the end of a short row, are missing
//! values and are left out of the averages.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ParseError;

/// Column names, in file order
pub const EDX_COLUMNS: [&str; 9] = [
    "Spectrum Label",
    "X (mm)",
    "Y (mm)",
    "Substrate Si Atomic %",
    "Layer 1 Density (g/cm³)",
    "Layer 1 Thickness (nm)",
    "Layer 1 P Atomic %",
    "Layer 1 S Atomic %",
    "Layer 1 Cu Atomic %",
];

/// One EDX spectrum (row)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdxSpectrum {
    /// Spectrum label
    pub label: String,
    /// Stage X position in mm
    pub x_mm: Option<f64>,
    /// Stage Y position in mm
    pub y_mm: Option<f64>,
    /// Substrate Si atomic percent
    pub substrate_si: Option<f64>,
    /// Layer density in g/cm³
    pub layer_density: Option<f64>,
    /// Layer thickness in nm
    pub layer_thickness_nm: Option<f64>,
    /// Layer P atomic percent
    pub p_atomic_percent: Option<f64>,
    /// Layer S atomic percent
    pub s_atomic_percent: Option<f64>,
    /// Layer Cu atomic percent
    pub cu_atomic_percent: Option<f64>,
}

/// Mean atomic percentages over all spectra
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EdxAverages {
    /// Mean S atomic percent
    pub s: Option<f64>,
    /// Mean P atomic percent
    pub p: Option<f64>,
    /// Mean metal (Cu) atomic percent
    pub m1: Option<f64>,
}

/// A parsed EDX export
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdxTable {
    /// Spectra in file order
    pub spectra: Vec<EdxSpectrum>,
}

fn parse_cell(value: &str, row: usize, column: usize) -> Result<Option<f64>, ParseError> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| ParseError::InvalidNumber {
            row,
            column: EDX_COLUMNS[column].to_string(),
            value: value.to_string(),
        })
}

fn mean<I: Iterator<Item = Option<f64>>>(values: I) -> Option<f64> {
    let (sum, n) = values
        .flatten()
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        None
    } else {
        Some(sum / n as f64)
    }
}

impl EdxTable {
    /// Parse an EDX export from a file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse an EDX export from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ParseError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut spectra = Vec::new();

        // Exports are not always UTF-8 (the density header carries a superscript)
        for record in csv_reader.byte_records() {
            let record = record?;
            let row = record.position().map(|p| p.line() as usize).unwrap_or(0);
            let cells: Vec<String> = record
                .iter()
                .map(|cell| String::from_utf8_lossy(cell).into_owned())
                .collect();

            if cells.iter().all(|c| c.trim().is_empty()) {
                continue;
            }
            // Short rows are padded with missing values; extra cells must be empty
            if cells[EDX_COLUMNS.len().min(cells.len())..]
                .iter()
                .any(|c| !c.trim().is_empty())
            {
                return Err(ParseError::MalformedRow {
                    row,
                    expected: EDX_COLUMNS.len(),
                    found: cells.len(),
                });
            }
            let value = |column: usize| {
                cells
                    .get(column)
                    .map_or(Ok(None), |cell| parse_cell(cell, row, column))
            };

            spectra.push(EdxSpectrum {
                label: cells[0].trim().to_string(),
                x_mm: value(1)?,
                y_mm: value(2)?,
                substrate_si: value(3)?,
                layer_density: value(4)?,
                layer_thickness_nm: value(5)?,
                p_atomic_percent: value(6)?,
                s_atomic_percent: value(7)?,
                cu_atomic_percent: value(8)?,
            });
        }

        log::debug!("Parsed {} EDX spectra", spectra.len());
        Ok(Self { spectra })
    }

    /// Number of spectra
    pub fn len(&self) -> usize {
        self.spectra.len()
    }

    /// True when no spectra were read
    pub fn is_empty(&self) -> bool {
        self.spectra.is_empty()
    }

    /// Column means of the S, P and Cu atomic percentages
    pub fn averages(&self) -> EdxAverages {
        EdxAverages {
            s: mean(self.spectra.iter().map(|s| s.s_atomic_percent)),
            p: mean(self.spectra.iter().map(|s| s.p_atomic_percent)),
            m1: mean(self.spectra.iter().map(|s| s.cu_atomic_percent)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Spectrum Label,X (mm),Y (mm),Substrate Si Atomic %,Layer 1 Density (g/cm³),Layer 1 Thickness (nm),Layer 1 P Atomic %,Layer 1 S Atomic %,Layer 1 Cu Atomic %
Spectrum 1,-10.0,-10.0,12.1,4.5,210,10.0,40.0,50.0
Spectrum 2,0.0,0.0,11.8,4.6,215,12.0,44.0,44.0
Spectrum 3,10.0,10.0,12.5,4.4,205,14.0,42.0,44.0
";

    fn parse(text: &str) -> Result<EdxTable, ParseError> {
        EdxTable::from_reader(std::io::Cursor::new(text))
    }

    #[test]
    fn test_parse_rows() {
        let table = parse(SAMPLE).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.spectra[0].label, "Spectrum 1");
        assert_eq!(table.spectra[2].x_mm, Some(10.0));
        assert_eq!(table.spectra[1].layer_thickness_nm, Some(215.0));
    }

    #[test]
    fn test_averages() {
        let avg = parse(SAMPLE).unwrap().averages();
        assert!((avg.s.unwrap() - 42.0).abs() < 1e-12);
        assert!((avg.p.unwrap() - 12.0).abs() < 1e-12);
        assert!((avg.m1.unwrap() - 46.0).abs() < 1e-12);
    }

    #[test]
    fn test_header_names_are_ignored() {
        let text = "a,b,c,d,e,f,g,h,i\nS1,0,0,0,0,0,1,2,3\n";
        let avg = parse(text).unwrap().averages();
        assert_eq!(avg.p, Some(1.0));
        assert_eq!(avg.s, Some(2.0));
        assert_eq!(avg.m1, Some(3.0));
    }

    #[test]
    fn test_missing_cells_are_skipped() {
        let text = "h1,h2,h3,h4,h5,h6,h7,h8,h9\nS1,0,0,0,0,0,10,,30\nS2,0,0,0,0,0,20,,50\n";
        let avg = parse(text).unwrap().averages();
        assert_eq!(avg.p, Some(15.0));
        assert_eq!(avg.s, None);
        assert_eq!(avg.m1, Some(40.0));
    }

    #[test]
    fn test_trailing_blank_rows() {
        let text = format!("{},,,,,,,,\n", SAMPLE);
        assert_eq!(parse(&text).unwrap().len(), 3);
    }

    #[test]
    fn test_non_numeric_cell() {
        let text = "h1,h2,h3,h4,h5,h6,h7,h8,h9\nS1,0,0,0,0,0,ten,2,3\n";
        match parse(text).unwrap_err() {
            ParseError::InvalidNumber { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "Layer 1 P Atomic %");
                assert_eq!(value, "ten");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_short_rows_are_padded() {
        let text = "h1,h2,h3,h4,h5,h6,h7,h8,h9\nS1,0,0,0,0,0,10,20,30\nS2,0,0,0,0,0,20,40\n";
        let table = parse(text).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.spectra[1].cu_atomic_percent, None);

        let avg = table.averages();
        assert_eq!(avg.p, Some(15.0));
        assert_eq!(avg.s, Some(30.0));
        assert_eq!(avg.m1, Some(30.0));
    }

    #[test]
    fn test_label_only_row() {
        let table = parse("h1,h2,h3,h4,h5,h6,h7,h8,h9\nS1\n").unwrap();
        assert_eq!(table.spectra[0].label, "S1");
        assert_eq!(table.averages(), EdxAverages::default());
    }

    #[test]
    fn test_extra_cells() {
        let text = "h1,h2,h3,h4,h5,h6,h7,h8,h9\nS1,0,0,0,0,0,1,2,3,\nS2,0,0,0,0,0,1,2,3,4\n";
        assert!(matches!(
            parse(text).unwrap_err(),
            ParseError::MalformedRow { row: 3, expected: 9, found: 10 }
        ));
    }

    #[test]
    fn test_header_only() {
        let table = parse("h1,h2,h3,h4,h5,h6,h7,h8,h9\n").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.averages(), EdxAverages::default());
    }
}
