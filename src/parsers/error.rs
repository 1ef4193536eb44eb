/// Errors that can occur while parsing lab exports
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// I/O error reading the export
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    /// No element symbols could be extracted, or all counts are zero
    #[error("No elements found in chemical formula '{0}'")]
    EmptyFormula(String),

    /// Element count too large to represent
    #[error("Invalid element count '{count}' in chemical formula '{formula}'")]
    InvalidCount {
        /// Formula being parsed
        formula: String,
        /// Digits following the element symbol
        count: String,
    },

    /// File name does not follow the `<..>_<..>_<formula>_<supplier>_<id>` convention
    #[error("Invalid target file name '{name}': {reason}")]
    FileName {
        /// Offending file name
        name: String,
        /// What is missing
        reason: String,
    },

    /// Impurity unit other than ppm, wt% or ppb
    #[error("The impurity unit is not recognized: '{0}'")]
    UnknownImpurityUnit(String),

    /// A row did not have the expected number of cells
    #[error("Malformed row {row}: expected {expected} fields, found {found}")]
    MalformedRow {
        /// 1-based line number
        row: usize,
        /// Expected number of fields
        expected: usize,
        /// Fields actually present
        found: usize,
    },

    /// A numeric cell could not be parsed
    #[error("Invalid number '{value}' in row {row}, column '{column}'")]
    InvalidNumber {
        /// 1-based line number
        row: usize,
        /// Column name
        column: String,
        /// Raw cell content
        value: String,
    },
}
