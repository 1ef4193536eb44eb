use crate::parsers::ParseError;

/// Errors that abort normalization of an entry
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    /// A raw file referenced by the entry could not be opened
    #[error("Failed to open raw file '{name}': {source}")]
    RawFile {
        /// Raw file name as referenced by the entry
        name: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A raw file or file name could not be parsed
    #[error("Failed to parse '{file}': {source}")]
    Parse {
        /// File being parsed
        file: String,
        /// Underlying parse error
        #[source]
        source: ParseError,
    },

    /// I/O error reading or writing an archive
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Archive JSON could not be (de)serialized
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl NormalizeError {
    pub(crate) fn parse(file: &str, source: ParseError) -> Self {
        NormalizeError::Parse {
            file: file.to_string(),
            source,
        }
    }
}
