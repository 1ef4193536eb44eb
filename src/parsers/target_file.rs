//! Target identification from the impurity file name.
//!
//! Impurity files are produced by a separate script and named
//! `<prefix>_<prefix>_<formula>_<supplier>_<number>_....txt`, e.g.
//! `DTU_target_Cu2S_T_001_impurities.txt`. The third, fourth and fifth
//! underscore-separated tokens identify the target.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ParseError;

/// Supplier code to supplier name mapping used when none is configured
pub fn default_suppliers() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("T".to_string(), "Testbourne".to_string()),
        ("L".to_string(), "Lesker".to_string()),
    ])
}

/// Identification tokens of a target impurity file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetFileName {
    /// Chemical formula token
    pub formula: String,
    /// Supplier code token (`T`, `L`, ...)
    pub supplier_code: String,
    /// Running number / batch token
    pub number: String,
}

impl TargetFileName {
    /// Parse the basename of `path`
    pub fn parse(path: &str) -> Result<Self, ParseError> {
        let name = Path::new(path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string());

        let tokens: Vec<&str> = name.split('_').collect();
        let found = tokens.len();
        if found < 5 {
            return Err(ParseError::FileName {
                name: name.clone(),
                reason: format!("expected at least 5 '_'-separated tokens, found {}", found),
            });
        }

        Ok(Self {
            formula: tokens[2].to_string(),
            supplier_code: tokens[3].to_string(),
            number: tokens[4].to_string(),
        })
    }

    /// Lab id: formula, supplier code and number separated by spaces
    pub fn lab_id(&self) -> String {
        format!("{} {} {}", self.formula, self.supplier_code, self.number)
    }

    /// Supplier name for the code, if the code is known
    pub fn supplier<'a>(&self, suppliers: &'a BTreeMap<String, String>) -> Option<&'a str> {
        suppliers.get(&self.supplier_code).map(String::as_str)
    }
}
