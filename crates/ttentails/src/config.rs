//! Entailment check configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for a truth-table entailment check.
///
/// Neither switch changes a verdict; both only affect how many models are
/// enumerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Seed models with the literals stated directly in a top-level `and`
    /// of the knowledge base instead of enumerating those symbols
    pub literal_forcing: bool,
    /// Skip the `false` branch of a symbol once its `true` branch fails
    pub short_circuit: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            literal_forcing: true,
            short_circuit: true,
        }
    }
}

impl CheckConfig {
    /// Every symbol enumerated over both values
    pub fn exhaustive() -> Self {
        CheckConfig {
            literal_forcing: false,
            short_circuit: false,
        }
    }

    /// Load from a JSON file; missing fields keep their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
