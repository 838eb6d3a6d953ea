//! Configuration for the truth table tools.
//!
//! Every setting has a default, so running without a config file reads
//! `full_adder4.tim` and writes `output_truth_table_fixed.csv` in the
//! current directory. A TOML file may override any subset:
//!
//! ```toml
//! input_path = "dumps/full_adder4.tim"
//! output_path = "out/table.csv"
//! marker = "$O"
//! metadata_columns = 2
//! ```

use crate::error::{Result, TableError};
use crate::schema::{DEFAULT_MARKER, DEFAULT_METADATA_COLUMNS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Source dump read by the normalizer
pub const DEFAULT_INPUT_FILE: &str = "full_adder4.tim";

/// Canonical table written by the normalizer and read by the verifier
pub const DEFAULT_OUTPUT_FILE: &str = "output_truth_table_fixed.csv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdderConfig {
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Literal stripped from every source token
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Leading source columns dropped before field mapping
    #[serde(default = "default_metadata_columns")]
    pub metadata_columns: usize,
}

fn default_input_path() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_FILE)
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_metadata_columns() -> usize {
    DEFAULT_METADATA_COLUMNS
}

impl Default for AdderConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            marker: default_marker(),
            metadata_columns: default_metadata_columns(),
        }
    }
}

impl AdderConfig {
    /// Parse a TOML document. Missing keys fall back to defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: AdderConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, or return defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let text = fs::read_to_string(path)?;
                Self::from_toml_str(&text)
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(mut self, input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        if let Some(input) = input {
            self.input_path = input;
        }
        if let Some(output) = output {
            self.output_path = output;
        }
        self
    }

    fn validate(&self) -> Result<()> {
        if self.marker.contains('\t') {
            return Err(TableError::Config(
                "marker must not contain the tab delimiter".to_string(),
            ));
        }
        Ok(())
    }
}
