//! Error types for the truth table pipelines.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TableError>;

#[derive(Error, Debug)]
pub enum TableError {
    /// A canonical field is absent from the source header. The source
    /// format does not match and the run cannot continue.
    #[error("Source header has no column for canonical field '{name}'")]
    MissingColumn { name: String },

    #[error("Source file {} has no header line", path.display())]
    EmptyInput { path: PathBuf },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl TableError {
    /// Process exit code for this error when it ends a run.
    pub fn exit_code(&self) -> i32 {
        match self {
            TableError::MissingColumn { .. } => 3,
            TableError::EmptyInput { .. } => 4,
            TableError::Config(_) => 5,
            TableError::Io(_) => 6,
            TableError::Csv(_) => 7,
        }
    }
}

impl From<toml::de::Error> for TableError {
    fn from(e: toml::de::Error) -> Self {
        TableError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_message_names_field() {
        let err = TableError::MissingColumn {
            name: "Cout".to_string(),
        };
        assert!(err.to_string().contains("'Cout'"));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_toml_error_becomes_config() {
        let bad: std::result::Result<toml::Value, _> = toml::from_str("marker = ");
        let err: TableError = bad.unwrap_err().into();
        assert!(matches!(err, TableError::Config(_)));
    }
}
