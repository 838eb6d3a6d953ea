//! Adder Common - Shared data model for the 4-bit adder truth table tools.
//!
//! Holds the canonical schema, row and key types, error taxonomy, configuration
//! and logging setup. Deliberately carries no arithmetic: the normalizer and
//! the verifier each compute adder outputs on their own.

pub mod config;
pub mod error;
pub mod key;
pub mod logging;
pub mod row;
pub mod schema;

pub use config::AdderConfig;
pub use error::{Result, TableError};
pub use key::InputKey;
pub use row::Row;
pub use schema::*;
