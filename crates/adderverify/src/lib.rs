//! Adder Verifier - re-derives every output of a canonical truth table
//! from its inputs and reports rows that disagree.
//!
//! Uses its own adder model (`arithmetic`) rather than the normalizer's, so
//! a bug in one cannot hide behind the other.

pub mod arithmetic;
pub mod reader;
pub mod report;
pub mod verify;

pub use reader::{read_table, read_table_file, RecordedRow};
pub use verify::{verify_file, verify_rows, Discrepancy, FieldError, Finding, RowError, VerificationReport};
