//! Adder Normalizer - turns a raw tab-delimited adder dump into a complete,
//! canonically ordered truth table.
//!
//! Stages, in order:
//!
//! 1. `header`: map source columns onto the canonical schema
//! 2. `normalize`: clean and permute each data line, skip malformed ones
//! 3. `dedup`: keep the first row seen for each input key
//! 4. `completion`: synthesize placeholder rows for missing keys
//! 5. `arithmetic`: recompute every output from the inputs
//! 6. `sort`: order rows by numeric input key
//! 7. `writer`: emit the canonical CSV

pub mod arithmetic;
pub mod completion;
pub mod dedup;
pub mod header;
pub mod normalize;
pub mod pipeline;
pub mod sort;
pub mod tokens;
pub mod writer;

pub use header::HeaderMap;
pub use pipeline::{normalize_text, run, NormalizeSummary, NormalizedTable};
pub use tokens::Tokenizer;
