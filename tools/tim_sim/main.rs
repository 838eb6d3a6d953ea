//! Source Dump Simulator - Deterministic adder dumps for normalizer testing
//!
//! Usage:
//!   tim_sim --scenario complete
//!   tim_sim --scenario shuffled --seed 7
//!   tim_sim --scenario duplicates --out ./artifacts/simulations
//!
//! Writes `<scenario>.tim` plus a machine-readable `<scenario>.json`
//! manifest describing what the normalizer should make of it.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// TYPES (duplicated from adder_common for standalone sim)
// ============================================================================

const CANONICAL_HEADER: [&str; 14] = [
    "A0", "A1", "A2", "A3", "B0", "B1", "B2", "B3", "M", "S0", "S1", "S2", "S3", "Cout",
];
const INPUT_SPACE: u16 = 512;
const MARKER: &str = "$O";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
enum Scenario {
    /// Every key once, canonical column order, correct outputs
    Complete,
    /// Every key once, shuffled columns and rows
    Shuffled,
    /// Roughly half the keys
    Sparse,
    /// Every key plus repeats carrying conflicting outputs
    Duplicates,
    /// Every key plus truncated lines
    Malformed,
    /// Every key with scrambled outputs
    Corrupt,
    /// Header only
    Empty,
}

/// One data line in canonical field order, before column shuffling.
type Fields = [u8; 14];

#[derive(Debug, Clone, Default, Serialize)]
struct SimulationManifest {
    scenario: String,
    seed: u64,
    data_lines: usize,
    distinct_keys: usize,
    duplicate_lines: usize,
    malformed_lines: usize,
    corrupt_lines: usize,
    expected_synthesized: usize,
    expected_rows: usize,
    source_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Line {
    fields: Fields,
    /// Written with only its first few tokens
    truncated: bool,
}

impl Line {
    fn whole(fields: Fields) -> Self {
        Self {
            fields,
            truncated: false,
        }
    }
}

struct Dump {
    /// `columns[j]` is the canonical field shown in source column j
    columns: Vec<usize>,
    lines: Vec<Line>,
}

// ============================================================================
// SIMULATOR LOGIC
// ============================================================================

/// Canonical fields for a key with correct outputs.
fn correct_row(key: u16) -> Fields {
    let mut fields = [0u8; 14];
    for (i, field) in fields.iter_mut().take(9).enumerate() {
        *field = ((key >> (8 - i)) & 1) as u8;
    }
    let a: u16 = (0..4).map(|i| u16::from(fields[i]) << i).sum();
    let b: u16 = (0..4).map(|i| u16::from(fields[4 + i]) << i).sum();
    let total = a + b + u16::from(fields[8]);
    for i in 0..5 {
        fields[9 + i] = ((total >> i) & 1) as u8;
    }
    fields
}

fn scramble_outputs(fields: &mut Fields, rng: &mut StdRng) {
    let original = *fields;
    while fields[9..] == original[9..] {
        for field in fields[9..].iter_mut() {
            *field = rng.gen_range(0..=1);
        }
    }
}

fn all_lines() -> Vec<Line> {
    (0..INPUT_SPACE).map(|key| Line::whole(correct_row(key))).collect()
}

fn simulate(scenario: Scenario, rng: &mut StdRng) -> (Dump, SimulationManifest) {
    let mut manifest = SimulationManifest::default();
    let mut columns: Vec<usize> = (0..CANONICAL_HEADER.len()).collect();

    let lines = match scenario {
        Scenario::Complete => all_lines(),
        Scenario::Shuffled => {
            let mut lines = all_lines();
            lines.shuffle(rng);
            columns.shuffle(rng);
            lines
        }
        Scenario::Sparse => {
            let mut lines: Vec<Line> = all_lines()
                .into_iter()
                .filter(|_| rng.gen_bool(0.5))
                .collect();
            lines.shuffle(rng);
            lines
        }
        Scenario::Duplicates => {
            let mut lines = all_lines();
            let repeats: Vec<Line> = lines.choose_multiple(rng, 64).copied().collect();
            for mut repeat in repeats {
                scramble_outputs(&mut repeat.fields, rng);
                lines.push(repeat);
            }
            manifest.duplicate_lines = 64;
            lines
        }
        Scenario::Malformed => {
            let mut lines = all_lines();
            for _ in 0..16 {
                lines.push(Line {
                    fields: correct_row(rng.gen_range(0..INPUT_SPACE)),
                    truncated: true,
                });
            }
            lines.shuffle(rng);
            manifest.malformed_lines = 16;
            lines
        }
        Scenario::Corrupt => {
            let mut lines = all_lines();
            for line in lines.iter_mut() {
                scramble_outputs(&mut line.fields, rng);
            }
            manifest.corrupt_lines = lines.len();
            lines
        }
        Scenario::Empty => Vec::new(),
    };

    let distinct: HashSet<&[u8]> = lines
        .iter()
        .filter(|line| !line.truncated)
        .map(|line| &line.fields[..9])
        .collect();

    manifest.data_lines = lines.len();
    manifest.distinct_keys = distinct.len();
    manifest.expected_synthesized = usize::from(INPUT_SPACE) - distinct.len();
    manifest.expected_rows = usize::from(INPUT_SPACE);

    (Dump { columns, lines }, manifest)
}

/// Render the dump as the tab-delimited source format.
fn render(dump: &Dump) -> String {
    let labels: Vec<String> = dump
        .columns
        .iter()
        .map(|&c| format!("{}{}", MARKER, CANONICAL_HEADER[c]))
        .collect();
    let mut out = format!("idx\tt\t{}\n", labels.join("\t"));

    for (i, line) in dump.lines.iter().enumerate() {
        let mut values: Vec<String> = dump
            .columns
            .iter()
            .map(|&c| line.fields[c].to_string())
            .collect();
        if line.truncated {
            values.truncate(5);
        }
        out.push_str(&format!("{}\t{}\t{}\n", i, i * 10, values.join("\t")));
    }
    out
}

// ============================================================================
// MAIN
// ============================================================================

#[derive(Parser)]
#[command(name = "tim_sim")]
#[command(about = "Generate deterministic 4-bit adder source dumps", long_about = None)]
struct Cli {
    /// Scenario to generate
    #[arg(long, value_enum, default_value = "complete")]
    scenario: Scenario,

    /// RNG seed; the same seed always yields the same dump
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Output directory
    #[arg(long, default_value = "./artifacts/simulations")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = StdRng::seed_from_u64(cli.seed);

    let (dump, mut manifest) = simulate(cli.scenario, &mut rng);
    let name = serde_json::to_value(cli.scenario)?
        .as_str()
        .unwrap_or("scenario")
        .to_string();

    fs::create_dir_all(&cli.out)
        .with_context(|| format!("Failed to create {}", cli.out.display()))?;

    let source_path = cli.out.join(format!("{}.tim", name));
    fs::write(&source_path, render(&dump))
        .with_context(|| format!("Failed to write {}", source_path.display()))?;

    manifest.scenario = name.clone();
    manifest.seed = cli.seed;
    manifest.source_path = source_path.clone();

    let manifest_path = cli.out.join(format!("{}.json", name));
    fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)
        .with_context(|| format!("Failed to write {}", manifest_path.display()))?;

    println!("\n=== Source Dump Simulation: {} ===\n", name);
    println!("Seed:                 {}", manifest.seed);
    println!("Data lines:           {}", manifest.data_lines);
    println!("Distinct keys:        {}", manifest.distinct_keys);
    println!("Duplicate lines:      {}", manifest.duplicate_lines);
    println!("Malformed lines:      {}", manifest.malformed_lines);
    println!("Corrupt lines:        {}", manifest.corrupt_lines);
    println!("Expected synthesized: {}", manifest.expected_synthesized);
    println!("\nSource saved to:   {}", source_path.display());
    println!("Manifest saved to: {}\n", manifest_path.display());

    Ok(())
}
