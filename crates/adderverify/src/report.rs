//! Console rendering of a verification report.

use crate::verify::{Finding, VerificationReport};
use owo_colors::OwoColorize;

pub const SEPARATOR: &str = "---";

/// Headline of the report.
pub fn summary_line(report: &VerificationReport) -> String {
    if report.is_success() {
        format!("All {} rows verified successfully!", report.rows_checked)
    } else {
        format!(
            "Found {} problems in {} rows:",
            report.problem_count(),
            report.rows_checked
        )
    }
}

/// Three lines per finding: what was checked, what went wrong, separator.
pub fn finding_lines(finding: &Finding) -> [String; 3] {
    match finding {
        Finding::Discrepancy(d) => [
            format!("Inputs: {:?}", d.inputs),
            format!("Expected: {:?} | Actual: {:?}", d.expected, d.actual),
            SEPARATOR.to_string(),
        ],
        Finding::Error(e) => {
            let fields: Vec<String> = e
                .fields
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect();
            [
                format!("Row {}: [{}]", e.row, fields.join(", ")),
                format!("Error: {}", e.error),
                SEPARATOR.to_string(),
            ]
        }
    }
}

/// Plain-text report, one entry per output line.
pub fn render_lines(report: &VerificationReport) -> Vec<String> {
    let mut lines = vec![summary_line(report)];
    for finding in &report.findings {
        lines.extend(finding_lines(finding));
    }
    lines
}

/// Print the report to stdout with a colored headline.
pub fn print_report(report: &VerificationReport) {
    let headline = summary_line(report);
    if report.is_success() {
        println!("{}", headline.bright_green());
    } else {
        println!("{}", headline.bright_red());
    }
    for finding in &report.findings {
        for line in finding_lines(finding) {
            if line == SEPARATOR {
                println!("{}", line.dimmed());
            } else {
                println!("{}", line);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::{Discrepancy, RowError};

    #[test]
    fn test_success_is_single_line() {
        let report = VerificationReport {
            rows_checked: 512,
            findings: vec![],
        };
        assert_eq!(
            render_lines(&report),
            vec!["All 512 rows verified successfully!".to_string()]
        );
    }

    #[test]
    fn test_each_finding_renders_three_lines() {
        let report = VerificationReport {
            rows_checked: 2,
            findings: vec![
                Finding::Discrepancy(Discrepancy {
                    row: 1,
                    inputs: vec!["0".to_string(); 9],
                    expected: [0, 0, 0, 0, 0],
                    actual: [0, 0, 0, 0, 1],
                }),
                Finding::Error(RowError {
                    row: 2,
                    fields: vec![("A0".to_string(), "?".to_string())],
                    error: "invalid bit '?' in field 'A0'".to_string(),
                }),
            ],
        };
        let lines = render_lines(&report);
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Found 2 problems in 2 rows:");
        assert_eq!(
            lines[1],
            r#"Inputs: ["0", "0", "0", "0", "0", "0", "0", "0", "0"]"#
        );
        assert_eq!(lines[2], "Expected: [0, 0, 0, 0, 0] | Actual: [0, 0, 0, 0, 1]");
        assert_eq!(lines[3], SEPARATOR);
        assert_eq!(lines[4], "Row 2: [A0=?]");
        assert_eq!(lines[5], "Error: invalid bit '?' in field 'A0'");
        assert_eq!(lines[6], SEPARATOR);
    }
}
