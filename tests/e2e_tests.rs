//! End-to-end integration tests
//!
//! These tests run the complete check pipeline over predefined record files.
//! Each fixture directory holds:
//! 1. input.ach - fixed-width records, including headers and control records
//! 2. expected.csv - the report the pipeline must produce
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - A payroll batch with valid and invalid entries
//! - Return and notification of change addenda
//! - Malformed lines, orphan addenda and unknown addenda types

#[cfg(test)]
mod tests {
    use ach_entry::check::{check_file, CheckOptions, CheckSummary};
    use ach_entry::{EntryDetail, EntryReader, FixedWidthRecord};
    use rstest::rstest;
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    /// Run a fixture through `check_file` and compare the report with expected.csv
    fn run_test_fixture(fixture_name: &str) -> CheckSummary {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.ach", fixture_dir);
        let expected_path = format!("{}/expected.csv", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );

        let mut temp_output = NamedTempFile::new().expect("Failed to create temp file");
        let summary = check_file(
            Path::new(&input_path),
            CheckOptions::default(),
            &mut temp_output,
        )
        .unwrap_or_else(|e| panic!("Failed to check records: {}", e));
        temp_output.flush().expect("Failed to flush temp file");

        let actual_output = fs::read_to_string(temp_output.path())
            .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e));
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, actual_output, expected_output
        );
        summary
    }

    #[rstest]
    #[case("ppd_batch", 5, 2, 0)]
    #[case("returns", 2, 0, 0)]
    #[case("malformed", 1, 0, 4)]
    fn test_fixtures(
        #[case] fixture: &str,
        #[case] entries: usize,
        #[case] invalid: usize,
        #[case] rejected: usize,
    ) {
        let summary = run_test_fixture(fixture);
        assert_eq!(
            summary,
            CheckSummary {
                entries,
                invalid,
                rejected
            }
        );
    }

    /// Every entry line that parses renders back to the exact same text
    #[rstest]
    #[case("ppd_batch")]
    #[case("returns")]
    fn test_entry_lines_round_trip(#[case] fixture: &str) {
        let input_path = format!("tests/fixtures/{}/input.ach", fixture);
        let content = fs::read_to_string(&input_path).expect("Failed to read fixture");

        let entry_lines: Vec<_> = content
            .lines()
            .filter(|line| EntryDetail::is_tagged(line))
            .collect();
        assert!(!entry_lines.is_empty());

        for line in entry_lines {
            let entry = EntryDetail::parse(line).expect("fixture entry should parse");
            assert_eq!(entry.render().unwrap(), line);
        }
    }

    /// Entries read with their addenda keep the addenda text unchanged
    #[test]
    fn test_reader_keeps_addenda_text() {
        let input_path = Path::new("tests/fixtures/returns/input.ach");
        let content = fs::read_to_string(input_path).expect("Failed to read fixture");
        let addenda_lines: Vec<_> = content.lines().filter(|l| l.starts_with('7')).collect();

        let entries: Vec<_> = EntryReader::open(input_path)
            .unwrap()
            .map(|r| r.unwrap().entry)
            .collect();

        // The NOC replaced the forward addenda on the second entry
        assert_eq!(entries[0].addendum()[0].render(), addenda_lines[0]);
        assert_eq!(entries[1].addendum()[0].render(), addenda_lines[2]);
    }
}
