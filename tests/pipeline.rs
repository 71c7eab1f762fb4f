//! End-to-end tests of the load → filter → write pipeline.

use std::io::Write;

use tau_filter::report::{save_scores, save_summary, FilterSummary};
use tau_filter::{filter_pairs, load_dataset, write_dataset, FilterError, ZeroPolicy};
use tempfile::NamedTempFile;

fn input_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn run(lines: &[&str], tau: f64) -> Result<String, FilterError> {
    let file = input_file(lines);
    let dataset = load_dataset(file.path())?;
    let outcome = filter_pairs(&dataset, tau, ZeroPolicy::Infinite)?;
    let mut buf = Vec::new();
    write_dataset(&mut buf, &outcome.dataset)?;
    Ok(String::from_utf8(buf).unwrap())
}

#[test]
fn pair_within_tau_is_kept() {
    let out = run(&["+1 1:1.0 2:2.0", "-1 1:1.1 2:2.0"], 0.2).unwrap();
    assert_eq!(out, "-1 1:1.1 2:2.0\n+1 1:1.0 2:2.0\n");
}

#[test]
fn pair_beyond_tau_is_dropped() {
    let out = run(&["+1 1:1.0 2:2.0", "-1 1:1.1 2:2.0"], 0.05).unwrap();
    assert!(out.is_empty());
}

#[test]
fn unbalanced_classes_fail() {
    let err = run(&["+1 1:1.0", "+1 1:2.0", "-1 1:1.0"], 0.5).unwrap_err();
    assert!(matches!(err, FilterError::LengthMismatch { .. }));
}

#[test]
fn token_without_colon_fails() {
    let err = run(&["+1 1:1.0 abc", "-1 1:1.0 2:1.0"], 0.5).unwrap_err();
    assert!(matches!(err, FilterError::Format { line: 1, .. }));
}

#[test]
fn interleaved_classes_pair_by_position() {
    let out = run(
        &[
            "-1 1:10.0",
            "+1 1:1.0",
            "",
            "+1 1:10.0",
            "-1 1:1.05",
            "-1 1:3.0",
            "+1 1:3.0",
        ],
        0.2,
    )
    .unwrap();
    // pairs: (1.0, 10.0) dropped, (10.0, 1.05) dropped, (3.0, 3.0) kept
    assert_eq!(out, "-1 1:3.0\n+1 1:3.0\n");
}

#[test]
fn zero_positive_component_drops_pair() {
    let out = run(&["+1 1:0.0 2:1.0", "-1 1:0.0 2:1.0"], 100.0).unwrap();
    assert!(out.is_empty());
}

#[test]
fn side_outputs_describe_the_run() {
    let file = input_file(&["+1 1:1.0", "+1 1:2.0", "-1 1:1.0", "-1 1:4.0"]);
    let dataset = load_dataset(file.path()).unwrap();
    let outcome = filter_pairs(&dataset, 0.5, ZeroPolicy::Infinite).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let scores_path = dir.path().join("scores.csv");
    let summary_path = dir.path().join("summary.json");
    save_scores(&scores_path, &outcome).unwrap();
    save_summary(
        &summary_path,
        &FilterSummary::new(&outcome, 0.5, ZeroPolicy::Infinite),
    )
    .unwrap();

    let scores = std::fs::read_to_string(&scores_path).unwrap();
    assert_eq!(scores, "pair,score,kept\n0,0.0,true\n1,1.0,false\n");

    let summary: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&summary_path).unwrap()).unwrap();
    assert_eq!(summary["kept"], 1);
    assert_eq!(summary["dropped"], 1);
    assert_eq!(summary["tau"], 0.5);
}
