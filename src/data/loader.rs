use std::path::Path;

use crate::error::{FilterError, Result};

use super::model::{Dataset, FeatureVector, Label, SourceLine};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a LIBSVM-style file and vectorize both classes.
///
/// Expected line layout:
///
/// ```text
/// <label> <idx1>:<val1> <idx2>:<val2> ...
/// ```
///
/// Lines starting with `-1` are negative, everything else is positive.
/// Pair alignment is not checked here; see [`super::filter::filter_pairs`].
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let lines = load_lines(path)?;
    let (positive_lines, negative_lines) = split_lines(lines);

    let positive = vectorize(&positive_lines)?;
    let negative = vectorize(&negative_lines)?;

    log::info!(
        "Loaded {} positive and {} negative records from {}",
        positive.len(),
        negative.len(),
        path.display()
    );
    if positive.is_empty() != negative.is_empty() {
        log::warn!("One class is empty; pairing will fail unless both are empty");
    }

    Ok(Dataset::new(positive, negative))
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

/// Read every line of `path`, dropping lines that are blank after trimming.
/// Kept lines are returned untrimmed with their 1-based line number.
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn load_lines(path: &Path) -> Result<Vec<SourceLine>> {
    let text = std::fs::read_to_string(path)?;
    Ok(non_blank_lines(&text))
}

fn non_blank_lines(text: &str) -> Vec<SourceLine> {
    text.replace("\r\n", "\n")
        .split(['\n', '\r'])
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| SourceLine::new(i + 1, line))
        .collect()
}

// ---------------------------------------------------------------------------
// Splitter
// ---------------------------------------------------------------------------

/// Partition lines into `(positive, negative)`, keeping relative order.
pub fn split_lines(lines: Vec<SourceLine>) -> (Vec<SourceLine>, Vec<SourceLine>) {
    lines
        .into_iter()
        .partition(|line| line.label() == Label::Positive)
}

// ---------------------------------------------------------------------------
// Vectorizer
// ---------------------------------------------------------------------------

/// Convert each line of one class into a dense vector, one per line.
pub fn vectorize(lines: &[SourceLine]) -> Result<Vec<FeatureVector>> {
    lines.iter().map(parse_record).collect()
}

/// Parse a single record. The label token is discarded, and so is the index
/// half of every `index:value` token.
pub fn parse_record(line: &SourceLine) -> Result<FeatureVector> {
    line.text
        .split_whitespace()
        .skip(1)
        .map(|tok| parse_feature(tok, line.number))
        .collect::<Result<Vec<f64>>>()
        .map(FeatureVector::new)
}

fn parse_feature(tok: &str, line: usize) -> Result<f64> {
    let format_error = |reason: String| FilterError::Format {
        line,
        token: tok.to_string(),
        reason,
    };

    let (_, value) = tok
        .split_once(':')
        .ok_or_else(|| format_error("missing ':' separator".to_string()))?;

    let parsed = value
        .parse::<f64>()
        .map_err(|e| format_error(format!("'{value}' is not a number ({e})")))?;

    if !parsed.is_finite() {
        return Err(format_error(format!("'{value}' is not a finite number")));
    }
    Ok(parsed)
}
