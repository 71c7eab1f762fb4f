//! Side outputs describing a filter run: per-pair scores and a summary.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::data::filter::{FilterOutcome, ZeroPolicy};
use crate::error::Result;

/// One row of the scores CSV.
#[derive(Debug, Serialize)]
struct ScoreRow {
    pair: usize,
    score: f64,
    kept: bool,
}

/// Aggregate counts for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterSummary {
    pub tau: f64,
    pub pairs: usize,
    pub kept: usize,
    pub dropped: usize,
    pub zero_policy: ZeroPolicy,
}

impl FilterSummary {
    pub fn new(outcome: &FilterOutcome, tau: f64, zero_policy: ZeroPolicy) -> Self {
        FilterSummary {
            tau,
            pairs: outcome.pairs(),
            kept: outcome.kept(),
            dropped: outcome.dropped(),
            zero_policy,
        }
    }
}

/// Write `pair,score,kept` rows, one per pair in input order.
pub fn write_scores_csv<W: Write>(out: W, outcome: &FilterOutcome) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for s in &outcome.scores {
        writer.serialize(ScoreRow {
            pair: s.pair,
            score: s.score,
            kept: s.kept,
        })?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_scores(path: &Path, outcome: &FilterOutcome) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_scores_csv(file, outcome)?;
    log::info!("Wrote {} pair scores to {}", outcome.pairs(), path.display());
    Ok(())
}

pub fn save_summary(path: &Path, summary: &FilterSummary) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let mut out = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, summary)?;
    writeln!(out)?;
    out.flush()?;
    log::info!("Wrote run summary to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::filter_pairs;
    use crate::data::model::{Dataset, FeatureVector};

    fn outcome() -> FilterOutcome {
        let ds = Dataset::new(
            vec![FeatureVector::from(vec![1.0]), FeatureVector::from(vec![0.0])],
            vec![FeatureVector::from(vec![1.5]), FeatureVector::from(vec![0.0])],
        );
        filter_pairs(&ds, 1.0, ZeroPolicy::Infinite).unwrap()
    }

    #[test]
    fn scores_csv_has_header_and_rows() {
        let mut buf = Vec::new();
        write_scores_csv(&mut buf, &outcome()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "pair,score,kept");
        assert_eq!(lines[1], "0,0.5,true");
        assert_eq!(lines[2], "1,inf,false");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn summary_serializes_policy_lowercase() {
        let summary = FilterSummary::new(&outcome(), 1.0, ZeroPolicy::Infinite);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["pairs"], 2);
        assert_eq!(json["kept"], 1);
        assert_eq!(json["dropped"], 1);
        assert_eq!(json["zero_policy"], "infinite");
    }
}
