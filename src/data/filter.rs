use serde::Serialize;

use crate::error::{FilterError, Result};

use super::model::{Dataset, FeatureVector};

// ---------------------------------------------------------------------------
// Zero-denominator policy
// ---------------------------------------------------------------------------

/// What to do when a positive component is exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroPolicy {
    /// That dimension scores `+inf`, so the pair is always dropped.
    #[default]
    Infinite,
    /// Abort with [`FilterError::DegenerateVector`].
    Error,
}

// ---------------------------------------------------------------------------
// Per-pair scoring
// ---------------------------------------------------------------------------

/// Score and verdict for one positional pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairScore {
    /// 0-based position in the unfiltered sequences.
    pub pair: usize,
    pub score: f64,
    pub kept: bool,
}

/// Maximum relative difference `|p[d] - n[d]| / |p[d]|` over all dimensions.
///
/// The denominator is always the positive component. A zero-dimension pair
/// scores `0.0`.
pub fn relative_difference(
    pair: usize,
    positive: &FeatureVector,
    negative: &FeatureVector,
    zero_policy: ZeroPolicy,
) -> Result<f64> {
    if positive.len() != negative.len() {
        return Err(FilterError::DimensionMismatch {
            pair,
            positive: positive.len(),
            negative: negative.len(),
        });
    }

    positive
        .values
        .iter()
        .zip(&negative.values)
        .enumerate()
        .try_fold(0.0_f64, |max, (dimension, (&p, &n))| {
            let diff = if p == 0.0 {
                match zero_policy {
                    ZeroPolicy::Infinite => f64::INFINITY,
                    ZeroPolicy::Error => {
                        return Err(FilterError::DegenerateVector { pair, dimension })
                    }
                }
            } else {
                (p - n).abs() / p.abs()
            };
            Ok(max.max(diff))
        })
}

/// A pair fails when its score reaches the threshold (inclusive).
pub fn fails_criteria(score: f64, tau: f64) -> bool {
    score >= tau
}

// ---------------------------------------------------------------------------
// Pair filter
// ---------------------------------------------------------------------------

/// Surviving vectors plus the score of every pair, in input order.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub dataset: Dataset,
    pub scores: Vec<PairScore>,
}

impl FilterOutcome {
    /// Number of pairs examined.
    pub fn pairs(&self) -> usize {
        self.scores.len()
    }

    /// Number of pairs kept.
    pub fn kept(&self) -> usize {
        self.dataset.positive.len()
    }

    /// Number of pairs dropped.
    pub fn dropped(&self) -> usize {
        self.pairs() - self.kept()
    }
}

/// Drop every pair whose score is `>= tau`, keeping survivors in order.
///
/// Pairing is positional: `positive[i]` goes with `negative[i]`. Both
/// classes must have the same length, and each pair the same dimension.
/// Inputs are left untouched; new sequences are built from the survivors.
pub fn filter_pairs(dataset: &Dataset, tau: f64, zero_policy: ZeroPolicy) -> Result<FilterOutcome> {
    let pairs = dataset
        .pair_count()
        .ok_or(FilterError::LengthMismatch {
            positive: dataset.positive.len(),
            negative: dataset.negative.len(),
        })?;

    let mut positive = Vec::with_capacity(pairs);
    let mut negative = Vec::with_capacity(pairs);
    let mut scores = Vec::with_capacity(pairs);

    for (i, (p, n)) in dataset.positive.iter().zip(&dataset.negative).enumerate() {
        let score = relative_difference(i, p, n, zero_policy)?;
        let kept = !fails_criteria(score, tau);
        if kept {
            positive.push(p.clone());
            negative.push(n.clone());
        } else {
            log::debug!("Dropping pair {i}: score {score} >= tau {tau}");
        }
        scores.push(PairScore {
            pair: i,
            score,
            kept,
        });
    }

    let outcome = FilterOutcome {
        dataset: Dataset::new(positive, negative),
        scores,
    };
    log::info!(
        "Kept {} of {} pairs at tau {tau} ({} dropped)",
        outcome.kept(),
        outcome.pairs(),
        outcome.dropped()
    );
    Ok(outcome)
}
