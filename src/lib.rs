//! Filter paired positive/negative LIBSVM feature vectors by relative difference.
//!
//! A record line looks like `<label> <idx>:<val> <idx>:<val> ...`. Lines starting
//! with `-1` are negative, all others positive. The i-th positive record is paired
//! with the i-th negative record, and a pair is dropped when
//! `max_d |p[d] - n[d]| / |p[d]| >= tau`.

pub mod data;
pub mod error;
pub mod report;

pub use data::filter::{filter_pairs, FilterOutcome, PairScore, ZeroPolicy};
pub use data::loader::load_dataset;
pub use data::model::{Dataset, FeatureVector, Label};
pub use data::writer::write_dataset;
pub use error::{FilterError, Result};
