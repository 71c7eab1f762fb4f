use std::io::Write;

use crate::error::Result;

use super::model::{Dataset, FeatureVector, Label};

/// Render one vector as `<prefix> 1:<v1> 2:<v2> ...`.
pub fn format_record(prefix: &str, vector: &FeatureVector) -> String {
    let mut out = String::from(prefix);
    for (d, &value) in vector.values.iter().enumerate() {
        out.push_str(&format!(" {}:{}", d + 1, format_value(value)));
    }
    out
}

/// Shortest round-trip form, keeping `1.0` as `1.0`. Exponents are signed
/// and at least two digits wide (`1e-05`, `1.5e+16`).
pub fn format_value(value: f64) -> String {
    let repr = format!("{value:?}");
    match repr.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

/// Write one line per vector, in order.
pub fn write_records<W: Write>(out: &mut W, prefix: &str, vectors: &[FeatureVector]) -> Result<()> {
    for vector in vectors {
        writeln!(out, "{}", format_record(prefix, vector))?;
    }
    Ok(())
}

/// Write the negative class (`-1`) followed by the positive class (`+1`).
pub fn write_dataset<W: Write>(out: &mut W, dataset: &Dataset) -> Result<()> {
    write_records(out, Label::Negative.prefix(), &dataset.negative)?;
    write_records(out, Label::Positive.prefix(), &dataset.positive)?;
    out.flush()?;
    Ok(())
}
