// ---------------------------------------------------------------------------
// SourceLine – one non-blank input line
// ---------------------------------------------------------------------------

/// A raw record line together with its 1-based line number in the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize,
    pub text: String,
}

impl SourceLine {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        SourceLine {
            number,
            text: text.into(),
        }
    }

    pub fn label(&self) -> Label {
        Label::of_line(&self.text)
    }
}

// ---------------------------------------------------------------------------
// Label – the class of a record
// ---------------------------------------------------------------------------

/// Class of a record. Only the literal `-1` prefix marks a negative record;
/// every other line (including malformed ones) is positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    /// Classify a raw input line by its prefix, before any numeric parsing.
    pub fn of_line(line: &str) -> Self {
        if line.starts_with("-1") {
            Label::Negative
        } else {
            Label::Positive
        }
    }

    /// Prefix written in front of serialized records of this class.
    pub fn prefix(self) -> &'static str {
        match self {
            Label::Positive => "+1",
            Label::Negative => "-1",
        }
    }
}

// ---------------------------------------------------------------------------
// FeatureVector – one dense record
// ---------------------------------------------------------------------------

/// Dense feature values in file order. Input indices are dropped; output
/// indices are regenerated from the position (`d + 1`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureVector {
    pub values: Vec<f64>,
}

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        FeatureVector { values }
    }

    /// Number of dimensions.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector has no dimensions.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        FeatureVector::new(values)
    }
}

// ---------------------------------------------------------------------------
// Dataset – both classes, positionally paired
// ---------------------------------------------------------------------------

/// The full parsed dataset. `positive[i]` is paired with `negative[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub positive: Vec<FeatureVector>,
    pub negative: Vec<FeatureVector>,
}

impl Dataset {
    pub fn new(positive: Vec<FeatureVector>, negative: Vec<FeatureVector>) -> Self {
        Dataset { positive, negative }
    }

    /// Number of pairs, or `None` when the classes differ in size.
    pub fn pair_count(&self) -> Option<usize> {
        (self.positive.len() == self.negative.len()).then_some(self.positive.len())
    }

    /// Whether both classes are empty.
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_only_on_literal_prefix() {
        assert_eq!(Label::of_line("-1 1:0.5"), Label::Negative);
        assert_eq!(Label::of_line("+1 1:0.5"), Label::Positive);
        assert_eq!(Label::of_line("1 1:0.5"), Label::Positive);
        assert_eq!(Label::of_line(" -1 1:0.5"), Label::Positive);
        assert_eq!(Label::of_line("garbage"), Label::Positive);
        // raw prefix test, not a token comparison
        assert_eq!(Label::of_line("-10 1:0.5"), Label::Negative);
    }

    #[test]
    fn pair_count_requires_equal_classes() {
        let v = FeatureVector::from(vec![1.0]);
        let balanced = Dataset::new(vec![v.clone()], vec![v.clone()]);
        assert_eq!(balanced.pair_count(), Some(1));

        let skewed = Dataset::new(vec![v.clone(), v.clone()], vec![v]);
        assert_eq!(skewed.pair_count(), None);
    }
}
