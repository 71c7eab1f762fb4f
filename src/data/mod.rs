/// Data layer: record model, loading, pair filtering and serialization.
///
/// Architecture:
/// ```text
///   LIBSVM text file
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  non-blank lines → split by label → FeatureVector per line
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  positive[i] paired with negative[i]
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  drop pairs with max relative difference >= tau
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  "-1 1:v 2:v ..." then "+1 1:v 2:v ..."
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod writer;
