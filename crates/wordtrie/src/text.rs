//! Word preparation: normalization of raw tokens into index keys, and
//! expansion of a key into the permutation variants that get indexed.

mod normalize;
mod variants;

pub use normalize::{WordNormalizer, DEFAULT_STRIP_PATTERN};
pub use variants::{VariantGenerator, VariantMode};
