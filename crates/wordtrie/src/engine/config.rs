//! Engine configuration.

use crate::text::DEFAULT_STRIP_PATTERN;

/// Permutation depth used when none is configured.
pub const DEFAULT_PERMUTATION_DEPTH: i32 = 2;

/// Settings for an [`IndexEngine`](super::IndexEngine).
///
/// `debug`, `order_fixed` and `permutation_depth` can also be changed on a
/// running engine; the rest is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Emit diagnostic log records (batch progress, skipped words).
    pub debug: bool,
    /// Clean words with the strip pattern, trimming and lowercasing.
    pub normalize: bool,
    /// Regex whose matches are removed from words during normalization.
    pub strip_pattern: String,
    /// Index words only under their literal spelling.
    pub order_fixed: bool,
    /// Window size for permutation variants; 0 means every full permutation
    /// and a negative value generates nothing.
    pub permutation_depth: i32,
    /// Skip insertions once process memory reaches this many bytes. 0 disables.
    pub memory_limit: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            debug: false,
            normalize: true,
            strip_pattern: DEFAULT_STRIP_PATTERN.to_string(),
            order_fixed: true,
            permutation_depth: DEFAULT_PERMUTATION_DEPTH,
            memory_limit: 0,
        }
    }
}

impl EngineConfig {
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_strip_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.strip_pattern = pattern.into();
        self
    }

    pub fn with_order_fixed(mut self, order_fixed: bool) -> Self {
        self.order_fixed = order_fixed;
        self
    }

    pub fn with_permutation_depth(mut self, depth: i32) -> Self {
        self.permutation_depth = depth;
        self
    }

    pub fn with_memory_limit(mut self, bytes: u64) -> Self {
        self.memory_limit = bytes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert!(!config.debug);
        assert!(config.normalize);
        assert!(config.order_fixed);
        assert_eq!(config.strip_pattern, DEFAULT_STRIP_PATTERN);
        assert_eq!(config.permutation_depth, 2);
        assert_eq!(config.memory_limit, 0);
    }

    #[test]
    fn chained_setters() {
        let config = EngineConfig::default()
            .with_debug(true)
            .with_normalize(false)
            .with_strip_pattern("[0-9]")
            .with_order_fixed(false)
            .with_permutation_depth(0)
            .with_memory_limit(1 << 20);

        assert!(config.debug);
        assert!(!config.normalize);
        assert_eq!(config.strip_pattern, "[0-9]");
        assert!(!config.order_fixed);
        assert_eq!(config.permutation_depth, 0);
        assert_eq!(config.memory_limit, 1 << 20);
    }
}
