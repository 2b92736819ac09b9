//! IndexEngine - main API for indexing resources and querying words.
//!
//! The engine owns the trie and routes every word through the same pipeline:
//!
//! ```text
//! text ─split(' ')─▶ word ─WordNormalizer─▶ key ─VariantGenerator─▶ keys ─▶ Trie::insert
//! query ─WordNormalizer─▶ key ─▶ Trie::{query_exact, query_immediate_children, query_deep}
//! ```
//!
//! Insertion is guarded by an approximate memory budget: once the configured
//! limit is reached, further words are dropped one by one.

mod config;
mod memory;


use std::collections::BTreeSet;
use std::fmt;

pub use config::{EngineConfig, DEFAULT_PERMUTATION_DEPTH};
pub use memory::{MemoryProbe, ProcessMemoryProbe, MEMORY_SAMPLE_INTERVAL};

use crate::error::Result;
use crate::text::{VariantGenerator, WordNormalizer};
use crate::trie::Trie;
use crate::types::EngineStats;

/// Progress is logged each time the insertion count crosses a multiple of this.
pub const BATCH_REPORT_INTERVAL: u64 = 50_000;

/// In-memory word index over a character trie.
pub struct IndexEngine {
    trie: Trie,
    normalizer: WordNormalizer,
    config: EngineConfig,
    insertions: u64,
    probe: Box<dyn MemoryProbe>,
}

impl fmt::Debug for IndexEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexEngine")
            .field("config", &self.config)
            .field("insertions", &self.insertions)
            .field("trie_nodes", &self.trie.size())
            .finish()
    }
}

impl IndexEngine {
    /// Creates an engine measuring memory with [`ProcessMemoryProbe`].
    ///
    /// Fails only if the normalization pattern does not compile.
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_probe(config, Box::new(ProcessMemoryProbe::new()))
    }

    /// Creates an engine with a caller-supplied memory probe.
    pub fn with_probe(config: EngineConfig, probe: Box<dyn MemoryProbe>) -> Result<Self> {
        let normalizer = WordNormalizer::new(config.normalize, &config.strip_pattern)?;
        Ok(Self {
            trie: Trie::new(),
            normalizer,
            config,
            insertions: 0,
            probe,
        })
    }

    // -------------------------------------------------------------------------
    // Insertion
    // -------------------------------------------------------------------------

    /// Indexes every space-separated word of `text` under `resource_id`.
    ///
    /// Words are handled independently; a word skipped by admission control
    /// does not stop the rest.
    pub fn insert_resource(&mut self, resource_id: &str, text: &str) {
        for word in text.split(' ') {
            self.insert_word(resource_id, word);
        }
    }

    /// Returns false if the word was dropped by admission control.
    fn insert_word(&mut self, resource_id: &str, word: &str) -> bool {
        let key = self.normalizer.clean(word);

        if self.config.memory_limit != 0 {
            let used = self.probe.used_bytes();
            if used >= self.config.memory_limit {
                if self.config.debug {
                    log::info!(
                        "memory limit reached ({used} >= {} bytes), skipping {key:?} for {resource_id}",
                        self.config.memory_limit
                    );
                }
                return false;
            }
        }

        let before = self.insertions;
        for variant in self.generator().generate(&key) {
            log::trace!("insert key {variant} for resource {resource_id}");
            self.trie.insert(&variant, resource_id);
            self.insertions += 1;
        }

        if self.config.debug && crosses_report_boundary(before, self.insertions) {
            let memory = self.probe.used_bytes();
            log::info!(
                "batch {} with total {} nodes with memory usage of {memory} bytes",
                self.insertions,
                self.trie.size()
            );
        }

        true
    }

    fn generator(&self) -> VariantGenerator {
        VariantGenerator::from_settings(self.config.order_fixed, self.config.permutation_depth)
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Resources indexed under exactly `key` (after normalization).
    pub fn get(&self, key: &str) -> Vec<String> {
        self.trie.query_exact(&self.normalizer.clean(key))
    }

    /// Resources held by the nodes directly below `key`'s node.
    pub fn query_shallow(&self, key: &str) -> BTreeSet<String> {
        self.trie.query_immediate_children(&self.normalizer.clean(key))
    }

    /// Resources held anywhere in the subtree of `key`'s node.
    pub fn query_deep(&self, key: &str) -> BTreeSet<String> {
        self.trie.query_deep(&self.normalizer.clean(key))
    }

    // -------------------------------------------------------------------------
    // Maintenance
    // -------------------------------------------------------------------------

    /// Removes `key` from the trie.
    ///
    /// The key is used as given, without normalization: pass a cleaned key.
    pub fn remove(&mut self, key: &str) -> bool {
        self.trie.remove(key)
    }

    /// Drops the whole index and resets the insertion counter.
    ///
    /// With a memory limit set, the probe is re-read so a reading cached
    /// before the flush does not keep rejecting words.
    pub fn flush(&mut self) {
        self.insertions = 0;
        self.trie.flush();
        if self.config.memory_limit != 0 {
            self.probe.refresh();
        }
    }

    /// Returns its input. Used to check that the engine is reachable.
    pub fn echo<'a>(&self, text: &'a str) -> &'a str {
        text
    }

    // -------------------------------------------------------------------------
    // Settings and counters
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn debug(&self) -> bool {
        self.config.debug
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.config.debug = debug;
    }

    pub fn order_fixed(&self) -> bool {
        self.config.order_fixed
    }

    pub fn set_order_fixed(&mut self, order_fixed: bool) {
        self.config.order_fixed = order_fixed;
    }

    pub fn permutation_depth(&self) -> i32 {
        self.config.permutation_depth
    }

    /// Negative depths are accepted and generate no keys.
    pub fn set_permutation_depth(&mut self, depth: i32) {
        self.config.permutation_depth = depth;
    }

    /// Key insertions since the last flush, counting every generated variant.
    pub fn total_insertions(&self) -> u64 {
        self.insertions
    }

    pub fn trie_node_count(&self) -> usize {
        self.trie.size()
    }

    /// Fresh memory reading from the probe.
    pub fn memory_usage(&mut self) -> u64 {
        self.probe.refresh()
    }

    pub fn stats(&mut self) -> EngineStats {
        EngineStats {
            trie_nodes: self.trie.size(),
            total_insertions: self.insertions,
            resources: self.trie.resource_count(),
            memory_usage: self.memory_usage(),
        }
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }
}

/// True when going from `before` to `after` insertions passes a multiple of
/// [`BATCH_REPORT_INTERVAL`].
fn crosses_report_boundary(before: u64, after: u64) -> bool {
    before / BATCH_REPORT_INTERVAL != after / BATCH_REPORT_INTERVAL
}
