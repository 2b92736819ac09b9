//! Plain result types shared by the engine, the loader and the REPL.

/// Snapshot of engine counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineStats {
    /// Trie nodes, excluding the root.
    pub trie_nodes: usize,
    /// Key insertions performed since the last flush (one per generated variant).
    pub total_insertions: u64,
    /// Distinct resources attached since the last flush.
    pub resources: usize,
    /// Approximate process memory usage in bytes.
    pub memory_usage: u64,
}

/// Outcome of loading a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    /// Files read and inserted.
    pub files: usize,
    /// Lines passed to `insert_resource`.
    pub lines: usize,
    /// Entries skipped because they could not be read.
    pub errors: usize,
}
