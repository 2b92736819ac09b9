//! In-memory word index backed by a character trie.
//!
//! This crate provides:
//! - An arena-allocated trie mapping character keys to resource id sets
//! - Word normalization and permutation variants for fuzzy recall
//! - An indexing engine with runtime toggles and a memory budget
//! - Directory loading and a line-oriented command prompt

pub mod engine;
pub mod error;
pub mod loader;
pub mod repl;
pub mod storage;
pub mod text;
pub mod trie;
pub mod types;

// Re-export main types
pub use engine::{EngineConfig, IndexEngine, MemoryProbe, ProcessMemoryProbe};
pub use error::{IndexError, Result};
pub use loader::load_directory;
pub use repl::{Command, Repl};
pub use text::{VariantGenerator, VariantMode, WordNormalizer, DEFAULT_STRIP_PATTERN};
pub use trie::Trie;
pub use types::{EngineStats, LoadSummary};
