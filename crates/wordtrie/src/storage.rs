//! Storage layer for the trie.
//!
//! This module provides the low-level data storage primitives:
//! - A freelist arena (`NodeSlab`) addressed by compact `NodeIndex` handles
//! - Trie vertices (`TrieNode`) that refer to their parent by index
//! - Resource id interning (`ResourcePool`) so nodes only hold small handles

mod index_types;
mod node;
mod resource_pool;
mod slab;

pub use index_types::{NodeIndex, OptionNodeIndex, ResourceId, ResourceIds};
pub use node::{TrieNode, ROOT_KEY};
pub use resource_pool::ResourcePool;
pub use slab::{NodeSlab, NodeSlabIter};
