//! Trie vertex stored in the node arena.

use fnv::FnvHashMap;

use super::index_types::{NodeIndex, OptionNodeIndex, ResourceId, ResourceIds};

/// Key character carried by the root node. Never matched during traversal.
pub const ROOT_KEY: char = ' ';

/// A single trie vertex.
///
/// Children are owned by the arena, not by the node: `children` maps the next
/// character to the child's arena handle, and `parent` is a plain handle back
/// up the tree used only for pruning.
#[derive(Debug, Clone)]
pub struct TrieNode {
    key: char,
    parent: OptionNodeIndex,
    /// Characters from the root to this node; root is 0.
    depth: u32,
    children: FnvHashMap<char, NodeIndex>,
    resources: ResourceIds,
}

impl TrieNode {
    /// Creates a parentless root node.
    pub fn root() -> Self {
        Self {
            key: ROOT_KEY,
            parent: OptionNodeIndex::none(),
            depth: 0,
            children: FnvHashMap::default(),
            resources: ResourceIds::default(),
        }
    }

    /// Creates a child node for `key`, one level below a parent at `parent_depth`.
    pub fn new(parent: NodeIndex, key: char, parent_depth: usize) -> Self {
        Self {
            key,
            parent: OptionNodeIndex::some(parent),
            depth: (parent_depth + 1) as u32,
            children: FnvHashMap::default(),
            resources: ResourceIds::default(),
        }
    }

    #[inline]
    pub fn key(&self) -> char {
        self.key
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent.to_option()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth as usize
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.to_option().is_none()
    }

    #[inline]
    pub fn child(&self, key: char) -> Option<NodeIndex> {
        self.children.get(&key).copied()
    }

    /// Iterates over `(character, child)` pairs in no particular order.
    pub fn children(&self) -> impl Iterator<Item = (char, NodeIndex)> + '_ {
        self.children.iter().map(|(&key, &index)| (key, index))
    }

    /// Links a child under `key`, returning the handle it replaced, if any.
    pub fn add_child(&mut self, key: char, child: NodeIndex) -> Option<NodeIndex> {
        self.children.insert(key, child)
    }

    pub fn remove_child(&mut self, key: char) -> Option<NodeIndex> {
        self.children.remove(&key)
    }

    /// True for a non-root node with no children: the only kind that may be pruned.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty() && !self.is_root()
    }

    #[inline]
    pub fn resources(&self) -> &ResourceIds {
        &self.resources
    }

    pub fn add_resource(&mut self, id: ResourceId) -> bool {
        self.resources.insert(id)
    }
}
