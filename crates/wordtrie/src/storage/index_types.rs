//! Compact handle types for arena nodes and interned resources.

use thin_vec::ThinVec;

/// A compact 32-bit handle into a [`NodeSlab`](super::NodeSlab).
///
/// The u32::MAX value is reserved for `OptionNodeIndex` and never handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct NodeIndex(u32);

impl NodeIndex {
    /// Creates a new NodeIndex from a usize.
    ///
    /// # Panics
    /// Panics if `index >= u32::MAX` (reserved for the None sentinel).
    #[inline]
    pub fn new(index: usize) -> Self {
        assert!(
            index < u32::MAX as usize,
            "node index must be less than u32::MAX"
        );
        Self(index as u32)
    }

    /// Returns the index as a usize.
    #[inline]
    pub fn get(self) -> usize {
        self.0 as usize
    }
}

/// An optional node handle using u32::MAX as the None sentinel.
///
/// Fits in 4 bytes where `Option<NodeIndex>` would take 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct OptionNodeIndex(u32);

impl OptionNodeIndex {
    #[inline]
    pub fn none() -> Self {
        Self(u32::MAX)
    }

    #[inline]
    pub fn some(index: NodeIndex) -> Self {
        Self(index.0)
    }

    #[inline]
    pub fn to_option(self) -> Option<NodeIndex> {
        if self.0 == u32::MAX {
            None
        } else {
            Some(NodeIndex(self.0))
        }
    }
}

impl Default for OptionNodeIndex {
    fn default() -> Self {
        Self::none()
    }
}

/// Handle for a resource identifier interned in a [`ResourcePool`](super::ResourcePool).
///
/// Handles are issued in first-seen order, so ordering by handle is ordering
/// by the moment a resource was first indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ResourceId(u32);

impl ResourceId {
    #[inline]
    pub fn new(index: usize) -> Self {
        assert!(
            index < u32::MAX as usize,
            "resource id must be less than u32::MAX"
        );
        Self(index as u32)
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0 as usize
    }
}

// ---------------------------------------------------------------------------
// ResourceIds
// ---------------------------------------------------------------------------

/// The set of resources attached to a single trie node.
///
/// Kept sorted and deduplicated in a `ThinVec`, which costs a single pointer
/// while empty. Most trie nodes are pure path nodes, so that matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[repr(transparent)]
pub struct ResourceIds {
    ids: ThinVec<ResourceId>,
}

impl ResourceIds {
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates over the handles in ascending order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = ResourceId> + '_ {
        self.ids.iter().copied()
    }

    /// Inserts a handle in sorted position. Returns false if it was already present.
    pub fn insert(&mut self, id: ResourceId) -> bool {
        match self.ids.binary_search(&id) {
            Ok(_) => false,
            Err(pos) => {
                self.ids.insert(pos, id);
                true
            }
        }
    }
}
