//! Character trie mapping index keys to resource identifiers.
//!
//! All vertices live in a [`NodeSlab`] and point back to their parent by
//! handle, which gives O(depth) upward pruning on removal without shared
//! ownership. Resource identifiers are interned once per trie.

use std::collections::BTreeSet;

use crate::storage::{NodeIndex, NodeSlab, ResourceId, ResourcePool, TrieNode};

/// Prefix tree over the characters of index keys.
#[derive(Debug)]
pub struct Trie {
    nodes: NodeSlab<TrieNode>,
    root: NodeIndex,
    resources: ResourcePool,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        let mut nodes = NodeSlab::new();
        let root = nodes.insert(TrieNode::root());
        Self {
            nodes,
            root,
            resources: ResourcePool::new(),
        }
    }

    #[inline]
    pub fn root(&self) -> NodeIndex {
        self.root
    }

    /// Returns the node behind a handle, if it is still alive.
    #[inline]
    pub fn node(&self, index: NodeIndex) -> Option<&TrieNode> {
        self.nodes.get(index)
    }

    /// Number of nodes excluding the root.
    #[inline]
    pub fn size(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Number of distinct resource identifiers seen since the last flush.
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    /// Walks from the root along the characters of `key` and returns the
    /// deepest node reached.
    ///
    /// The walk stops at the first character without a matching child, so the
    /// result may spell a strict prefix of `key` (or be the root itself).
    pub fn traverse_from_root(&self, key: &str) -> NodeIndex {
        let mut current = self.root;
        for ch in key.chars() {
            match self.nodes[current].child(ch) {
                Some(child) => current = child,
                None => break,
            }
        }
        current
    }

    /// Attaches `resource` to `key`, creating any missing path nodes.
    pub fn insert(&mut self, key: &str, resource: &str) {
        let mut current = self.traverse_from_root(key);
        let reached = self.nodes[current].depth();

        for ch in key.chars().skip(reached) {
            let parent_depth = self.nodes[current].depth();
            let child = self.nodes.insert(TrieNode::new(current, ch, parent_depth));
            self.nodes[current].add_child(ch, child);
            current = child;
        }

        let id = self.resources.intern(resource);
        self.nodes[current].add_resource(id);
    }

    /// Inserts every `(key, resource)` pair in order.
    pub fn batch_insert<I, K, R>(&mut self, items: I)
    where
        I: IntoIterator<Item = (K, R)>,
        K: AsRef<str>,
        R: AsRef<str>,
    {
        for (key, resource) in items {
            self.insert(key.as_ref(), resource.as_ref());
        }
    }

    /// True when a node exists at exactly `key`'s depth.
    ///
    /// This is a path check: a node created only as an intermediate step
    /// towards a longer key satisfies it too, even with no resources attached.
    pub fn contains_key(&self, key: &str) -> bool {
        self.find_exact(key).is_some()
    }

    fn find_exact(&self, key: &str) -> Option<NodeIndex> {
        let node = self.traverse_from_root(key);
        (self.nodes[node].depth() == key.chars().count()).then_some(node)
    }

    /// Returns a copy of the resources stored exactly at `key`, in first-seen order.
    pub fn query_exact(&self, key: &str) -> Vec<String> {
        let Some(node) = self.find_exact(key) else {
            return Vec::new();
        };
        self.nodes[node]
            .resources()
            .iter()
            .filter_map(|id| self.resolve(id))
            .collect()
    }

    /// Returns the union of the resources held by the direct children of the
    /// deepest node reachable for `key`.
    pub fn query_immediate_children(&self, key: &str) -> BTreeSet<String> {
        let node = &self.nodes[self.traverse_from_root(key)];
        node.children()
            .flat_map(|(_, child)| self.nodes[child].resources().iter())
            .filter_map(|id| self.resolve(id))
            .collect()
    }

    /// Returns the union of the resources held by the deepest node reachable
    /// for `key` and by every node below it.
    pub fn query_deep(&self, key: &str) -> BTreeSet<String> {
        let mut found: BTreeSet<ResourceId> = BTreeSet::new();
        let mut stack = vec![self.traverse_from_root(key)];

        while let Some(current) = stack.pop() {
            let node = &self.nodes[current];
            found.extend(node.resources().iter());
            stack.extend(node.children().map(|(_, child)| child));
        }

        found
            .into_iter()
            .filter_map(|id| self.resolve(id))
            .collect()
    }

    /// Removes `key` by pruning childless nodes upward from its node.
    ///
    /// Returns true whenever a node exists at `key`'s depth, even if that node
    /// still has children and nothing was detached. Pruning continues through
    /// ancestors that become childless, regardless of the resources they hold,
    /// and stops at the first node with remaining children or at the root.
    pub fn remove(&mut self, key: &str) -> bool {
        let Some(mut current) = self.find_exact(key) else {
            return false;
        };

        loop {
            let node = &self.nodes[current];
            if !node.is_leaf() {
                break;
            }
            let Some(parent) = node.parent() else {
                break;
            };
            let ch = node.key();
            self.nodes[parent].remove_child(ch);
            self.nodes.try_remove(current);
            current = parent;
        }

        true
    }

    /// Drops every node and interned resource, leaving a fresh empty root.
    pub fn flush(&mut self) {
        *self = Self::new();
    }

    fn resolve(&self, id: ResourceId) -> Option<String> {
        self.resources.resolve(id).map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    fn depth_invariant_holds(trie: &Trie) -> bool {
        trie.nodes.iter().all(|(_, node)| match node.parent() {
            Some(parent) => trie.nodes[parent].depth() + 1 == node.depth(),
            None => node.depth() == 0,
        })
    }

    #[test]
    fn new_trie_is_empty() {
        let trie = Trie::new();
        assert_eq!(trie.size(), 0);
        assert_eq!(trie.traverse_from_root("anything"), trie.root());
        assert!(trie.query_exact("anything").is_empty());
    }

    #[test]
    fn insert_creates_one_node_per_new_character() {
        let mut trie = Trie::new();
        trie.insert("hello", "doc1");
        assert_eq!(trie.size(), 5);

        trie.insert("help", "doc2");
        assert_eq!(trie.size(), 6);

        trie.insert("hello", "doc3");
        assert_eq!(trie.size(), 6);
        assert!(depth_invariant_holds(&trie));
    }

    #[test]
    fn insert_is_idempotent() {
        let mut trie = Trie::new();
        trie.insert("cat", "doc");
        trie.insert("cat", "doc");
        assert_eq!(trie.query_exact("cat"), vec!["doc".to_string()]);
        assert_eq!(trie.resource_count(), 1);
    }

    #[test]
    fn traverse_returns_deepest_match() {
        let mut trie = Trie::new();
        trie.insert("abc", "doc");

        let full = trie.traverse_from_root("abc");
        assert_eq!(trie.node(full).map(TrieNode::depth), Some(3));

        let partial = trie.traverse_from_root("abx");
        assert_eq!(trie.node(partial).map(TrieNode::depth), Some(2));
        assert_eq!(trie.node(partial).map(TrieNode::key), Some('b'));

        let longer = trie.traverse_from_root("abcdef");
        assert_eq!(longer, full);

        assert_eq!(trie.traverse_from_root("zzz"), trie.root());
    }

    #[test]
    fn contains_key_is_depth_only() {
        let mut trie = Trie::new();
        trie.insert("hello", "doc1");

        assert!(trie.contains_key("hello"));
        assert!(trie.contains_key("hell"));
        assert!(trie.contains_key(""));
        assert!(!trie.contains_key("help"));
        assert!(!trie.contains_key("hello!"));
    }

    #[test]
    fn query_exact_on_path_node_is_empty() {
        let mut trie = Trie::new();
        trie.insert("hello", "doc1");
        assert!(trie.query_exact("hell").is_empty());
        assert!(trie.query_exact("help").is_empty());
    }

    #[test]
    fn query_exact_keeps_first_seen_order() {
        let mut trie = Trie::new();
        trie.insert("other", "zeta");
        trie.insert("word", "beta");
        trie.insert("word", "zeta");
        trie.insert("word", "alpha");
        assert_eq!(trie.query_exact("word"), vec!["zeta", "beta", "alpha"]);
    }

    #[test]
    fn empty_key_lives_at_the_root() {
        let mut trie = Trie::new();
        trie.insert("", "blank");
        assert_eq!(trie.size(), 0);
        assert_eq!(trie.query_exact(""), vec!["blank".to_string()]);
    }

    #[test]
    fn keys_are_walked_by_character() {
        let mut trie = Trie::new();
        trie.insert("café", "doc");
        assert_eq!(trie.size(), 4);
        assert!(trie.contains_key("café"));
        assert_eq!(trie.query_exact("café"), vec!["doc".to_string()]);
    }

    #[test]
    fn immediate_children_reads_one_level_down() {
        let mut trie = Trie::new();
        trie.insert("a", "self");
        trie.insert("ab", "d1");
        trie.insert("ac", "d2");
        trie.insert("abc", "d3");

        assert_eq!(trie.query_immediate_children("a"), set(&["d1", "d2"]));
        // Partial match falls back to the deepest reachable node.
        assert_eq!(trie.query_immediate_children("ax"), set(&["d1", "d2"]));
        assert_eq!(trie.query_immediate_children("ab"), set(&["d3"]));
        assert!(trie.query_immediate_children("abc").is_empty());
    }

    #[test]
    fn deep_query_collects_subtree() {
        let mut trie = Trie::new();
        trie.insert("a", "self");
        trie.insert("ab", "d1");
        trie.insert("ac", "d2");
        trie.insert("abc", "d3");
        trie.insert("b", "other");

        assert_eq!(trie.query_deep("a"), set(&["self", "d1", "d2", "d3"]));
        assert_eq!(trie.query_deep("ab"), set(&["d1", "d3"]));
        assert_eq!(
            trie.query_deep(""),
            set(&["self", "d1", "d2", "d3", "other"])
        );
        // Nothing matches: the walk stays at the root.
        assert_eq!(trie.query_deep("zzz"), trie.query_deep(""));
    }

    #[test]
    fn deep_is_superset_of_shallow() {
        let mut trie = Trie::new();
        for (key, doc) in [("car", "1"), ("cart", "2"), ("cat", "3"), ("dog", "4")] {
            trie.insert(key, doc);
        }
        for prefix in ["", "c", "ca", "car", "cart", "d", "x"] {
            let shallow = trie.query_immediate_children(prefix);
            let deep = trie.query_deep(prefix);
            assert!(shallow.is_subset(&deep), "prefix {prefix:?}");
        }
    }

    #[test]
    fn remove_prunes_leaf_chain() {
        let mut trie = Trie::new();
        trie.insert("hello", "doc1");
        trie.insert("help", "doc2");

        assert!(trie.remove("help"));
        assert_eq!(trie.size(), 5);
        assert!(trie.query_exact("help").is_empty());
        assert_eq!(trie.query_exact("hello"), vec!["doc1".to_string()]);
        assert!(depth_invariant_holds(&trie));

        assert!(trie.remove("hello"));
        assert_eq!(trie.size(), 0);
    }

    #[test]
    fn remove_missing_key_returns_false() {
        let mut trie = Trie::new();
        trie.insert("abc", "doc");
        assert!(!trie.remove("abd"));
        assert!(!trie.remove("abcd"));
        assert_eq!(trie.size(), 3);
    }

    #[test]
    fn remove_node_with_children_detaches_nothing() {
        let mut trie = Trie::new();
        trie.insert("ab", "short");
        trie.insert("abc", "long");

        assert!(trie.remove("ab"));
        assert_eq!(trie.size(), 3);
        assert_eq!(trie.query_exact("ab"), vec!["short".to_string()]);
    }

    #[test]
    fn remove_prunes_childless_ancestors_with_data() {
        let mut trie = Trie::new();
        trie.insert("ab", "short");
        trie.insert("abc", "long");

        assert!(trie.remove("abc"));
        assert_eq!(trie.size(), 0);
        assert!(trie.query_exact("ab").is_empty());
    }

    #[test]
    fn remove_never_detaches_root() {
        let mut trie = Trie::new();
        trie.insert("", "blank");
        assert!(trie.remove(""));
        assert_eq!(trie.query_exact(""), vec!["blank".to_string()]);
        assert!(trie.node(trie.root()).is_some());
    }

    #[test]
    fn removed_slots_are_reused_by_later_inserts() {
        let mut trie = Trie::new();
        trie.insert("xyz", "doc");
        trie.remove("xyz");
        trie.insert("uvw", "doc");
        assert_eq!(trie.size(), 3);
        assert_eq!(trie.nodes.len(), 4);
        assert!(depth_invariant_holds(&trie));
    }

    #[test]
    fn flush_resets_everything() {
        let mut trie = Trie::new();
        trie.batch_insert([("one", "a"), ("two", "b")]);
        assert_eq!(trie.size(), 6);

        trie.flush();
        assert_eq!(trie.size(), 0);
        assert_eq!(trie.resource_count(), 0);
        assert!(trie.query_exact("one").is_empty());
        assert!(trie.query_deep("").is_empty());
    }
}
