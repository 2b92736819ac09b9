//! Interning pool for resource identifiers.
//!
//! A single file path is attached to every word (and every permutation
//! variant of every word) it contains, so storing the string at each node
//! would repeat it thousands of times. The pool stores each distinct
//! identifier once and hands out [`ResourceId`] handles instead.

use std::rc::Rc;

use fnv::FnvHashMap;

use super::index_types::ResourceId;

/// Owns the strings behind [`ResourceId`] handles.
///
/// Handles are never recycled; the whole pool is dropped together with the
/// trie on flush.
#[derive(Debug, Default)]
pub struct ResourcePool {
    names: Vec<Rc<str>>,
    lookup: FnvHashMap<Rc<str>, ResourceId>,
}

impl ResourcePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the handle for `name`, storing it on first sight.
    pub fn intern(&mut self, name: &str) -> ResourceId {
        if let Some(&id) = self.lookup.get(name) {
            return id;
        }
        let id = ResourceId::new(self.names.len());
        let stored: Rc<str> = Rc::from(name);
        self.names.push(Rc::clone(&stored));
        self.lookup.insert(stored, id);
        id
    }

    pub fn resolve(&self, id: ResourceId) -> Option<&str> {
        self.names.get(id.get()).map(|name| &**name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_and_resolve() {
        let mut pool = ResourcePool::new();
        let id = pool.intern("docs/a.txt");
        assert_eq!(pool.resolve(id), Some("docs/a.txt"));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn intern_deduplicates() {
        let mut pool = ResourcePool::new();
        let first = pool.intern("same");
        let second = pool.intern("same");
        assert_eq!(first, second);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn handles_follow_first_seen_order() {
        let mut pool = ResourcePool::new();
        let b = pool.intern("b");
        let a = pool.intern("a");
        assert!(b < a);
    }

    #[test]
    fn empty_and_unicode_names() {
        let mut pool = ResourcePool::new();
        let empty = pool.intern("");
        let unicode = pool.intern("こんにちは");
        assert_eq!(pool.resolve(empty), Some(""));
        assert_eq!(pool.resolve(unicode), Some("こんにちは"));
        assert_eq!(pool.resolve(ResourceId::new(9)), None);
    }
}
