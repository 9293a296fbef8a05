use std::collections::HashSet;

/// Unique link strings collected across every scanned file.
///
/// Keys are compared exactly; no normalization of case, query or fragment.
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: HashSet<String>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the link was not seen before.
    pub fn insert(&mut self, link: String) -> bool {
        self.seen.insert(link)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Unique members in no particular order.
    pub fn into_unique(self) -> HashSet<String> {
        self.seen
    }
}
