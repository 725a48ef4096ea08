//! Union-find over vertex labels with path compression and union by rank.
//! Kruskal's algorithm uses it to reject cycle-forming edges; the find/union
//! counters are per-instance and feed the reported operation counts.

use ahash::AHashMap;

#[derive(Debug, Default)]
pub struct DisjointSet {
    parent: AHashMap<String, String>,
    rank: AHashMap<String, u32>,
    finds: u64,
    unions: u64,
}

impl DisjointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `vertex` as its own singleton set. Registering an already
    /// known vertex resets it to a singleton, discarding prior unions.
    pub fn make_set(&mut self, vertex: &str) {
        self.parent.insert(vertex.to_string(), vertex.to_string());
        self.rank.insert(vertex.to_string(), 0);
    }

    /// Root of the set containing `vertex`, or `None` if it was never
    /// registered. Compresses the visited path; every invocation, the
    /// internal recursive ones included, counts towards the find counter.
    pub fn find(&mut self, vertex: &str) -> Option<String> {
        self.finds += 1;
        let parent = self.parent.get(vertex)?.clone();
        if parent == vertex {
            return Some(parent);
        }
        let root = self.find(&parent)?;
        self.parent.insert(vertex.to_string(), root.clone());
        Some(root)
    }

    /// Merge the sets containing `v1` and `v2` by rank. No-op if either
    /// vertex is unregistered or both share a root already; only an actual
    /// merge increments the union counter.
    pub fn union(&mut self, v1: &str, v2: &str) {
        let (r1, r2) = match (self.find(v1), self.find(v2)) {
            (Some(r1), Some(r2)) => (r1, r2),
            _ => return,
        };
        if r1 == r2 {
            return;
        }
        self.unions += 1;

        let rank1 = self.rank.get(&r1).copied().unwrap_or(0);
        let rank2 = self.rank.get(&r2).copied().unwrap_or(0);
        if rank1 < rank2 {
            self.parent.insert(r1, r2);
        } else if rank1 > rank2 {
            self.parent.insert(r2, r1);
        } else {
            self.parent.insert(r2, r1.clone());
            self.rank.insert(r1, rank1 + 1);
        }
    }

    pub fn find_count(&self) -> u64 {
        self.finds
    }

    pub fn union_count(&self) -> u64 {
        self.unions
    }
}
