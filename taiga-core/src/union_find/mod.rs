//! Union-find (disjoint set union) over integer element indices.
//!
//! Tracks a partition of `n` elements into disjoint components, supporting
//! near-constant amortised merge and membership queries via path compression
//! and union by rank. The MST builder creates one instance per computation
//! to detect cycle-forming edges; the structure is also usable on its own.

/// Array-backed union-find with path compression and union by rank.
///
/// Parent chains always terminate at a root, and each element belongs to
/// exactly one component identified by that root. Across a sequence of `m`
/// operations on `n` elements the amortised cost per operation is bounded by
/// the inverse Ackermann function.
///
/// # Examples
/// ```
/// use taiga_core::UnionFind;
///
/// let mut union_find = UnionFind::new(4);
/// assert!(union_find.union(0, 1));
/// assert!(!union_find.union(1, 0));
/// assert_eq!(union_find.find(0), union_find.find(1));
/// assert_eq!(union_find.components(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl UnionFind {
    /// Creates `n` singleton components, each element its own root.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Returns the number of elements the structure was created with.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the structure tracks no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint components currently tracked.
    #[must_use]
    pub fn components(&self) -> usize {
        self.components
    }

    /// Returns the canonical root of the component containing `node`.
    ///
    /// Every element visited on the way to the root is re-pointed directly
    /// at it, amortising future lookups.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`; element indices are a caller
    /// contract, not a recoverable condition.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// Returns `true` when a merge occurred and `false` when both elements
    /// already shared a component (the cycle-forming case the MST builder
    /// rejects). The lower-rank root is attached beneath the higher-rank
    /// one; equal ranks keep the smaller root index as the surviving root
    /// and bump its rank.
    ///
    /// # Panics
    /// Panics when `left >= self.len()` or `right >= self.len()`.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank || (left_rank == right_rank && right < left) {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.components -= 1;
        true
    }

    /// Returns `true` when both elements currently share a component.
    ///
    /// # Panics
    /// Panics when `left >= self.len()` or `right >= self.len()`.
    pub fn connected(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }
}
