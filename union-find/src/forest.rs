//! Dense disjoint-set forest with union by rank and full path compression.

use smallvec::SmallVec;
use tracing::trace;

/// Union-find over ids `0..len`, grown one singleton at a time.
#[derive(Debug, Clone, Default)]
pub(crate) struct Forest {
    parent: Vec<usize>,
    rank: Vec<u8>,
    /// Member count, only meaningful on roots.
    size: Vec<usize>,
    roots: usize,
}

impl Forest {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            parent: Vec::with_capacity(n),
            rank: Vec::with_capacity(n),
            size: Vec::with_capacity(n),
            roots: 0,
        }
    }

    /// Add a new singleton set and return its id.
    pub fn push(&mut self) -> usize {
        let id = self.parent.len();
        self.parent.push(id);
        self.rank.push(0);
        self.size.push(1);
        self.roots += 1;
        id
    }

    /// Number of distinct sets.
    pub fn roots(&self) -> usize {
        self.roots
    }

    /// Find the representative of the set containing `x`.
    ///
    /// Every node visited on the way is redirected straight at the root.
    pub fn find(&mut self, x: usize) -> usize {
        let mut path: SmallVec<[usize; 16]> = SmallVec::new();
        let mut root = x;
        while self.parent[root] != root {
            path.push(root);
            root = self.parent[root];
        }
        for id in path {
            self.parent[id] = root;
        }
        root
    }

    /// Union by rank. Returns the surviving root if `a` and `b` were in
    /// different sets.
    ///
    /// On equal ranks the root of `a` wins.
    pub fn union(&mut self, a: usize, b: usize) -> Option<usize> {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return None;
        }
        let (root, child) = if self.rank[ra] < self.rank[rb] {
            (rb, ra)
        } else {
            (ra, rb)
        };
        self.parent[child] = root;
        if self.rank[ra] == self.rank[rb] {
            self.rank[root] = self.rank[root].saturating_add(1);
        }
        self.size[root] += self.size[child];
        self.roots -= 1;
        trace!(
            root,
            absorbed = child,
            rank = self.rank[root],
            components = self.roots,
            "merged components"
        );
        Some(root)
    }

    /// Get the size of the set containing `x` (including `x` itself).
    pub fn set_size(&mut self, x: usize) -> usize {
        let r = self.find(x);
        self.size[r]
    }

    /// Follow parent links without compressing.
    #[cfg(test)]
    pub fn walk(&self, mut x: usize) -> usize {
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }

    #[cfg(test)]
    pub fn parent(&self, x: usize) -> usize {
        self.parent[x]
    }
}
