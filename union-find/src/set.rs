use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::error::{Result, UnionFindError};
use crate::forest::Forest;

const UNSET: usize = usize::MAX;

/// A partition of hashable elements under repeated merges.
///
/// Elements are interned into dense ids in the order they are first seen, so
/// every listing of elements ([`iter`](Self::iter),
/// [`get_component`](Self::get_component), [`components`](Self::components))
/// follows insertion order.
///
/// Queries that locate a root take `&mut self` because they compress paths.
/// Looking up an element that was never inserted is an error
/// ([`UnionFindError::InvalidElement`]) and leaves the set untouched; merging
/// operations insert missing elements instead.
#[derive(Debug, Clone)]
pub struct DisjointSet<T> {
    index: HashMap<T, usize>,
    elements: Vec<T>,
    forest: Forest,
}

impl<T> Default for DisjointSet<T> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            elements: Vec::new(),
            forest: Forest::default(),
        }
    }
}

impl<T> DisjointSet<T> {
    /// Create an empty disjoint set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty disjoint set with room for `n` elements.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            index: HashMap::with_capacity(n),
            elements: Vec::with_capacity(n),
            forest: Forest::with_capacity(n),
        }
    }

    /// Number of inserted elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of distinct components.
    pub fn component_count(&self) -> usize {
        self.forest.roots()
    }

    /// Iterate over the elements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T: Eq + Hash + Clone> DisjointSet<T> {
    /// Add `item` as its own component. Inserting a present item does nothing.
    pub fn insert(&mut self, item: T) {
        self.intern(item);
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(item)
    }

    /// Return the representative of the component containing `item`.
    pub fn find_root<Q>(&mut self, item: &Q) -> Result<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = self.id_of(item)?;
        let root = self.forest.find(id);
        Ok(&self.elements[root])
    }

    /// Merge the components of `x` and `y`, inserting either if missing.
    ///
    /// Returns `true` if two different components were merged.
    pub fn union(&mut self, x: T, y: T) -> bool {
        let a = self.intern(x);
        let b = self.intern(y);
        self.forest.union(a, b).is_some()
    }

    /// Merge `x` with `y` and then with every element of `rest`, in order.
    ///
    /// Each extra element is merged against the current root of `x`'s
    /// component, not chained against the previous extra element.
    pub fn join<I>(&mut self, x: T, y: T, rest: I)
    where
        I: IntoIterator<Item = T>,
    {
        let a = self.intern(x);
        let b = self.intern(y);
        self.forest.union(a, b);
        for item in rest {
            let c = self.intern(item);
            self.forest.union(a, c);
        }
    }

    /// Merge the first item with every later item.
    ///
    /// An empty iterator does nothing; a single item is only inserted.
    pub fn join_all<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut items = items.into_iter();
        let Some(first) = items.next() else {
            return;
        };
        let a = self.intern(first);
        for item in items {
            let b = self.intern(item);
            self.forest.union(a, b);
        }
    }

    pub fn same_component<Q>(&mut self, a: &Q, b: &Q) -> Result<bool>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let a = self.id_of(a)?;
        let b = self.id_of(b)?;
        Ok(self.forest.find(a) == self.forest.find(b))
    }

    /// Number of elements in the component containing `item`.
    pub fn component_len<Q>(&mut self, item: &Q) -> Result<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = self.id_of(item)?;
        Ok(self.forest.set_size(id))
    }

    /// All elements sharing a component with `item`, `item` included, in
    /// insertion order.
    pub fn get_component<Q>(&mut self, item: &Q) -> Result<Vec<&T>>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = self.id_of(item)?;
        let root = self.forest.find(id);
        let mut members = Vec::with_capacity(self.forest.set_size(root));
        for (other, element) in self.elements.iter().enumerate() {
            if self.forest.find(other) == root {
                members.push(element);
            }
        }
        Ok(members)
    }

    /// Partition every inserted element by component.
    ///
    /// Groups appear in the insertion order of their earliest member and list
    /// their members in insertion order.
    pub fn components(&mut self) -> Vec<Vec<&T>> {
        let mut slot = vec![UNSET; self.elements.len()];
        let mut groups: Vec<Vec<&T>> = Vec::with_capacity(self.forest.roots());
        for (id, element) in self.elements.iter().enumerate() {
            let root = self.forest.find(id);
            if slot[root] == UNSET {
                slot[root] = groups.len();
                groups.push(Vec::with_capacity(self.forest.set_size(root)));
            }
            groups[slot[root]].push(element);
        }
        debug!(
            elements = self.elements.len(),
            groups = groups.len(),
            "grouped components"
        );
        groups
    }

    fn intern(&mut self, item: T) -> usize {
        if let Some(&id) = self.index.get(&item) {
            return id;
        }
        let id = self.forest.push();
        self.index.insert(item.clone(), id);
        self.elements.push(item);
        id
    }

    fn id_of<Q>(&self, item: &Q) -> Result<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(item)
            .copied()
            .ok_or(UnionFindError::InvalidElement)
    }
}

impl<T: Eq + Hash + Clone> Extend<T> for DisjointSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for DisjointSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, T> IntoIterator for &'a DisjointSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
