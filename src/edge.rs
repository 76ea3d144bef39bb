/*!
# Edge Representation

An [`Edge`] is an unordered pair of distinct, caller-supplied vertices. We keep
the plain tuple layout `Edge(u, v)` but give the stored orientation no meaning:
generators create edges via [`Edge::random`], which flips a fair coin
for the orientation, and all containment checks go through [`EdgeSet`], which
treats `(u, v)` and `(v, u)` as the same edge.

Vertices are opaque (`V: Clone + Eq + Hash`), so there is no total order to
normalize an edge by; unordered semantics live in the set, not the pair.
*/

use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

use fxhash::FxHashSet;
use rand::Rng;

/// An edge is defined by two vertices/endpoints.
/// The stored orientation is an artifact of generation and carries no meaning.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<V>(pub V, pub V);

/// Generated structures are plain edge lists.
pub type EdgeList<V> = Vec<Edge<V>>;

impl<V: Display> Display for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl<V: Debug> Debug for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?},{:?})", self.0, self.1)
    }
}

impl<V> Edge<V> {
    /// Creates an edge between the two vertices with uniformly random orientation.
    pub fn random<R>(u: V, v: V, rng: &mut R) -> Self
    where
        R: Rng,
    {
        if rng.random_bool(0.5) {
            Edge(u, v)
        } else {
            Edge(v, u)
        }
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(self) -> Self {
        Edge(self.1, self.0)
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool
    where
        V: PartialEq,
    {
        self.0 == self.1
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from(value: (V, V)) -> Self {
        Edge(value.0, value.1)
    }
}

impl<V: Clone> From<&(V, V)> for Edge<V> {
    fn from(value: &(V, V)) -> Self {
        Edge(value.0.clone(), value.1.clone())
    }
}

impl<V: Clone> From<&Edge<V>> for Edge<V> {
    fn from(value: &Edge<V>) -> Self {
        value.clone()
    }
}

/// A set of edges with **unordered-pair** semantics: `(u, v)` and `(v, u)` are
/// the same edge, regardless of the orientation they were stored with.
///
/// Used both as the accumulator of the sampling loops and as the exclusion
/// constraint for pre-existing edges.
#[derive(Clone)]
pub struct EdgeSet<V> {
    edges: FxHashSet<Edge<V>>,
}

impl<V> EdgeSet<V>
where
    V: Clone + Eq + Hash,
{
    /// Creates an empty edge set.
    pub fn new() -> Self {
        Self {
            edges: FxHashSet::default(),
        }
    }

    /// Creates an empty edge set with space for `capacity` edges.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Number of edges in the set.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the set contains no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns true if the set has an edge between the given vertices,
    /// in either orientation.
    pub fn contains_pair(&self, u: &V, v: &V) -> bool {
        self.edges.contains(&Edge(u.clone(), v.clone()))
            || self.edges.contains(&Edge(v.clone(), u.clone()))
    }

    /// Returns true if the set contains this edge in either orientation.
    pub fn contains(&self, edge: &Edge<V>) -> bool {
        self.contains_pair(&edge.0, &edge.1)
    }

    /// Inserts the edge unless either orientation is already present.
    /// Returns true if the edge was inserted.
    pub fn insert(&mut self, edge: Edge<V>) -> bool {
        if self.contains(&edge) {
            return false;
        }
        self.edges.insert(edge)
    }

    /// Iterates over the stored edges in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Edge<V>> {
        self.edges.iter()
    }
}

impl<V> Default for EdgeSet<V>
where
    V: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<Edge<V>> for EdgeSet<V>
where
    V: Clone + Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = Edge<V>>>(iter: I) -> Self {
        let mut set = Self::new();
        for edge in iter {
            set.insert(edge);
        }
        set
    }
}

impl<V> IntoIterator for EdgeSet<V> {
    type Item = Edge<V>;
    type IntoIter = std::collections::hash_set::IntoIter<Edge<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn test_random_orientation() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        let (mut forward, mut backward) = (0usize, 0usize);
        for _ in 0..100 {
            match Edge::random(0u32, 1u32, rng) {
                Edge(0, 1) => forward += 1,
                Edge(1, 0) => backward += 1,
                e => panic!("unexpected edge {e:?}"),
            }
        }

        assert!(forward > 0);
        assert!(backward > 0);
        assert_eq!(forward + backward, 100);
    }

    #[test]
    fn test_edge_set_is_orientation_insensitive() {
        let mut set = EdgeSet::new();

        assert!(set.insert(Edge('a', 'b')));
        assert!(!set.insert(Edge('b', 'a')));
        assert_eq!(set.len(), 1);

        assert!(set.contains_pair(&'a', &'b'));
        assert!(set.contains_pair(&'b', &'a'));
        assert!(set.contains(&Edge('b', 'a')));
        assert!(!set.contains_pair(&'a', &'c'));

        assert!(set.insert(Edge('b', 'c')));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_edge_set_from_iter_dedups() {
        let set: EdgeSet<u32> = [Edge(0, 1), Edge(1, 0), Edge(1, 2)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_loops_and_reverse() {
        assert!(Edge(3u32, 3u32).is_loop());
        assert!(!Edge(3u32, 4u32).is_loop());
        assert_eq!(Edge(3u32, 4u32).reverse(), Edge(4, 3));
    }
}
