/*!
# Tree, Path, and Forest Generators

Spanning structures over a caller-supplied vertex order:

- [`RandomTree`]: a random recursive tree: each vertex after the first is
  attached to a parent drawn uniformly from the vertices before it. The result
  is connected, cycle-free, and has exactly `n - 1` edges.
- [`RandomPath`]: the simple path through the vertices in the given order.
- [`RandomForest`]: the vertex sequence is split into contiguous blocks by
  [`partition_slice`](crate::utils::partition_slice) and a random tree is
  grown on each block, giving `n - c` edges across `c` trees.

All edge lists are shuffled before return so the input order does not leak
through edge positions.
*/

use itertools::Itertools;
use rand::seq::SliceRandom;

use crate::utils::{partition_slice, resolve_count};

use super::*;

/// Grows a random recursive tree over the vertex slice and shuffles its edges.
///
/// Shared by [`RandomTree`], [`RandomForest`], and
/// [`RandomComponent`](super::RandomComponent).
pub(super) fn random_tree<V, R>(vertices: &[V], rng: &mut R) -> EdgeList<V>
where
    V: Clone + Eq + Hash,
    R: Rng,
{
    let n = vertices.len();
    if n <= 1 {
        return Vec::new();
    }

    let mut edges = Vec::with_capacity(n - 1);
    for i in 1..n {
        let parent = rng.random_range(0..i);
        edges.push(Edge::random(
            vertices[i].clone(),
            vertices[parent].clone(),
            rng,
        ));
    }

    edges.shuffle(rng);
    edges
}

/// Generator for a uniformly random recursive tree on the given vertices.
///
/// # Example
/// ```
/// use graphgen::prelude::*;
///
/// let mut rng = rand::rng();
/// let edges = RandomTree::new().generate(&['a', 'b', 'c', 'd', 'e'], &mut rng)?;
/// assert_eq!(edges.len(), 4);
/// # Ok::<(), GenError>(())
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomTree;

impl RandomTree {
    /// Creates a new tree generator.
    pub fn new() -> Self {
        Self
    }
}

impl EdgeGenerator for RandomTree {
    fn generate<V, R>(&self, vertices: &[V], rng: &mut R) -> Result<EdgeList<V>, GenError>
    where
        V: Clone + Eq + Hash,
        R: Rng,
    {
        Ok(random_tree(vertices, rng))
    }
}

/// Generator for the simple path through the vertices in the given order.
///
/// Only the edge list order is random; the path itself is determined by the
/// input order.
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomPath;

impl RandomPath {
    /// Creates a new path generator.
    pub fn new() -> Self {
        Self
    }
}

impl EdgeGenerator for RandomPath {
    fn generate<V, R>(&self, vertices: &[V], rng: &mut R) -> Result<EdgeList<V>, GenError>
    where
        V: Clone + Eq + Hash,
        R: Rng,
    {
        let mut edges = Vec::with_capacity(vertices.len().saturating_sub(1));
        for (u, v) in vertices.iter().tuple_windows() {
            edges.push(Edge::random(u.clone(), v.clone(), rng));
        }

        edges.shuffle(rng);
        Ok(edges)
    }
}

/// Generator for a random forest with a controlled number of trees.
///
/// The vertex sequence is partitioned into contiguous blocks, one tree per
/// block. Component sizes are random but tied to the vertex order, not an
/// arbitrary vertex partition.
///
/// # Example
/// ```
/// use graphgen::prelude::*;
///
/// let mut rng = rand::rng();
/// let vertices: Vec<u32> = (0..12).collect();
///
/// // 4 trees over 12 vertices leave 8 edges.
/// let edges = RandomForest::new().components(4).generate(&vertices, &mut rng)?;
/// assert_eq!(edges.len(), 8);
/// # Ok::<(), GenError>(())
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomForest {
    components: Option<usize>,
}

impl RandomForest {
    /// Creates a new forest generator with a random number of trees.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of trees, clamped into `[1, n]` at generation time.
    /// When unset, the number of trees is drawn uniformly from `[1, n]`.
    pub fn components(mut self, num_components: usize) -> Self {
        self.components = Some(num_components);
        self
    }
}

impl EdgeGenerator for RandomForest {
    fn generate<V, R>(&self, vertices: &[V], rng: &mut R) -> Result<EdgeList<V>, GenError>
    where
        V: Clone + Eq + Hash,
        R: Rng,
    {
        let n = vertices.len();
        if n <= 1 {
            return Ok(Vec::new());
        }

        let num_components = resolve_count(self.components, 1, n, rng);

        let mut edges = Vec::with_capacity(n - num_components);
        for block in partition_slice(vertices, num_components, rng) {
            edges.extend(random_tree(block, rng));
        }

        edges.shuffle(rng);
        Ok(edges)
    }
}
