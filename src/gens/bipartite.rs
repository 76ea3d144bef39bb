/*!
# Bipartite Graph Generator

[`RandomBipartite`] splits the vertex set into a **left** and a **right** side
(the left side is a uniformly random subset, not a contiguous block) and
samples cross edges from the `left × right` candidate space. The same density
switch as in the [`EdgeSampler`](super::EdgeSampler) applies, restricted to the
cross space: sparse requests use rejection sampling over random
(left, right) endpoint pairs, dense requests enumerate the full cross space and
take a uniform sample, guarded by
[`EDGE_COUNT_CEILING`](super::EDGE_COUNT_CEILING) on the candidate count.

Cross edges can never be loops or coincide across orientations, so the
rejection loop only has to filter duplicates.
*/

use rand::seq::{index, SliceRandom};
use rand_distr::{Distribution, Uniform};

use crate::utils::resolve_count;

use super::*;

/// A bipartite graph together with the vertex split it was generated on.
///
/// `left` and `right` partition the input vertex set; every edge joins a left
/// vertex with a right vertex (in arbitrary stored orientation).
#[derive(Debug, Clone)]
pub struct Bipartition<V> {
    /// Vertices on the left side, in random order.
    pub left: Vec<V>,
    /// Vertices on the right side, in random order.
    pub right: Vec<V>,
    /// The sampled cross edges, shuffled.
    pub edges: EdgeList<V>,
}

/// Generator for a random bipartite graph over a random vertex split.
///
/// The generator can be parameterized via:
/// - `.edges(m)` — exact number of cross edges, clamped into the cross space
/// - `.max_edges(m)` — upper bound for a randomly drawn count
/// - `.left_size(k)` — size of the left side, clamped into `[1, n - 1]`;
///   drawn uniformly when unset
///
/// # Example
/// ```
/// use graphgen::prelude::*;
///
/// let mut rng = rand::rng();
/// let vertices: Vec<u32> = (1..=6).collect();
///
/// let parts = RandomBipartite::new().left_size(2).generate_parts(&vertices, &mut rng)?;
/// assert_eq!(parts.left.len(), 2);
/// assert_eq!(parts.right.len(), 4);
/// assert!(parts.edges.len() <= 8);
/// # Ok::<(), GenError>(())
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomBipartite {
    edges: Option<usize>,
    max_edges: Option<usize>,
    left_size: Option<usize>,
}

impl RandomBipartite {
    /// Creates a new bipartite generator with a random split and edge count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the size of the left side, clamped into `[1, n - 1]` at
    /// generation time.
    pub fn left_size(mut self, left_size: usize) -> Self {
        self.left_size = Some(left_size);
        self
    }

    /// Generates the graph and returns the vertex split alongside the edges.
    ///
    /// With `n <= 1` vertices no split into two non-empty sides exists; the
    /// result carries all vertices on the left and no edges.
    ///
    /// # Errors
    /// [`GenError::BipartiteEnumerationCeiling`] if a dense request would
    /// enumerate more than [`EDGE_COUNT_CEILING`] candidate cross edges.
    pub fn generate_parts<V, R>(
        &self,
        vertices: &[V],
        rng: &mut R,
    ) -> Result<Bipartition<V>, GenError>
    where
        V: Clone + Eq + Hash,
        R: Rng,
    {
        let n = vertices.len();
        if n <= 1 {
            return Ok(Bipartition {
                left: vertices.to_vec(),
                right: Vec::new(),
                edges: Vec::new(),
            });
        }

        let left_size = resolve_count(self.left_size, 1, n - 1, rng);

        // Uniformly random subset for the left side, complement on the right.
        let mut on_left = vec![false; n];
        for i in index::sample(rng, n, left_size) {
            on_left[i] = true;
        }

        let mut left = Vec::with_capacity(left_size);
        let mut right = Vec::with_capacity(n - left_size);
        for (i, v) in vertices.iter().enumerate() {
            if on_left[i] {
                left.push(v.clone());
            } else {
                right.push(v.clone());
            }
        }
        left.shuffle(rng);
        right.shuffle(rng);

        let max_possible = left.len() as u64 * right.len() as u64;
        let max_edges = match self.max_edges {
            Some(m) => (m as u64).min(max_possible),
            None => max_possible,
        };
        let num_edges = resolve_count(self.edges.map(|m| m as u64), 0, max_edges, rng) as usize;

        let edges = if (num_edges as f64) < ENUMERATION_DENSITY * max_possible as f64 {
            cross_by_rejection(&left, &right, num_edges, rng)
        } else {
            if max_possible > EDGE_COUNT_CEILING as u64 {
                return Err(GenError::BipartiteEnumerationCeiling {
                    candidates: max_possible,
                    ceiling: EDGE_COUNT_CEILING,
                });
            }
            cross_by_enumeration(&left, &right, num_edges, rng)
        };

        Ok(Bipartition { left, right, edges })
    }
}

impl NumEdgesGen for RandomBipartite {
    fn edges(mut self, m: usize) -> Self {
        self.edges = Some(m);
        self
    }
}

impl MaxEdgesGen for RandomBipartite {
    fn max_edges(mut self, m: usize) -> Self {
        self.max_edges = Some(m);
        self
    }
}

impl EdgeGenerator for RandomBipartite {
    fn generate<V, R>(&self, vertices: &[V], rng: &mut R) -> Result<EdgeList<V>, GenError>
    where
        V: Clone + Eq + Hash,
        R: Rng,
    {
        self.generate_parts(vertices, rng).map(|parts| parts.edges)
    }
}

/// Collects `count` distinct cross edges by drawing random (left, right)
/// endpoint pairs until enough draws survive the duplicate check.
fn cross_by_rejection<V, R>(left: &[V], right: &[V], count: usize, rng: &mut R) -> EdgeList<V>
where
    V: Clone + Eq + Hash,
    R: Rng,
{
    if count == 0 {
        return Vec::new();
    }

    let left_gen = Uniform::new(0, left.len()).unwrap();
    let right_gen = Uniform::new(0, right.len()).unwrap();

    let mut chosen = EdgeSet::with_capacity(count);
    while chosen.len() < count {
        let u = &left[left_gen.sample(rng)];
        let v = &right[right_gen.sample(rng)];

        if chosen.contains_pair(u, v) {
            continue;
        }
        chosen.insert(Edge::random(u.clone(), v.clone(), rng));
    }

    let mut edges: EdgeList<V> = chosen.into_iter().collect();
    edges.shuffle(rng);
    edges
}

/// Materializes the full `left × right` cross space and draws a uniform sample
/// of size `count` without replacement.
fn cross_by_enumeration<V, R>(left: &[V], right: &[V], count: usize, rng: &mut R) -> EdgeList<V>
where
    V: Clone + Eq + Hash,
    R: Rng,
{
    let mut options = Vec::with_capacity(left.len() * right.len());
    for u in left {
        for v in right {
            options.push(Edge::random(u.clone(), v.clone(), rng));
        }
    }

    let mut edges: EdgeList<V> = index::sample(rng, options.len(), count)
        .into_iter()
        .map(|i| options[i].clone())
        .collect();
    edges.shuffle(rng);
    edges
}
