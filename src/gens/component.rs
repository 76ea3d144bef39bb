/*!
# Connected Component Generator

[`RandomComponent`] builds a connected graph in two steps: grow a random
spanning tree over all vertices, then hand the tree edges to the
[`EdgeSampler`] as an exclusion set and sample the remaining edges from the
untouched pairs. The exclusion guarantees the extra edges never duplicate a
tree edge, so the resolved edge count is hit exactly.
*/

use rand::seq::SliceRandom;

use crate::utils::resolve_count;

use super::{tree::random_tree, *};

/// Generator for a connected graph with a controlled edge count.
///
/// The generator can be parameterized via:
/// - `.edges(m)` — exact number of edges, clamped into `[n - 1, n(n-1)/2]`
/// - `.max_edges(m)` — upper bound for a randomly drawn count
///
/// With neither set, the count is drawn uniformly from everything a connected
/// graph on `n` vertices allows.
///
/// # Example
/// ```
/// use graphgen::prelude::*;
///
/// let mut rng = rand::rng();
/// let vertices: Vec<u32> = (1..=10).collect();
///
/// let edges = RandomComponent::new().edges(8).generate(&vertices, &mut rng)?;
/// // 8 requested edges clamp up to the spanning-tree minimum of 9.
/// assert_eq!(edges.len(), 9);
/// # Ok::<(), GenError>(())
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomComponent {
    edges: Option<usize>,
    max_edges: Option<usize>,
}

impl RandomComponent {
    /// Creates a new component generator with a random edge count.
    pub fn new() -> Self {
        Self::default()
    }
}

impl NumEdgesGen for RandomComponent {
    fn edges(mut self, m: usize) -> Self {
        self.edges = Some(m);
        self
    }
}

impl MaxEdgesGen for RandomComponent {
    fn max_edges(mut self, m: usize) -> Self {
        self.max_edges = Some(m);
        self
    }
}

impl EdgeGenerator for RandomComponent {
    fn generate<V, R>(&self, vertices: &[V], rng: &mut R) -> Result<EdgeList<V>, GenError>
    where
        V: Clone + Eq + Hash,
        R: Rng,
    {
        let n = vertices.len();
        if n <= 1 {
            return Ok(Vec::new());
        }

        let spanning = n as u64 - 1;
        let pair_space = n as u64 * (n as u64 - 1) / 2;

        let max_edges = match self.max_edges {
            Some(m) => (m as u64).clamp(spanning, pair_space),
            None => pair_space,
        };
        let num_edges =
            resolve_count(self.edges.map(|m| m as u64), spanning, max_edges, rng) as usize;

        if num_edges > EDGE_COUNT_CEILING {
            return Err(GenError::EdgeCountCeiling {
                requested: num_edges,
                ceiling: EDGE_COUNT_CEILING,
            });
        }

        let tree = random_tree(vertices, rng);
        let tree_set: EdgeSet<V> = tree.iter().cloned().collect();

        let mut edges = EdgeSampler::new()
            .count(num_edges - (n - 1))
            .sample_excluding(vertices, &tree_set, rng)?;
        edges.extend(tree);
        edges.shuffle(rng);
        Ok(edges)
    }
}
