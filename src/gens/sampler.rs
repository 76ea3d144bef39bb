/*!
# Uniform Edge Sampling

[`EdgeSampler`] draws a uniformly random subset of edges on a vertex set,
optionally excluding a set of pre-existing edges (which neither count toward
the requested total nor may reappear in the result).

The sampler switches strategy on the **density** of the request, the ratio of
the resolved edge count to the maximum possible count:

- below [`ENUMERATION_DENSITY`], edges are collected by *incremental rejection
  sampling*: draw two random vertices, reject loops, duplicates, and excluded
  pairs, repeat. The candidate space is never materialized, and the acceptance
  probability of every draw stays above one half.
- at or above the threshold, all valid candidate pairs are *enumerated* and a
  uniform sample without replacement is taken. The enumeration cost is paid
  only when the requested sample is a large fraction of the space, where
  rejection sampling would thrash.

The enumeration path is guarded by [`ENUMERATION_VERTEX_CEILING`], and the
resolved edge count by [`EDGE_COUNT_CEILING`].
*/

use rand::seq::{index, SliceRandom};
use rand_distr::{Distribution, Uniform};

use crate::utils::resolve_count;

use super::*;

/// Generator for a uniform random subset of edges on a vertex set.
///
/// The generator can be parameterized via:
/// - `.count(m)` — exact number of edges (clamped into the feasible range)
/// - `.max_count(m)` — upper bound for a randomly drawn count
///
/// With neither set, the count is drawn uniformly from everything feasible.
///
/// # Example
/// ```
/// use graphgen::prelude::*;
///
/// let mut rng = rand::rng();
/// let vertices = ['a', 'b', 'c', 'd'];
///
/// let edges = EdgeSampler::new().count(3).generate(&vertices, &mut rng)?;
/// assert_eq!(edges.len(), 3);
/// # Ok::<(), GenError>(())
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct EdgeSampler {
    count: Option<usize>,
    max_count: Option<usize>,
}

impl EdgeSampler {
    /// Creates a new sampler with no count constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the exact number of edges to sample.
    ///
    /// The count is clamped into `[0, max_possible]` at generation time.
    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets the upper bound for a randomly drawn edge count.
    ///
    /// Only relevant when no exact count is set.
    pub fn max_count(mut self, max_count: usize) -> Self {
        self.max_count = Some(max_count);
        self
    }

    /// Samples edges on `vertices` avoiding every edge in `exclude`.
    ///
    /// Excluded edges do not count toward the requested total. The result is
    /// shuffled and free of duplicates and self-loops.
    ///
    /// # Errors
    /// - [`GenError::EdgeCountCeiling`] if the resolved count exceeds
    ///   [`EDGE_COUNT_CEILING`]
    /// - [`GenError::EnumerationCeiling`] if a dense request covers more than
    ///   [`ENUMERATION_VERTEX_CEILING`] vertices
    pub fn sample_excluding<V, R>(
        &self,
        vertices: &[V],
        exclude: &EdgeSet<V>,
        rng: &mut R,
    ) -> Result<EdgeList<V>, GenError>
    where
        V: Clone + Eq + Hash,
        R: Rng,
    {
        let n = vertices.len();
        if n <= 1 {
            return Ok(Vec::new());
        }

        let pair_space = n as u64 * (n as u64 - 1) / 2;
        let max_possible = pair_space.saturating_sub(exclude.len() as u64);

        let max_count = match self.max_count {
            Some(m) => (m as u64).min(max_possible),
            None => max_possible,
        };
        let count = resolve_count(self.count.map(|c| c as u64), 0, max_count, rng);

        if count == 0 {
            return Ok(Vec::new());
        }
        if count > EDGE_COUNT_CEILING as u64 {
            return Err(GenError::EdgeCountCeiling {
                requested: count as usize,
                ceiling: EDGE_COUNT_CEILING,
            });
        }
        let count = count as usize;

        if (count as f64) < ENUMERATION_DENSITY * max_possible as f64 {
            Ok(sample_by_rejection(vertices, exclude, count, rng))
        } else {
            if n > ENUMERATION_VERTEX_CEILING {
                return Err(GenError::EnumerationCeiling {
                    vertices: n,
                    ceiling: ENUMERATION_VERTEX_CEILING,
                });
            }
            Ok(sample_by_enumeration(vertices, exclude, count, rng))
        }
    }
}

impl EdgeGenerator for EdgeSampler {
    fn generate<V, R>(&self, vertices: &[V], rng: &mut R) -> Result<EdgeList<V>, GenError>
    where
        V: Clone + Eq + Hash,
        R: Rng,
    {
        self.sample_excluding(vertices, &EdgeSet::new(), rng)
    }
}

/// Collects `count` distinct edges by drawing random endpoint pairs until
/// enough draws survive the loop, duplicate, and exclusion checks.
fn sample_by_rejection<V, R>(
    vertices: &[V],
    exclude: &EdgeSet<V>,
    count: usize,
    rng: &mut R,
) -> EdgeList<V>
where
    V: Clone + Eq + Hash,
    R: Rng,
{
    let index_gen = Uniform::new(0, vertices.len()).unwrap();

    let mut chosen = EdgeSet::with_capacity(count);
    while chosen.len() < count {
        let u = &vertices[index_gen.sample(rng)];
        let v = &vertices[index_gen.sample(rng)];

        if u == v {
            continue;
        }
        if chosen.contains_pair(u, v) || exclude.contains_pair(u, v) {
            continue;
        }

        chosen.insert(Edge::random(u.clone(), v.clone(), rng));
    }

    let mut edges: EdgeList<V> = chosen.into_iter().collect();
    edges.shuffle(rng);
    edges
}

/// Materializes every candidate pair not in `exclude` and draws a uniform
/// sample of size `count` without replacement.
fn sample_by_enumeration<V, R>(
    vertices: &[V],
    exclude: &EdgeSet<V>,
    count: usize,
    rng: &mut R,
) -> EdgeList<V>
where
    V: Clone + Eq + Hash,
    R: Rng,
{
    let mut options = Vec::new();
    for (i, u) in vertices.iter().enumerate() {
        for v in &vertices[i + 1..] {
            if exclude.contains_pair(u, v) {
                continue;
            }
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

#[cfg(test)]
mod tests {
    use fxhash::FxHashSet;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    /// Collects the endpoint pairs with the smaller vertex first, asserting
    /// there are no self-loops or duplicate unordered pairs on the way.
    fn sorted_pairs(edges: &[Edge<u32>]) -> FxHashSet<(u32, u32)> {
        let mut pairs = FxHashSet::default();
        for &Edge(u, v) in edges {
            assert_ne!(u, v, "self-loop generated");
            assert!(pairs.insert((u.min(v), u.max(v))), "duplicate edge ({u},{v})");
        }
        pairs
    }

    fn all_pairs(n: u32) -> FxHashSet<(u32, u32)> {
        (0..n).tuple_combinations().collect()
    }

    #[test]
    fn test_degenerate_inputs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(10);

        let empty: [u32; 0] = [];
        assert!(EdgeSampler::new().generate(&empty, rng).unwrap().is_empty());
        assert!(EdgeSampler::new().generate(&[5u32], rng).unwrap().is_empty());
        assert!(EdgeSampler::new()
            .count(0)
            .generate(&[1u32, 2, 3], rng)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_exact_counts_without_duplicates() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for n in [2u32, 5, 10, 30] {
            let vertices: Vec<u32> = (0..n).collect();
            let possible = (n * (n - 1) / 2) as usize;

            for count in [1, possible / 3, possible / 2, possible] {
                let edges = EdgeSampler::new().count(count).generate(&vertices, rng).unwrap();

                assert_eq!(edges.len(), count);
                sorted_pairs(&edges);
            }
        }
    }

    #[test]
    fn test_count_is_clamped_to_possible() {
        let rng = &mut Pcg64Mcg::seed_from_u64(12);
        let vertices: Vec<u32> = (0..5).collect();

        let edges = EdgeSampler::new().count(1000).generate(&vertices, rng).unwrap();

        assert_eq!(edges.len(), 10);
        assert_eq!(sorted_pairs(&edges), all_pairs(5));
    }

    #[test]
    fn test_maximum_count_returns_every_edge_once() {
        let rng = &mut Pcg64Mcg::seed_from_u64(13);
        let vertices: Vec<u32> = (0..6).collect();

        let edges = EdgeSampler::new().count(15).generate(&vertices, rng).unwrap();

        assert_eq!(edges.len(), 15);
        assert_eq!(sorted_pairs(&edges), all_pairs(6));
    }

    #[test]
    fn test_max_count_bounds_random_draws() {
        let rng = &mut Pcg64Mcg::seed_from_u64(14);
        let vertices: Vec<u32> = (0..10).collect();

        for _ in 0..50 {
            let edges = EdgeSampler::new().max_count(4).generate(&vertices, rng).unwrap();
            assert!(edges.len() <= 4);
            sorted_pairs(&edges);
        }
    }

    #[test]
    fn test_exclusion_is_respected() {
        let rng = &mut Pcg64Mcg::seed_from_u64(15);
        let vertices: Vec<u32> = (0..8).collect();

        let exclude: EdgeSet<u32> = [Edge(0, 1), Edge(2, 3), Edge(7, 6)].into_iter().collect();

        for count in [5, 10, 25] {
            let edges = EdgeSampler::new()
                .count(count)
                .sample_excluding(&vertices, &exclude, rng)
                .unwrap();

            assert_eq!(edges.len(), count);
            for Edge(u, v) in &edges {
                assert!(!exclude.contains_pair(u, v));
            }
            sorted_pairs(&edges);
        }

        // Excluded edges reduce what is possible: C(8,2) = 28, minus 3.
        let edges = EdgeSampler::new()
            .count(1000)
            .sample_excluding(&vertices, &exclude, rng)
            .unwrap();
        assert_eq!(edges.len(), 25);
    }

    #[test]
    fn test_both_strategies_support_every_edge() {
        let rng = &mut Pcg64Mcg::seed_from_u64(16);
        let vertices: Vec<u32> = (0..5).collect();

        // Density 0.4 uses rejection, density 0.6 enumeration; over repeated
        // trials each strategy must reach every one of the 10 candidate edges.
        for count in [4usize, 6] {
            let mut seen = FxHashSet::default();
            for _ in 0..200 {
                let edges = EdgeSampler::new().count(count).generate(&vertices, rng).unwrap();
                assert_eq!(edges.len(), count);
                seen.extend(sorted_pairs(&edges));
            }
            assert_eq!(seen, all_pairs(5));
        }
    }

    #[test]
    fn test_edge_count_ceiling() {
        let rng = &mut Pcg64Mcg::seed_from_u64(17);
        let vertices: Vec<u32> = (0..5_000).collect();

        let result = EdgeSampler::new()
            .count(EDGE_COUNT_CEILING + 1)
            .generate(&vertices, rng);

        assert_eq!(
            result.unwrap_err(),
            GenError::EdgeCountCeiling {
                requested: EDGE_COUNT_CEILING + 1,
                ceiling: EDGE_COUNT_CEILING,
            }
        );
    }
}
