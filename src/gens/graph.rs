/*!
# General Graph Generator

[`RandomGraph`] is the top-level entry point for plain graphs: connected
requests delegate to [`RandomComponent`], unconstrained requests go straight to
the [`EdgeSampler`] with no exclusions. The number and size of connected
components in the unconstrained case are whatever the sampled edges produce.
*/

use super::*;

/// Generator for a general random graph, optionally connected.
///
/// The generator can be parameterized via:
/// - `.edges(m)` — exact number of edges (clamped by the delegate)
/// - `.connected(true)` — guarantee a single connected component
///
/// # Example
/// ```
/// use graphgen::prelude::*;
///
/// let mut rng = rand::rng();
/// let vertices: Vec<u32> = (0..8).collect();
///
/// let edges = RandomGraph::new().edges(5).connected(true).generate(&vertices, &mut rng)?;
/// // Connected graphs need at least n - 1 edges, so 5 clamps up to 7.
/// assert_eq!(edges.len(), 7);
/// # Ok::<(), GenError>(())
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomGraph {
    edges: Option<usize>,
    connected: bool,
}

impl RandomGraph {
    /// Creates a new graph generator: unconstrained, random edge count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the resulting graph to be connected (or not).
    pub fn connected(mut self, connected: bool) -> Self {
        self.connected = connected;
        self
    }
}

impl NumEdgesGen for RandomGraph {
    fn edges(mut self, m: usize) -> Self {
        self.edges = Some(m);
        self
    }
}

impl EdgeGenerator for RandomGraph {
    fn generate<V, R>(&self, vertices: &[V], rng: &mut R) -> Result<EdgeList<V>, GenError>
    where
        V: Clone + Eq + Hash,
        R: Rng,
    {
        if self.connected {
            let mut delegate = RandomComponent::new();
            if let Some(m) = self.edges {
                delegate = delegate.edges(m);
            }
            delegate.generate(vertices, rng)
        } else {
            let mut delegate = EdgeSampler::new();
            if let Some(m) = self.edges {
                delegate = delegate.count(m);
            }
            delegate.generate(vertices, rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use fxhash::FxHashSet;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use crate::algo::connected_components;

    use super::*;

    #[test]
    fn test_connected_graphs_have_one_component() {
        let rng = &mut Pcg64Mcg::seed_from_u64(40);
        let vertices: Vec<u32> = (0..15).collect();

        for requested in [0usize, 14, 20, 105] {
            let edges = RandomGraph::new()
                .edges(requested)
                .connected(true)
                .generate(&vertices, rng)
                .unwrap();

            assert_eq!(edges.len(), requested.clamp(14, 105));
            assert_eq!(connected_components(&vertices, &edges).len(), 1);
        }
    }

    #[test]
    fn test_unconstrained_graphs_hit_the_exact_count() {
        let rng = &mut Pcg64Mcg::seed_from_u64(41);
        let vertices: Vec<u32> = (0..15).collect();

        for requested in [0usize, 3, 50, 105, 1000] {
            let edges = RandomGraph::new().edges(requested).generate(&vertices, rng).unwrap();

            assert_eq!(edges.len(), requested.min(105));

            let mut pairs = FxHashSet::default();
            for &Edge(u, v) in &edges {
                assert_ne!(u, v);
                assert!(pairs.insert((u.min(v), u.max(v))));
            }
        }
    }

    #[test]
    fn test_unconstrained_graphs_may_be_disconnected() {
        let rng = &mut Pcg64Mcg::seed_from_u64(42);
        let vertices: Vec<u32> = (0..30).collect();

        // 3 edges on 30 vertices cannot connect the graph.
        let edges = RandomGraph::new().edges(3).generate(&vertices, rng).unwrap();
        assert!(connected_components(&vertices, &edges).len() > 1);
    }
}
