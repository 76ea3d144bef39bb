/*!
# Random Structure Generators

This module provides a suite of builder-style generators for random
combinatorial structures on a caller-supplied vertex set.

Each generator allows parameterized control over structural properties (number
of edges, number of components, side sizes) and produces a shuffled edge list.
The typical usage workflow is:

1. Create a generator instance (e.g. `RandomComponent::new()`).
2. Set parameters using the builder methods (e.g. `.edges(m)`).
3. Generate edges via [`EdgeGenerator::generate`] with the vertex slice and a
   random source.

Supported structures:
- [`EdgeSampler`]: a uniform random subset of edges, with an optional
  exclusion set; the engine underneath everything else
- [`RandomTree`] / [`RandomPath`]: spanning trees and paths
- [`RandomForest`]: a forest with a controlled number of trees over contiguous
  vertex blocks
- [`RandomComponent`]: a connected graph with a controlled edge count
- [`RandomGraph`]: a general graph, optionally connected
- [`RandomBipartite`]: a bipartite graph over a random vertex split

Every size parameter is clamped into its feasible range before use; only the
hard ceilings below make a call fail.
*/

use std::hash::Hash;

use rand::Rng;

use crate::{
    edge::{Edge, EdgeList, EdgeSet},
    error::GenError,
};

mod bipartite;
mod component;
mod graph;
mod sampler;
mod tree;

pub use bipartite::*;
pub use component::*;
pub use graph::*;
pub use sampler::*;
pub use tree::*;

/// Hard ceiling on the number of edges a single generation call may produce,
/// and on the bipartite cross-edge candidate space.
pub const EDGE_COUNT_CEILING: usize = 10_000_000;

/// Hard ceiling on the number of vertices for which the full pair space may be
/// enumerated.
pub const ENUMERATION_VERTEX_CEILING: usize = 10_000;

/// Density (requested count over maximum possible count) at or above which
/// sampling switches from incremental rejection to enumerate-then-sample.
///
/// Below the threshold, the acceptance probability of a rejection draw stays
/// above one half, so the expected number of draws per edge is bounded by a
/// small constant. The exact crossover is a tunable constant, not an
/// empirically optimal one.
pub const ENUMERATION_DENSITY: f64 = 0.5;

/// Trait for generators that allow setting an exact number of edges.
///
/// Allows a fluent interface when configuring generators.
pub trait NumEdgesGen {
    /// Sets the exact number of edges to generate.
    fn edges(self, m: usize) -> Self;
}

/// Trait for generators that allow bounding the number of edges from above.
///
/// The bound only matters when no exact count is set: the count is then drawn
/// uniformly at random up to the bound.
pub trait MaxEdgesGen {
    /// Sets the upper bound on the number of edges to generate.
    fn max_edges(self, m: usize) -> Self;
}

/// General trait for a configurable random structure generator.
///
/// Generation is a pure function of the configured parameters, the vertex
/// slice, and the random source; no state is held across calls. The returned
/// edge list is shuffled, so neither sampling strategy leaks positional bias
/// into downstream consumers.
pub trait EdgeGenerator {
    /// Generates a shuffled list of random edges on the given vertices.
    ///
    /// # Errors
    /// Fails if the resolved request exceeds one of the hard ceilings
    /// ([`EDGE_COUNT_CEILING`], [`ENUMERATION_VERTEX_CEILING`]).
    fn generate<V, R>(&self, vertices: &[V], rng: &mut R) -> Result<EdgeList<V>, GenError>
    where
        V: Clone + Eq + Hash,
        R: Rng;
}
