/*!
`graphgen` generates random combinatorial structures (trees, paths, forests,
connected components, general graphs, and bipartite graphs) for use as test
inputs to algorithm-judging systems.

# Representation

Vertices are **caller-supplied**: every generator takes a slice `&[V]` of
opaque identifiers (`V: Clone + Eq + Hash`) and never creates vertices of its
own. Edges are unordered pairs of distinct vertices, represented by the
tuple-struct [`Edge`](crate::edge::Edge); the stored orientation is chosen
uniformly at random when the edge is created and carries no meaning.
Generated structures are plain edge lists; no adjacency structure is built
or retained by the generators.

# Design

All generators are configurable structs following the *Builder* pattern: set
parameters with fluent methods (e.g. `.edges(m)`, `.max_edges(m)`), then call
[`generate`](crate::gens::EdgeGenerator::generate) with the vertex slice and a
random source. Every random draw goes through an explicit `&mut R: Rng`
parameter, so seeding, reproducibility, and concurrent use are entirely under
the caller's control.

At the core sits [`EdgeSampler`](crate::gens::EdgeSampler): it picks between
incremental rejection sampling (sparse requests) and enumerate-then-sample
(dense requests) so that neither regime degenerates, without materializing the
candidate space unless the requested count justifies it. The structure
generators ([`RandomTree`](crate::gens::RandomTree),
[`RandomForest`](crate::gens::RandomForest),
[`RandomComponent`](crate::gens::RandomComponent),
[`RandomGraph`](crate::gens::RandomGraph),
[`RandomBipartite`](crate::gens::RandomBipartite)) compose on top of it.

Out-of-range size parameters are silently clamped into the feasible range;
only the hard ceilings in [`gens`] fail, with a descriptive
[`GenError`](crate::error::GenError).

# Usage

There are *4* submodules you probably want to interact with:
- [`gens`] includes the random structure generators and the builder traits,
- [`algo`] includes the connected-components search used to validate generated
  structures,
- [`utils`] includes the random contiguous partitioner and shared clamping
  helpers,
- [`io`] includes the length-prefixed text formatting used to turn generated
  structures into judge input files.

In most use-cases, `use graphgen::prelude::*;` suffices for your needs.

```
use graphgen::prelude::*;

let mut rng = rand::rng();
let vertices: Vec<u32> = (0..10).collect();

// A connected graph on 10 vertices with exactly 14 edges.
let edges = RandomComponent::new().edges(14).generate(&vertices, &mut rng)?;
assert_eq!(edges.len(), 14);
# Ok::<(), graphgen::error::GenError>(())
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod utils;

/// `graphgen::prelude` includes the edge types, the error type, and all generators.
pub mod prelude {
    pub use super::{edge::*, error::*, gens::*};
}
