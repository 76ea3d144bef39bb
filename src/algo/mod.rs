/*!
# Graph Algorithms

Algorithms consuming generated structures. Generators return plain edge lists
without adjacency information, so everything here builds its own transient
adjacency from the `(vertices, edges)` pair it is given.

Currently provided:
- [`connected_components`] / [`is_connected`]: the search used to validate
  connectivity of generated structures.
*/

mod connectivity;

pub use connectivity::*;
