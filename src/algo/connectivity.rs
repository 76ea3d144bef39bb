//! Connected components over a plain `(vertices, edges)` pair.

use std::hash::Hash;

use fxhash::{FxHashMap, FxHashSet};

use crate::edge::Edge;

/// Splits the graph into its connected components.
///
/// Each component is a list of vertices; isolated vertices form singleton
/// components. Components are emitted in order of their first vertex in
/// `vertices`. Edges with endpoints outside `vertices` are the caller's
/// mistake and make those endpoints show up as extra component members.
///
/// # Example
/// ```
/// use graphgen::{algo::connected_components, edge::Edge};
///
/// let vertices = [0u32, 1, 2, 3];
/// let edges = [Edge(3, 0), Edge(1, 2)];
///
/// let components = connected_components(&vertices, &edges);
/// assert_eq!(components.len(), 2);
/// ```
pub fn connected_components<V>(vertices: &[V], edges: &[Edge<V>]) -> Vec<Vec<V>>
where
    V: Clone + Eq + Hash,
{
    let mut neighbors: FxHashMap<&V, Vec<&V>> = FxHashMap::default();
    for Edge(u, v) in edges {
        neighbors.entry(u).or_default().push(v);
        neighbors.entry(v).or_default().push(u);
    }

    let mut visited: FxHashSet<&V> = FxHashSet::default();
    let mut components = Vec::new();

    for root in vertices {
        if visited.contains(root) {
            continue;
        }

        let mut component = Vec::new();
        let mut stack = vec![root];
        while let Some(u) = stack.pop() {
            if !visited.insert(u) {
                continue;
            }
            component.push(u.clone());
            if let Some(adjacent) = neighbors.get(u) {
                stack.extend(adjacent.iter().copied());
            }
        }

        components.push(component);
    }

    components
}

/// Returns true if the graph has at most one connected component.
pub fn is_connected<V>(vertices: &[V], edges: &[Edge<V>]) -> bool
where
    V: Clone + Eq + Hash,
{
    connected_components(vertices, edges).len() <= 1
}
