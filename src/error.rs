//! Precondition failures raised by the generators.
//!
//! Out-of-range size parameters are *clamped*, never rejected; only the hard
//! ceilings in [`gens`](crate::gens) produce an error. Every failure is a
//! deterministic function of the input sizes and happens before any edges are
//! returned.

use thiserror::Error;

/// Errors raised when a generation request exceeds one of the hard ceilings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenError {
    /// The (clamped) number of edges to generate exceeds
    /// [`EDGE_COUNT_CEILING`](crate::gens::EDGE_COUNT_CEILING).
    #[error("generating {requested} edges exceeds the ceiling of {ceiling} edges per call")]
    EdgeCountCeiling {
        /// The resolved edge count of the request.
        requested: usize,
        /// The ceiling it ran into.
        ceiling: usize,
    },

    /// A dense request would enumerate all vertex pairs of more than
    /// [`ENUMERATION_VERTEX_CEILING`](crate::gens::ENUMERATION_VERTEX_CEILING)
    /// vertices.
    #[error("enumerating all vertex pairs of {vertices} vertices exceeds the ceiling of {ceiling} vertices")]
    EnumerationCeiling {
        /// Number of vertices the request covers.
        vertices: usize,
        /// The ceiling it ran into.
        ceiling: usize,
    },

    /// A dense bipartite request would enumerate a cross-edge candidate space
    /// larger than [`EDGE_COUNT_CEILING`](crate::gens::EDGE_COUNT_CEILING).
    #[error("enumerating {candidates} candidate cross edges exceeds the ceiling of {ceiling}")]
    BipartiteEnumerationCeiling {
        /// Size of the left times right candidate space.
        candidates: u64,
        /// The ceiling it ran into.
        ceiling: usize,
    },
}
