/*!
# Utilities

Small helpers shared by all generators:
- [`resolve_count`]: the single clamp-or-draw rule every size parameter goes
  through, so that no two entry points diverge in their clamping behavior,
- [`partition_ranges`](self::partition::partition_ranges) /
  [`partition_slice`](self::partition::partition_slice): splitting an ordered
  sequence into contiguous, non-empty, covering chunks at uniformly random
  break points.
*/

use rand::{distr::uniform::SampleUniform, Rng};

pub mod partition;

pub use partition::{partition_ranges, partition_slice};

/// Resolves a requested size into the feasible range `[lo, hi]`.
///
/// A given value is clamped into the range; an absent value is drawn uniformly
/// from it. Callers must establish `lo <= hi` beforehand.
///
/// # Example
/// ```
/// use graphgen::utils::resolve_count;
///
/// let mut rng = rand::rng();
/// assert_eq!(resolve_count(Some(99), 0, 10, &mut rng), 10);
/// assert_eq!(resolve_count(Some(5), 0, 10, &mut rng), 5);
///
/// let drawn = resolve_count(None, 3usize, 7, &mut rng);
/// assert!((3..=7).contains(&drawn));
/// ```
pub fn resolve_count<T, R>(requested: Option<T>, lo: T, hi: T, rng: &mut R) -> T
where
    T: Copy + Ord + SampleUniform,
    R: Rng,
{
    debug_assert!(lo <= hi);
    match requested {
        Some(value) => value.clamp(lo, hi),
        None => rng.random_range(lo..=hi),
    }
}
