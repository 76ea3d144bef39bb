/*!
# Random Contiguous Partitions

Splits an ordered sequence into a given number of contiguous, non-empty chunks
whose union is the whole sequence. The break points are chosen uniformly at
random among all valid splits, so every composition of the sequence length into
`num_chunks` positive parts is equally likely.

Used by [`RandomForest`](crate::gens::RandomForest) to assign vertices to the
trees of a forest.
*/

use std::ops::Range;

use rand::{seq::index, Rng};

/// Splits `0..len` into `num_chunks` sorted, contiguous, non-empty, covering
/// half-open ranges with uniformly random break points.
///
/// Returns an empty list if `num_chunks` is `0` or exceeds `len`.
///
/// # Example
/// ```
/// use graphgen::utils::partition_ranges;
///
/// let mut rng = rand::rng();
/// let chunks = partition_ranges(10, 3, &mut rng);
///
/// assert_eq!(chunks.len(), 3);
/// assert_eq!(chunks[0].start, 0);
/// assert_eq!(chunks[2].end, 10);
/// ```
pub fn partition_ranges<R>(len: usize, num_chunks: usize, rng: &mut R) -> Vec<Range<usize>>
where
    R: Rng,
{
    if num_chunks == 0 || num_chunks > len {
        return Vec::new();
    }

    // Choose `num_chunks - 1` of the `len - 1` positions between elements as
    // break points; each break point is the exclusive end of a chunk.
    let mut breaks: Vec<usize> = index::sample(rng, len - 1, num_chunks - 1)
        .into_iter()
        .map(|pos| pos + 1)
        .collect();
    breaks.sort_unstable();
    breaks.push(len);

    let mut ranges = Vec::with_capacity(num_chunks);
    let mut start = 0;
    for end in breaks {
        ranges.push(start..end);
        start = end;
    }
    ranges
}

/// Splits a slice into `num_chunks` contiguous sub-slices per [`partition_ranges`].
pub fn partition_slice<'a, T, R>(slice: &'a [T], num_chunks: usize, rng: &mut R) -> Vec<&'a [T]>
where
    R: Rng,
{
    partition_ranges(slice.len(), num_chunks, rng)
        .into_iter()
        .map(|range| &slice[range])
        .collect()
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn test_degenerate_requests() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);

        assert!(partition_ranges(10, 0, rng).is_empty());
        assert!(partition_ranges(10, 11, rng).is_empty());
        assert!(partition_ranges(0, 1, rng).is_empty());
    }

    #[test]
    fn test_chunks_are_contiguous_and_covering() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for len in [1usize, 2, 5, 10, 64] {
            for num_chunks in 1..=len {
                for _ in 0..10 {
                    let chunks = partition_ranges(len, num_chunks, rng);

                    assert_eq!(chunks.len(), num_chunks);
                    assert_eq!(chunks[0].start, 0);
                    assert_eq!(chunks[num_chunks - 1].end, len);

                    for chunk in &chunks {
                        assert!(!chunk.is_empty());
                    }
                    for (prev, next) in chunks.iter().tuple_windows() {
                        assert_eq!(prev.end, next.start);
                    }
                }
            }
        }
    }

    #[test]
    fn test_three_chunks_of_ten() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);
        let values: Vec<u32> = (0..10).collect();

        let chunks = partition_slice(&values, 3, rng);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks.iter().map(|c| c.len()).sum::<usize>(), 10);
        assert_eq!(chunks.concat(), values);
    }

    #[test]
    fn test_singleton_chunks() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        let chunks = partition_ranges(6, 6, rng);
        assert_eq!(chunks, (0..6).map(|i| i..i + 1).collect_vec());
    }
}
