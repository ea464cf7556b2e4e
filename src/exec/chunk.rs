//! # Lazy fixed-size chunking.
//!
//! [`chunked`] splits an ordered sequence into contiguous, non-overlapping
//! groups of `size` elements. The final group holds the remainder when the
//! input length is not a multiple of `size`; an empty input produces no
//! groups at all.
//!
//! The iterator is lazy: consumers may stop early without materializing the
//! remaining groups. Chunking a concrete collection again restarts from the
//! beginning.
//!
//! # Example
//! ```rust
//! use batchkit::chunked;
//!
//! let groups: Vec<Vec<u32>> = chunked(1..=7, 3).collect();
//! assert_eq!(groups, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
//! ```

/// Splits `items` into ordered groups of `size` elements.
///
/// # Panics
/// Panics if `size` is zero.
pub fn chunked<I>(items: I, size: usize) -> Chunked<I::IntoIter>
where
    I: IntoIterator,
{
    assert!(size >= 1, "chunk size must be >= 1");
    Chunked {
        iter: items.into_iter(),
        size,
    }
}

/// Iterator of fixed-size groups, created by [`chunked`].
#[derive(Debug, Clone)]
pub struct Chunked<I> {
    iter: I,
    size: usize,
}

impl<I: Iterator> Iterator for Chunked<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut group = Vec::with_capacity(self.size);
        for item in self.iter.by_ref() {
            group.push(item);
            if group.len() == self.size {
                break;
            }
        }
        if group.is_empty() {
            None
        } else {
            Some(group)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (lower.div_ceil(self.size), upper.map(|n| n.div_ceil(self.size)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concatenation_reconstructs_input() {
        for len in 0..25usize {
            for size in 1..6usize {
                let items: Vec<usize> = (0..len).collect();
                let rebuilt: Vec<usize> = chunked(items.clone(), size).flatten().collect();
                assert_eq!(rebuilt, items, "len={len} size={size}");
            }
        }
    }

    #[test]
    fn test_group_lengths() {
        let groups: Vec<Vec<u32>> = chunked(1..=10, 3).collect();
        assert_eq!(groups.len(), 4);
        assert!(groups[..3].iter().all(|g| g.len() == 3));
        assert_eq!(groups[3].len(), 1);
    }

    #[test]
    fn test_exact_multiple_has_no_remainder() {
        let groups: Vec<Vec<u32>> = chunked(1..=9, 3).collect();
        assert_eq!(groups.len(), 3);
        assert!(groups.iter().all(|g| g.len() == 3));
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        let mut groups = chunked(Vec::<u8>::new(), 4);
        assert!(groups.next().is_none());
    }

    #[test]
    fn test_lazy_early_stop() {
        let first = chunked(0..u64::MAX, 5).next();
        assert_eq!(first, Some(vec![0, 1, 2, 3, 4]));
    }

    #[test]
    fn test_size_hint_counts_groups() {
        assert_eq!(chunked(0..10, 3).size_hint(), (4, Some(4)));
        assert_eq!(chunked(0..9, 3).size_hint(), (3, Some(3)));
    }

    #[test]
    #[should_panic(expected = "chunk size")]
    fn test_zero_size_is_a_contract_violation() {
        let _ = chunked(vec![1, 2, 3], 0);
    }
}
