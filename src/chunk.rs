use std::num::NonZeroUsize;
use std::slice;

/// Splits `items` into contiguous chunks of `size` items. The last chunk is shorter when the
/// number of items is not a multiple of `size`.
pub fn chunk<T>(items: &[T], size: NonZeroUsize) -> Chunked<'_, T> {
    Chunked {
        items,
        size,
    }
}

/// Ordered, fixed-size chunks of a slice. Iterating a [`Chunked`] (or a clone of it) always
/// produces the same chunks.
#[derive(Debug)]
pub struct Chunked<'a, T> {
    items: &'a [T],
    size: NonZeroUsize,
}

// derive would require T: Clone
impl<T> Clone for Chunked<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Chunked<'_, T> {}

impl<'a, T> Chunked<'a, T> {
    /// An iterator over the chunks.
    pub fn iter(&self) -> slice::Chunks<'a, T> {
        self.items.chunks(self.size.get())
    }

    /// The number of chunks.
    pub fn len(&self) -> usize {
        self.items.len().div_ceil(self.size.get())
    }

    /// Whether there are no chunks.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T> IntoIterator for Chunked<'a, T> {
    type Item = &'a [T];
    type IntoIter = slice::Chunks<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &Chunked<'a, T> {
    type Item = &'a [T];
    type IntoIter = slice::Chunks<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn chunks_into_hundreds() {
        let items = (1..=250).collect::<Vec<u32>>();
        let lengths = chunk(&items, size(100))
            .into_iter()
            .map(|chunk| chunk.len())
            .collect::<Vec<_>>();

        assert_eq!(lengths, vec![100, 100, 50]);
    }

    #[test]
    fn empty_input_has_no_chunks() {
        let items: Vec<u32> = Vec::new();
        let chunked = chunk(&items, size(100));

        assert!(chunked.is_empty());
        assert_eq!(chunked.len(), 0);
        assert_eq!(chunked.iter().count(), 0);
    }

    #[test]
    fn concatenated_chunks_equal_input() {
        let items = (0..37).collect::<Vec<u32>>();

        for n in 1..=40 {
            let chunked = chunk(&items, size(n));
            let chunks = chunked.iter().collect::<Vec<_>>();

            assert_eq!(chunks.concat(), items);
            assert_eq!(chunks.len(), chunked.len());
            assert!(chunks[..chunks.len() - 1].iter().all(|chunk| chunk.len() == n));
        }
    }

    #[test]
    fn chunks_are_restartable() {
        let items = vec!["a", "b", "c", "d", "e"];
        let chunked = chunk(&items, size(2));
        let first = chunked.iter().collect::<Vec<_>>();
        let second = (&chunked).into_iter().collect::<Vec<_>>();

        assert_eq!(first, second);
        assert_eq!(first, vec![&["a", "b"][..], &["c", "d"][..], &["e"][..]]);
    }
}
