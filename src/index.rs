use crate::construct::{construct, Algorithm};
use crate::offset::Offset;
use crate::search::{self, MatchSet};
use std::fmt;
use std::ops::Range;

/// An immutable text together with its sorted suffix offsets.
///
/// The index owns its text. It is never modified after construction, so a
/// shared reference can be searched from many threads at once.
///
/// # Example
/// ```
/// use sufalign::SuffixArrayIndex;
///
/// let index = SuffixArrayIndex::new("banana");
/// assert_eq!(index.suffix_array(), &[5, 3, 1, 0, 4, 2]);
/// assert_eq!(index.search("ana").into_sorted_vec(), vec![2, 4]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SuffixArrayIndex<I: Offset = u32> {
    text: Box<[u8]>,
    sa: Box<[I]>,
}

impl SuffixArrayIndex<u32> {
    /// Builds an index with `u32` offsets and the default algorithm.
    ///
    /// # Panics
    ///
    /// Panics if `text` is longer than `u32::MAX + 1` bytes.
    pub fn new<T: Into<Vec<u8>>>(text: T) -> Self {
        Self::with_algorithm(text, Algorithm::default())
    }
}

impl<I: Offset> SuffixArrayIndex<I> {
    /// Builds an index sorting suffixes with `algorithm`.
    ///
    /// # Panics
    ///
    /// Panics if some offset of `text` does not fit into `I`.
    pub fn with_algorithm<T: Into<Vec<u8>>>(text: T, algorithm: Algorithm) -> Self {
        let text = text.into().into_boxed_slice();
        let mut sa = vec![I::zero(); text.len()].into_boxed_slice();

        construct(&text, &mut sa, algorithm);

        SuffixArrayIndex { text, sa }
    }

    #[inline]
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    #[inline]
    pub fn suffix_array(&self) -> &[I] {
        &self.sa
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sa.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sa.is_empty()
    }

    /// Start offset of the suffix with rank `rank`.
    ///
    /// # Panics
    ///
    /// Panics if `rank >= self.len()`.
    #[inline]
    pub fn offset(&self, rank: usize) -> usize {
        self.sa[rank].to_u()
    }

    /// The suffix with rank `rank`.
    ///
    /// # Panics
    ///
    /// Panics if `rank >= self.len()`.
    #[inline]
    pub fn suffix(&self, rank: usize) -> &[u8] {
        &self.text[self.offset(rank)..]
    }

    /// All 1-indexed positions where `pattern` occurs. See [`search()`](crate::search()).
    pub fn search<P: AsRef<[u8]>>(&self, pattern: P) -> MatchSet {
        search::search(self, pattern.as_ref())
    }

    /// Rank range of the suffixes starting with `pattern`.
    pub fn band<P: AsRef<[u8]>>(&self, pattern: P) -> Range<usize> {
        search::band(self, pattern.as_ref())
    }

    pub fn contains<P: AsRef<[u8]>>(&self, pattern: P) -> bool {
        !self.band(pattern).is_empty()
    }

    pub fn count<P: AsRef<[u8]>>(&self, pattern: P) -> usize {
        self.band(pattern).len()
    }
}

impl<I: Offset> fmt::Debug for SuffixArrayIndex<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "SuffixArrayIndex (len {})", self.len())?;
        for (rank, &start) in self.sa.iter().enumerate() {
            writeln!(
                f,
                "suffix[{}] {:?}, {}",
                rank,
                start,
                String::from_utf8_lossy(self.suffix(rank))
            )?;
        }
        Ok(())
    }
}
