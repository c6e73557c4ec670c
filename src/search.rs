//! Exact pattern search over a [`SuffixArrayIndex`].
//!
//! Every suffix that starts with the pattern compares equal to it once
//! truncated to the pattern length, so in a sorted suffix array the matches
//! form one contiguous band. The search binary-searches for any suffix in
//! the band, then walks outwards from it until the neighbours stop matching.
use crate::index::SuffixArrayIndex;
use crate::offset::Offset;
use log::trace;
use std::cmp::{self, Ordering::*};
use std::ops::Range;
use std::slice;

/// 1-indexed start positions of a pattern in a text.
///
/// Positions are kept in suffix-array order, which is unrelated to text
/// order; use [`MatchSet::sorted`] or [`MatchSet::into_sorted_vec`] for
/// ascending positions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchSet {
    positions: Vec<usize>,
}

impl MatchSet {
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains(&self, position: usize) -> bool {
        self.positions.contains(&position)
    }

    pub fn iter(&self) -> slice::Iter<'_, usize> {
        self.positions.iter()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.positions
    }

    pub fn sorted(&self) -> Vec<usize> {
        self.clone().into_sorted_vec()
    }

    pub fn into_sorted_vec(mut self) -> Vec<usize> {
        self.positions.sort_unstable();
        self.positions
    }
}

impl IntoIterator for MatchSet {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.into_iter()
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a usize;
    type IntoIter = slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// `text[start..]` cut to at most `m` bytes.
#[inline]
fn head(text: &[u8], start: usize, m: usize) -> &[u8] {
    &text[start..cmp::min(start + m, text.len())]
}

/// Rank range of the suffixes of `index` that start with `pattern`.
///
/// The range is empty when there is no occurrence. An empty pattern is a
/// prefix of every suffix and yields `0..index.len()`.
pub fn band<I: Offset>(index: &SuffixArrayIndex<I>, pattern: &[u8]) -> Range<usize> {
    let text = index.text();
    let m = pattern.len();

    if m > text.len() {
        return 0..0;
    }

    // a suffix shorter than the pattern never matches: its head is shorter
    let matches = |rank: usize| head(text, index.offset(rank), m) == pattern;

    let mut low = 0;
    let mut high = index.len();

    while low < high {
        let mid = low + (high - low) / 2;

        match head(text, index.offset(mid), m).cmp(pattern) {
            Less => low = mid + 1,
            Greater => high = mid,
            Equal => {
                let mut left = mid;
                while left > low && matches(left - 1) {
                    left -= 1;
                }

                let mut right = mid + 1;
                while right < high && matches(right) {
                    right += 1;
                }

                trace!("pattern of {} bytes: band {}..{}", m, left, right);

                return left..right;
            }
        }
    }

    low..low
}

/// All 1-indexed start positions of `pattern` in the indexed text.
///
/// - An empty pattern matches at every position `1..=n`; over an empty text
///   it matches nowhere.
/// - A pattern longer than the text matches nowhere.
///
/// # Example
/// ```
/// use sufalign::{search, SuffixArrayIndex};
///
/// let index = SuffixArrayIndex::new("aaaa");
/// assert_eq!(search(&index, b"aa").into_sorted_vec(), vec![1, 2, 3]);
/// assert!(search(&index, b"b").is_empty());
/// ```
pub fn search<I: Offset>(index: &SuffixArrayIndex<I>, pattern: &[u8]) -> MatchSet {
    let positions = band(index, pattern)
        .map(|rank| index.offset(rank) + 1)
        .collect();

    MatchSet { positions }
}
