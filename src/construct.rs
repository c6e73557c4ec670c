//! Suffix sorting.
//!
//! Two interchangeable algorithms fill a suffix array for a byte string.
//! Neither needs a sentinel: a suffix that is a proper prefix of another
//! sorts first, which is exactly the order of `[u8]` slices.
//!
//! | algorithm            | time           | extra space |
//! |----------------------|----------------|-------------|
//! | [`Algorithm::Naive`]    | O(N² log N)    | O(1)        |
//! | [`Algorithm::Doubling`] | O(N log² N)    | O(N)        |
//!
//! A linear-time construction (SA-IS, SACA-K) satisfies the same ordering
//! and can replace `Doubling` without touching search.
use crate::offset::{fits, Offset};
use contracts::*;
use log::debug;
use std::mem;

/// Texts up to this length are sorted with [`Algorithm::Naive`] under
/// [`Algorithm::Auto`].
pub const NAIVE_THRESHOLD: usize = 256;

/// Suffix sorting strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// `Naive` for short texts, `Doubling` otherwise.
    Auto,
    /// Comparison sort of whole suffixes.
    Naive,
    /// Prefix doubling over rank pairs.
    Doubling,
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::Auto
    }
}

impl Algorithm {
    /// The concrete algorithm used for a text of length `len`.
    pub fn resolve(self, len: usize) -> Algorithm {
        match self {
            Algorithm::Auto if len <= NAIVE_THRESHOLD => Algorithm::Naive,
            Algorithm::Auto => Algorithm::Doubling,
            other => other,
        }
    }
}

fn naive<I: Offset>(text: &[u8], sa: &mut [I]) {
    sa.iter_mut()
        .enumerate()
        .for_each(|(i, e)| *e = I::of_u(i));

    // suffixes are pairwise distinct, so stability is irrelevant
    sa.sort_unstable_by(|a, b| text[a.to_u()..].cmp(&text[b.to_u()..]));
}

fn doubling<I: Offset>(text: &[u8], sa: &mut [I]) {
    let n = text.len();
    if n == 0 {
        return;
    }

    let mut order: Vec<usize> = (0..n).collect();
    // rank[i] orders the first `k` bytes of suffix i
    let mut rank: Vec<usize> = text.iter().map(|&c| c as usize).collect();
    let mut next = vec![0usize; n];
    let mut k = 1;

    loop {
        {
            // 0 stands for "past the end", which sorts before any rank
            let key = |i: usize| (rank[i], if i + k < n { rank[i + k] + 1 } else { 0 });

            order.sort_unstable_by_key(|&i| key(i));

            next[order[0]] = 0;
            for w in 1..n {
                let bump = (key(order[w - 1]) < key(order[w])) as usize;
                next[order[w]] = next[order[w - 1]] + bump;
            }
        }

        mem::swap(&mut rank, &mut next);

        // all ranks distinct
        if rank[order[n - 1]] == n - 1 {
            break;
        }

        k *= 2;
    }

    sa.iter_mut()
        .zip(order)
        .for_each(|(e, i)| *e = I::of_u(i));
}

/// Construct the suffix array of `text` into `sa`.
///
/// After the call `sa[r]` is the start offset of the suffix with rank `r`.
/// The empty text produces an empty array.
///
/// # Arguments
/// - `text`: Input string
/// - `sa`: Output suffix array
/// - `algorithm`: Sorting strategy
/// # Example
/// ```
/// use sufalign::{construct, Algorithm};
///
/// let s = b"abracadabra";
///
/// let mut sa = vec![0u16; s.len()];
///
/// construct(s, &mut sa, Algorithm::Auto);
///
/// assert_eq!(sa, vec![10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2]);
/// ```
#[requires(text.len() == sa.len(), "`text` and `sa` have same length")]
#[requires(fits::<I>(text.len()), "offsets of `text` fit into `I`")]
#[debug_ensures(is_permutation(sa), "`sa` is a permutation of the offsets of `text`")]
pub fn construct<I: Offset>(text: &[u8], sa: &mut [I], algorithm: Algorithm) {
    let algorithm = algorithm.resolve(text.len());

    debug!("sorting {} suffixes with {:?}", text.len(), algorithm);

    match algorithm {
        Algorithm::Naive => naive(text, sa),
        Algorithm::Doubling => doubling(text, sa),
        Algorithm::Auto => unreachable!("`resolve` never returns `Auto`"),
    }
}

/// `sa` holds every offset in `0..sa.len()` exactly once.
fn is_permutation<I: Offset>(sa: &[I]) -> bool {
    let mut seen = vec![false; sa.len()];
    sa.iter().all(|e| {
        let i = e.to_u();
        i < seen.len() && !mem::replace(&mut seen[i], true)
    })
}

#[cfg(test)]
pub(crate) fn is_suffix_array_of<I: Offset>(sa: &[I], s: &[u8]) -> bool {
    s.len() == sa.len()
        && is_permutation(sa)
        && sa
            .windows(2)
            .all(|w| s[w[0].to_u()..] < s[w[1].to_u()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(s: &[u8], algorithm: Algorithm) -> Vec<u32> {
        let mut sa = vec![0u32; s.len()];
        construct(s, &mut sa, algorithm);
        sa
    }

    #[test]
    fn auto_switches_on_length() {
        assert_eq!(Algorithm::Auto.resolve(0), Algorithm::Naive);
        assert_eq!(Algorithm::Auto.resolve(NAIVE_THRESHOLD), Algorithm::Naive);
        assert_eq!(
            Algorithm::Auto.resolve(NAIVE_THRESHOLD + 1),
            Algorithm::Doubling
        );
        assert_eq!(Algorithm::Naive.resolve(1 << 20), Algorithm::Naive);
    }

    #[test]
    fn suffix_array_banana() {
        // 012345
        // banana
        // a, ana, anana, banana, na, nana
        for algorithm in [Algorithm::Naive, Algorithm::Doubling].iter() {
            assert_eq!(sorted(b"banana", *algorithm), vec![5, 3, 1, 0, 4, 2]);
        }
    }

    #[test]
    fn suffix_array_mmiissiippii() {
        let s = b"mmiissiissiippii";
        let expected = vec![15, 14, 10, 6, 2, 11, 7, 3, 1, 0, 13, 12, 9, 5, 8, 4];
        assert_eq!(sorted(s, Algorithm::Naive), expected);
        assert_eq!(sorted(s, Algorithm::Doubling), expected);
    }

    #[test]
    fn repeated_character() {
        // shorter runs of the same byte sort first
        assert_eq!(sorted(b"aaaa", Algorithm::Naive), vec![3, 2, 1, 0]);
        assert_eq!(sorted(b"aaaa", Algorithm::Doubling), vec![3, 2, 1, 0]);
    }

    #[test]
    fn empty_and_single() {
        assert!(sorted(b"", Algorithm::Doubling).is_empty());
        assert!(sorted(b"", Algorithm::Naive).is_empty());
        assert_eq!(sorted(b"x", Algorithm::Doubling), vec![0]);
    }

    #[test]
    fn permutation_check() {
        assert!(is_permutation::<u32>(&[]));
        assert!(is_permutation(&[2u32, 0, 1]));
        assert!(!is_permutation(&[0u32, 0, 1]));
        assert!(!is_permutation(&[0u32, 3, 1]));
    }

    #[test]
    fn result_is_a_permutation() {
        // construct re-checks this itself in debug builds
        let texts: [&[u8]; 5] = [b"", b"a", b"banana", b"aaaaaaaa", b"ACGTACGTTTGACA"];
        for s in texts.iter() {
            for algorithm in [Algorithm::Naive, Algorithm::Doubling].iter() {
                let sa = sorted(s, *algorithm);
                assert_eq!(sa.len(), s.len());
                assert!(is_permutation(&sa), "{:?} {:?}", algorithm, s);
            }
        }
    }

    #[test]
    #[should_panic]
    fn length_mismatch() {
        let mut sa = vec![0u32; 2];
        construct(b"abc", &mut sa, Algorithm::Naive);
    }

    #[test]
    #[should_panic]
    fn offset_type_too_narrow() {
        let s = vec![b'a'; u16::MAX as usize + 2];
        let mut sa = vec![0u16; s.len()];
        construct(&s, &mut sa, Algorithm::Naive);
    }

    use proptest::collection::*;
    use proptest::prelude::*;

    const BINARY: std::ops::Range<u8> = b'a'..b'c';
    const DNA: [u8; 4] = *b"ACGT";

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]
        #[test]
        fn naive_binary(s in vec(BINARY, 0..200)) {
            let sa = sorted(&s, Algorithm::Naive);
            prop_assert!(is_suffix_array_of(&sa, &s));
        }

        #[test]
        fn doubling_binary(s in vec(BINARY, 0..200)) {
            let sa = sorted(&s, Algorithm::Doubling);
            prop_assert!(is_suffix_array_of(&sa, &s));
        }

        #[test]
        fn doubling_bytes(s in vec(any::<u8>(), 0..300)) {
            let sa = sorted(&s, Algorithm::Doubling);
            prop_assert!(is_suffix_array_of(&sa, &s));
        }

        #[test]
        fn algorithms_agree(s in vec(prop::sample::select(DNA.to_vec()), 0..400)) {
            prop_assert_eq!(sorted(&s, Algorithm::Naive), sorted(&s, Algorithm::Doubling));
        }
    }
}
