//! Find every exact occurrence of a short read in a reference sequence with a suffix array.
//!
//! [`SuffixArrayIndex`] sorts the suffixes of a text once; [`search`] then answers each
//! pattern in O(M log N) comparisons plus the number of occurrences, where `M` is the
//! pattern length. Positions are reported 1-indexed, as is customary for sequence data.
//!
//! The [`fasta`] and [`harness`] modules read reads and references from disk and check
//! alignments against recorded expectations; the index itself never touches the filesystem.
//!
//! # Example
//! ```
//! use sufalign::SuffixArrayIndex;
//!
//! let index = SuffixArrayIndex::new("GATTACAGATTACA");
//!
//! assert_eq!(index.search("TAC").into_sorted_vec(), vec![4, 11]);
//! assert_eq!(index.count("GATTACA"), 2);
//! assert!(index.search("CAT").is_empty());
//! ```
mod construct;
mod error;
mod index;
mod offset;
mod search;

pub mod fasta;
pub mod harness;

pub use construct::{construct, Algorithm, NAIVE_THRESHOLD};
pub use error::{Error, Result};
pub use index::SuffixArrayIndex;
pub use offset::Offset;
pub use search::{band, search, MatchSet};
