//! An FM-Index for exact substring search over plain byte texts.
//!
//! The index is built once from a text and afterwards answers, for any
//! pattern, at which offsets of the text the pattern occurs. Queries run a
//! backwards search over the Burrows-Wheeler transform of the text and never
//! scan the text itself.

/// Contains the dense symbol alphabet and the sentinel convention.
pub mod alphabet;
pub mod config;
pub mod cursor;
pub mod error;
pub mod occurrence_table;

mod construction;
mod sampled_suffix_array;

use bytemuck::Pod;
use libsais::OutputElement;
use num_traits::PrimInt;

#[doc(inline)]
pub use alphabet::Alphabet;
#[doc(inline)]
pub use config::FmIndexConfig;
#[doc(inline)]
pub use cursor::Cursor;
#[doc(inline)]
pub use error::{Error, IndexError, InputError};
#[doc(inline)]
pub use occurrence_table::CheckpointedOccurrenceTable;

use alphabet::SENTINEL_RANK;
use construction::DataStructures;
use sampled_suffix_array::SampledSuffixArray;

/// An FM-Index over a single sentinel-terminated text.
///
/// Construction is done via [`FmIndexConfig`]. All data structures are
/// read-only after construction, so shared references to the index can be
/// used from multiple threads without synchronization.
pub struct FmIndex<I = i32> {
    alphabet: Alphabet,
    count: Vec<usize>,
    occurrences: CheckpointedOccurrenceTable<I>,
    suffix_array: SampledSuffixArray<I>,
}

impl<I: IndexStorage> FmIndex<I> {
    fn new(text: &[u8], config: &FmIndexConfig<I>) -> Result<Self, Error> {
        let alphabet = Alphabet::for_text(text)?;

        let DataStructures {
            count,
            occurrences,
            sampled_suffix_array,
        } = construction::create_data_structures(text, &alphabet, config);

        Ok(FmIndex {
            alphabet,
            count,
            occurrences,
            suffix_array: sampled_suffix_array,
        })
    }

    /// Returns the number of occurrences of `pattern` in the indexed text.
    pub fn count(&self, pattern: &[u8]) -> Result<usize, Error> {
        Ok(self.cursor_for_pattern(pattern)?.count())
    }

    /// Returns the starting offsets of all occurrences of `pattern` in the
    /// indexed text.
    ///
    /// Offsets are 0-indexed into the raw text this index was built from.
    /// The order of the returned offsets is unspecified. Patterns containing
    /// symbols that do not occur in the text yield an empty result, empty
    /// patterns are rejected.
    pub fn locate(&self, pattern: &[u8]) -> Result<Vec<usize>, Error> {
        let cursor = self.cursor_for_pattern(pattern)?;

        Ok(self.locate_interval(cursor.interval())?)
    }

    /// Searches all patterns and merges their occurrence offsets into a
    /// single numerically sorted list.
    ///
    /// An offset at which several patterns match is reported once per
    /// matching pattern. Patterns are searched in parallel using the
    /// threads configured for rayon.
    pub fn locate_many<P: AsRef<[u8]> + Sync>(&self, patterns: &[P]) -> Result<Vec<usize>, Error> {
        use rayon::prelude::*;

        let per_pattern_offsets: Vec<Vec<usize>> = patterns
            .par_iter()
            .map(|pattern| self.locate(pattern.as_ref()))
            .collect::<Result<_, _>>()?;

        let mut merged_offsets: Vec<usize> = per_pattern_offsets.into_iter().flatten().collect();
        merged_offsets.sort_unstable();

        Ok(merged_offsets)
    }

    /// Reconstructs the raw text this index was built from by inverting the
    /// Burrows-Wheeler transform.
    pub fn recover_text(&self) -> Result<Vec<u8>, IndexError> {
        let mut recovered_text = vec![0; self.occurrences.text_len() - 1];

        // the LF-mapping chain starting at the sentinel row visits the text
        // back to front
        let mut row = 0;
        for target in recovered_text.iter_mut().rev() {
            let dense_symbol = self.occurrences.symbol_at(row);
            debug_assert_ne!(dense_symbol, SENTINEL_RANK);

            *target = self.alphabet.dense_to_io_representation(dense_symbol);
            row = self.lf_mapping_step(dense_symbol, row)?;
        }

        Ok(recovered_text)
    }

    /// Returns a cursor whose currently searched pattern is empty, matching
    /// every row of the index (including the sentinel row).
    pub fn cursor_empty(&self) -> Cursor<'_, I> {
        Cursor {
            index: self,
            interval: HalfOpenInterval {
                start: 0,
                end: self.occurrences.text_len(),
            },
        }
    }

    fn cursor_for_pattern(&self, pattern: &[u8]) -> Result<Cursor<'_, I>, Error> {
        if pattern.is_empty() {
            return Err(InputError::EmptyPattern.into());
        }

        let mut cursor = self.cursor_empty();

        for &symbol in pattern.iter().rev() {
            cursor.extend_front(symbol)?;

            if cursor.is_empty() {
                break;
            }
        }

        Ok(cursor)
    }

    pub(crate) fn locate_interval(
        &self,
        interval: HalfOpenInterval,
    ) -> Result<Vec<usize>, IndexError> {
        self.suffix_array
            .recover_range(interval.start..interval.end, self)
            .collect()
    }

    pub(crate) fn lf_mapping_step(
        &self,
        dense_symbol: u8,
        idx: usize,
    ) -> Result<usize, IndexError> {
        Ok(self.count[dense_symbol as usize] + self.occurrences.rank(dense_symbol, idx)?)
    }
}

/// A half-open interval `[start, end)` of rows in sorted-rotation space.
///
/// Empty exactly when `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HalfOpenInterval {
    pub start: usize,
    pub end: usize,
}

/// Types that can be used to store indices inside the FM-Index.
///
/// The maximum value of the type is an upper bound for the length of the
/// indexed text. Larger types allow indexing larger texts at the price of
/// higher memory usage.
pub trait IndexStorage: PrimInt + Pod + sealed::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    type LibsaisOutput: OutputElement + PrimInt + Pod;
}

impl sealed::Sealed for i32 {}

impl IndexStorage for i32 {
    type LibsaisOutput = i32;
}

impl sealed::Sealed for i64 {}

impl IndexStorage for i64 {
    type LibsaisOutput = i64;
}

mod sealed {
    pub trait Sealed {}
}
