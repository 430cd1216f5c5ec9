use num_traits::{NumCast, PrimInt};

use std::collections::HashMap;
use std::ops::Range;

use crate::error::IndexError;
use crate::{FmIndex, IndexStorage};

/// A sparse suffix array keyed by sorted-suffix rank.
///
/// Only entries whose text offset is divisible by the sampling rate are
/// retained. Rows without an entry are resolved by LF-stepping to a sampled
/// row and adding back the number of steps taken. Every LF step decreases
/// the corresponding text offset by one, so a sampled row is reached within
/// fewer than `sampling_rate` steps.
pub(crate) struct SampledSuffixArray<I> {
    samples: HashMap<usize, I>,
    sampling_rate: usize,
}

impl<I: IndexStorage> SampledSuffixArray<I> {
    pub(crate) fn new_offset_sampled<O: PrimInt>(suffix_array: &[O], sampling_rate: usize) -> Self {
        assert!(sampling_rate >= 1);

        let mut samples = HashMap::new();

        for (rank, &suffix_offset) in suffix_array.iter().enumerate() {
            let suffix_offset = <usize as NumCast>::from(suffix_offset).unwrap();

            if suffix_offset % sampling_rate == 0 {
                samples.insert(rank, <I as NumCast>::from(suffix_offset).unwrap());
            }
        }

        Self {
            samples,
            sampling_rate,
        }
    }

    pub(crate) fn num_samples(&self) -> usize {
        self.samples.len()
    }

    pub(crate) fn recover_range<'a>(
        &'a self,
        range: Range<usize>,
        index: &'a FmIndex<I>,
    ) -> impl Iterator<Item = Result<usize, IndexError>> + 'a {
        range.map(move |row| self.recover(row, index))
    }

    fn recover(&self, row: usize, index: &FmIndex<I>) -> Result<usize, IndexError> {
        let mut pointer = row;
        let mut num_steps_done = 0;

        loop {
            if let Some(&suffix_offset) = self.samples.get(&pointer) {
                let suffix_offset = <usize as NumCast>::from(suffix_offset).unwrap();
                return Ok(suffix_offset + num_steps_done);
            }

            if num_steps_done >= self.sampling_rate {
                return Err(IndexError::LfChainTooLong {
                    row,
                    bound: self.sampling_rate,
                });
            }

            let dense_symbol = index.occurrences.symbol_at(pointer);
            pointer = index.lf_mapping_step(dense_symbol, pointer)?;
            num_steps_done += 1;
        }
    }
}
