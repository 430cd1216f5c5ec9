use crate::{FmIndex, IndexStorage, error::Error};
use std::marker::PhantomData;

/// Configuration for FM-Index construction.
///
/// The two sampling intervals trade memory for query time. A larger
/// checkpoint interval stores fewer precomputed rank values and makes every
/// rank query scan a longer stretch of the transform. A larger suffix array
/// sampling rate retains fewer suffix positions and makes locating an
/// occurrence walk a longer LF-mapping chain.
pub struct FmIndexConfig<I = i32> {
    pub(crate) checkpoint_interval: usize,
    pub(crate) suffix_array_sampling_rate: usize,
    _index_storage_marker: PhantomData<I>,
}

impl<I: IndexStorage> FmIndexConfig<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distance between precomputed rank checkpoints. Must be at least 1.
    pub fn checkpoint_interval(&mut self, checkpoint_interval: usize) -> &mut Self {
        assert!(checkpoint_interval >= 1);
        self.checkpoint_interval = checkpoint_interval;
        self
    }

    /// Text offsets divisible by this rate are retained in the sampled
    /// suffix array. Must be at least 1.
    pub fn suffix_array_sampling_rate(&mut self, suffix_array_sampling_rate: usize) -> &mut Self {
        assert!(suffix_array_sampling_rate >= 1);
        self.suffix_array_sampling_rate = suffix_array_sampling_rate;
        self
    }

    /// Builds the index for the given text.
    ///
    /// Fails if the text contains the sentinel byte.
    pub fn construct(&mut self, text: &[u8]) -> Result<FmIndex<I>, Error> {
        FmIndex::new(text, self)
    }
}

impl<I: IndexStorage> Default for FmIndexConfig<I> {
    fn default() -> Self {
        Self {
            checkpoint_interval: 64,
            suffix_array_sampling_rate: 4,
            _index_storage_marker: PhantomData,
        }
    }
}
