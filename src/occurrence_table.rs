use num_traits::NumCast;

use crate::IndexStorage;
use crate::error::IndexError;

/// The Burrows-Wheeler transform of a text with support for exact symbol
/// rank queries.
///
/// Running per-symbol occurrence counts are only precomputed at every
/// `checkpoint_interval`-th position of the transform. A rank query combines
/// the checkpoint at or before the queried position with a direct scan over
/// the remaining at most `checkpoint_interval - 1` transform symbols.
pub struct CheckpointedOccurrenceTable<I> {
    bwt: Vec<u8>,
    alphabet_size: usize,
    checkpoint_interval: usize,
    // the count of symbol s in bwt[0..c * checkpoint_interval) is stored at
    // index c * alphabet_size + s
    interleaved_checkpoints: Vec<I>,
}

impl<I: IndexStorage> CheckpointedOccurrenceTable<I> {
    /// Builds the table for a transform over `alphabet_size` dense symbols.
    ///
    /// All transform symbols are assumed to be smaller than `alphabet_size`.
    pub fn construct(bwt: Vec<u8>, alphabet_size: usize, checkpoint_interval: usize) -> Self {
        assert!(checkpoint_interval >= 1);

        let num_checkpoints = bwt.len() / checkpoint_interval + 1;
        let mut interleaved_checkpoints = Vec::with_capacity(num_checkpoints * alphabet_size);

        let mut running_counts = vec![I::zero(); alphabet_size];

        for (idx, &symbol) in bwt.iter().enumerate() {
            if idx % checkpoint_interval == 0 {
                interleaved_checkpoints.extend_from_slice(&running_counts);
            }

            running_counts[symbol as usize] = running_counts[symbol as usize] + I::one();
        }

        if bwt.len() % checkpoint_interval == 0 {
            interleaved_checkpoints.extend_from_slice(&running_counts);
        }

        Self {
            bwt,
            alphabet_size,
            checkpoint_interval,
            interleaved_checkpoints,
        }
    }

    /// Returns the number of occurrences of `symbol` in the transform prefix
    /// of length `limit`.
    ///
    /// Fails if `limit` lies beyond the end of the transform.
    pub fn rank(&self, symbol: u8, limit: usize) -> Result<usize, IndexError> {
        assert!((symbol as usize) < self.alphabet_size);

        if limit > self.bwt.len() {
            return Err(IndexError::RankLimitOutOfBounds {
                limit,
                len: self.bwt.len(),
            });
        }

        let checkpoint_idx = limit / self.checkpoint_interval;
        let checkpoint_base = checkpoint_idx * self.checkpoint_interval;

        let checkpoint =
            self.interleaved_checkpoints[checkpoint_idx * self.alphabet_size + symbol as usize];
        let checkpoint = <usize as NumCast>::from(checkpoint).unwrap();

        let num_remaining = self.bwt[checkpoint_base..limit]
            .iter()
            .filter(|&&s| s == symbol)
            .count();

        Ok(checkpoint + num_remaining)
    }

    /// Recovers the transform symbol at `idx`.
    pub fn symbol_at(&self, idx: usize) -> u8 {
        self.bwt[idx]
    }

    pub fn text_len(&self) -> usize {
        self.bwt.len()
    }

    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkpoint_and_remainder_counts() {
        let bwt = vec![1, 2, 2, 1, 0, 1, 1];
        let table = CheckpointedOccurrenceTable::<i32>::construct(bwt, 3, 3);

        assert_eq!(table.rank(1, 0), Ok(0));
        assert_eq!(table.rank(1, 1), Ok(1));
        assert_eq!(table.rank(1, 4), Ok(2));
        assert_eq!(table.rank(1, 7), Ok(4));
        assert_eq!(table.rank(2, 3), Ok(2));
        assert_eq!(table.rank(0, 7), Ok(1));

        assert_eq!(
            table.rank(0, 8),
            Err(IndexError::RankLimitOutOfBounds { limit: 8, len: 7 })
        );
    }

    #[test]
    fn final_checkpoint_at_text_len() {
        // length divisible by the interval, so a checkpoint exists at the end
        let bwt = vec![0, 1, 1, 0, 1, 0];
        let table = CheckpointedOccurrenceTable::<i32>::construct(bwt, 2, 3);

        assert_eq!(table.rank(1, 6), Ok(3));
        assert_eq!(table.rank(0, 6), Ok(3));
    }
}
