use crate::{
    FmIndex, HalfOpenInterval, IndexStorage, alphabet::INVALID_SYMBOL, error::IndexError,
};

/// A cursor to the FM-Index.
///
/// The cursor API allows more flexible search procedures using the FM-Index.
/// The cursor implicitly maintains a currently searched pattern. Symbols can
/// iteratively be added to the front of this pattern.
///
/// At any point, the number of occurrences of the currently searched pattern
/// can be retrieved cheaply, and occurrences can be located. Repeatedly
/// calling [`extend_front`](Cursor::extend_front) corresponds to a typical
/// backwards search.
#[derive(Clone, Copy)]
pub struct Cursor<'a, I> {
    pub(crate) index: &'a FmIndex<I>,
    pub(crate) interval: HalfOpenInterval,
}

impl<'a, I: IndexStorage> Cursor<'a, I> {
    /// Extends the currently searched pattern at the front by one symbol.
    ///
    /// A symbol that does not occur in the indexed text empties the cursor.
    /// Once empty, a cursor stays empty.
    pub fn extend_front(&mut self, symbol: u8) -> Result<(), IndexError> {
        let dense_symbol = self.index.alphabet.io_to_dense_representation(symbol);

        if dense_symbol == INVALID_SYMBOL {
            self.interval.end = self.interval.start;
            return Ok(());
        }

        if self.interval.start != self.interval.end {
            let start = self.index.lf_mapping_step(dense_symbol, self.interval.start)?;
            let end = self.index.lf_mapping_step(dense_symbol, self.interval.end)?;

            self.interval = HalfOpenInterval { start, end };
        }

        Ok(())
    }

    // returns half open interval [start, end)
    pub(crate) fn interval(&self) -> HalfOpenInterval {
        self.interval
    }

    /// Returns the number of occurrences of the currently searched pattern
    /// in the indexed text.
    pub fn count(&self) -> usize {
        self.interval.end - self.interval.start
    }

    /// Returns `true` if the currently searched pattern does not occur in
    /// the indexed text.
    pub fn is_empty(&self) -> bool {
        self.interval.start == self.interval.end
    }

    /// Returns the text offsets at which the currently searched pattern
    /// occurs.
    ///
    /// For each occurrence, a sampled suffix array lookup is performed,
    /// which walks the LF-mapping until it hits a sampled row.
    pub fn locate(&self) -> Result<Vec<usize>, IndexError> {
        self.index.locate_interval(self.interval)
    }
}
