mod bwt;

use log::debug;
use num_traits::NumCast;

use crate::alphabet::{self, Alphabet};
use crate::config::FmIndexConfig;
use crate::occurrence_table::CheckpointedOccurrenceTable;
use crate::sampled_suffix_array::SampledSuffixArray;
use crate::IndexStorage;

pub(crate) struct DataStructures<I> {
    pub(crate) count: Vec<usize>,
    pub(crate) occurrences: CheckpointedOccurrenceTable<I>,
    pub(crate) sampled_suffix_array: SampledSuffixArray<I>,
}

pub(crate) fn create_data_structures<I: IndexStorage>(
    raw_text: &[u8],
    alphabet: &Alphabet,
    config: &FmIndexConfig<I>,
) -> DataStructures<I> {
    let (text, frequency_table) = alphabet::encode_with_sentinel(raw_text, alphabet);

    assert!(text.len() <= <usize as NumCast>::from(I::max_value()).unwrap());

    let count = frequency_table_to_count(&frequency_table);

    let suffix_array_bytes = construct_libsais_suffix_array::<I>(&text);
    let suffix_array: &[I::LibsaisOutput] = bytemuck::cast_slice(&suffix_array_bytes);

    debug!("suffix array for text of length {} constructed", text.len());

    let bwt = bwt::bwt_from_suffix_array(suffix_array, &text);

    let occurrences = CheckpointedOccurrenceTable::construct(
        bwt,
        alphabet.num_dense_symbols(),
        config.checkpoint_interval,
    );

    let sampled_suffix_array =
        SampledSuffixArray::new_offset_sampled(suffix_array, config.suffix_array_sampling_rate);

    debug!(
        "index data structures built, {} of {} suffix positions retained",
        sampled_suffix_array.num_samples(),
        suffix_array.len(),
    );

    DataStructures {
        count,
        occurrences,
        sampled_suffix_array,
    }
}

fn construct_libsais_suffix_array<I: IndexStorage>(text: &[u8]) -> Vec<u8> {
    // the buffer is allocated in bytes and viewed through the libsais output
    // element type
    let mut suffix_array_bytes = vec![0u8; text.len() * size_of::<I::LibsaisOutput>()];
    let suffix_array_buffer: &mut [I::LibsaisOutput] =
        bytemuck::cast_slice_mut(&mut suffix_array_bytes);

    libsais::SuffixArrayConstruction::for_text(text)
        .in_borrowed_buffer(suffix_array_buffer)
        .single_threaded()
        .run()
        .expect("libsais suffix array construction");

    suffix_array_bytes
}

// the count of text symbols strictly smaller than s ends up at index s,
// which is the first row of sorted-rotation space whose suffix starts with s
fn frequency_table_to_count(frequency_table: &[usize]) -> Vec<usize> {
    let mut count = frequency_table.to_vec();

    let mut sum = 0;

    for entry in count.iter_mut() {
        let temp = *entry;
        *entry = sum;
        sum += temp;
    }

    count
}
