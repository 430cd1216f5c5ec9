use num_traits::{NumCast, PrimInt};

// last symbols of the lexicographically sorted rotations of the text. the
// rotation starting at text offset zero wraps around to the sentinel
pub(crate) fn bwt_from_suffix_array<O: PrimInt>(suffix_array: &[O], text: &[u8]) -> Vec<u8> {
    suffix_array
        .iter()
        .map(|&suffix_offset| {
            let suffix_offset = <usize as NumCast>::from(suffix_offset).unwrap();

            if suffix_offset == 0 {
                text[text.len() - 1]
            } else {
                text[suffix_offset - 1]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // dense representation of "abaaba$"
    static TEXT: &[u8] = &[1, 2, 1, 1, 2, 1, 0];

    #[test]
    fn known_transform() {
        let suffix_array: Vec<i32> = vec![6, 5, 2, 3, 0, 4, 1];

        assert_eq!(
            bwt_from_suffix_array(&suffix_array, TEXT),
            [1, 2, 2, 1, 0, 1, 1]
        );
    }

    fn naive_rotation_sort_bwt(text: &[u8]) -> Vec<u8> {
        let mut rotations: Vec<Vec<u8>> = (0..text.len())
            .map(|i| {
                text[i..]
                    .iter()
                    .chain(text[..i].iter())
                    .copied()
                    .collect()
            })
            .collect();

        rotations.sort();

        rotations
            .into_iter()
            .map(|rotation| *rotation.last().unwrap())
            .collect()
    }

    proptest! {
        #[test]
        fn matches_rotation_sort(mut text in prop::collection::vec(1u8..8, 0..500)) {
            // the unique minimal sentinel makes the rotation order coincide
            // with the suffix order
            text.push(0);

            let suffix_array = libsais::SuffixArrayConstruction::for_text(&text)
                .in_owned_buffer32()
                .single_threaded()
                .run()
                .unwrap()
                .into_vec();

            assert_eq!(
                bwt_from_suffix_array(&suffix_array, &text),
                naive_rotation_sort_bwt(&text)
            );
        }
    }
}
