use textdex::{
    FmIndex, FmIndexConfig,
    error::{Error, InputError},
};

fn create_index() -> FmIndex {
    FmIndexConfig::<i32>::new()
        .checkpoint_interval(5)
        .suffix_array_sampling_rate(5)
        .construct(b"panamabananas")
        .unwrap()
}

static BASIC_PATTERN: &[u8] = b"ana";
static REVERSED_PATTERN: &[u8] = b"naa";
static FRONT_PATTERN: &[u8] = b"pan";
static ABSENT_SYMBOL_PATTERN: &[u8] = b"xyz";

#[test]
fn basic_search() {
    let index = create_index();

    let mut results = index.locate(BASIC_PATTERN).unwrap();
    results.sort_unstable();

    assert_eq!(results, [1, 7, 9]);
    assert_eq!(index.count(BASIC_PATTERN).unwrap(), 3);
}

#[test]
fn reversed_pattern_does_not_occur() {
    let index = create_index();

    assert!(index.locate(REVERSED_PATTERN).unwrap().is_empty());
    assert_eq!(index.count(REVERSED_PATTERN).unwrap(), 0);
}

#[test]
fn text_front_search() {
    let index = create_index();

    assert_eq!(index.locate(FRONT_PATTERN).unwrap(), [0]);
}

#[test]
fn absent_symbols_are_a_negative_result() {
    let index = create_index();

    assert!(index.locate(ABSENT_SYMBOL_PATTERN).unwrap().is_empty());

    // the sentinel byte itself is never searchable
    assert!(index.locate(b"s$").unwrap().is_empty());
}

#[test]
fn merged_multi_pattern_search() {
    let index = create_index();

    let offsets = index.locate_many(&[b"ana".as_slice(), b"ban"]).unwrap();

    assert_eq!(offsets, [1, 6, 7, 9]);
}

#[test]
fn overlapping_patterns_are_reported_per_pattern() {
    let index = create_index();

    let offsets = index.locate_many(&[b"ana".as_slice(), b"ana"]).unwrap();

    assert_eq!(offsets, [1, 1, 7, 7, 9, 9]);
}

#[test]
fn empty_pattern_is_rejected() {
    let index = create_index();

    assert_eq!(
        index.locate(b"").unwrap_err(),
        Error::Input(InputError::EmptyPattern)
    );
}

#[test]
fn sentinel_in_text_is_rejected() {
    let result = FmIndexConfig::<i32>::new().construct(b"pa$namabananas");

    assert_eq!(
        result.err(),
        Some(Error::Input(InputError::SentinelInText { offset: 2 }))
    );
}

#[test]
fn text_recovery() {
    let index = create_index();

    assert_eq!(index.recover_text().unwrap(), b"panamabananas");
}

#[test]
fn cursor_backwards_search() {
    let index = create_index();

    let mut cursor = index.cursor_empty();

    for &symbol in b"ana".iter().rev() {
        cursor.extend_front(symbol).unwrap();
    }

    assert_eq!(cursor.count(), 3);

    let mut results = cursor.locate().unwrap();
    results.sort_unstable();

    assert_eq!(results, [1, 7, 9]);

    // extending past a mismatch empties the cursor for good
    cursor.extend_front(b'x').unwrap();
    assert!(cursor.is_empty());

    cursor.extend_front(b'a').unwrap();
    assert_eq!(cursor.count(), 0);
}

#[test]
fn empty_text() {
    let index = FmIndexConfig::<i32>::new().construct(b"").unwrap();

    assert!(index.locate(b"a").unwrap().is_empty());
    assert_eq!(index.recover_text().unwrap(), b"");
}
