use super::*;
use crate::classify::is_separator_byte;
use proptest::prelude::*;
use std::io::Cursor;

/// Split an in-memory buffer completely, panicking on any error.
fn split_all(data: &[u8], budget: usize) -> Vec<Chunk> {
    let splitter = ChunkSplitter::new(Cursor::new(data.to_vec()), 0, budget).unwrap();
    splitter.collect::<Result<Vec<_>, _>>().unwrap()
}

#[test]
fn test_empty_input_yields_no_chunks() {
    assert!(split_all(b"", 16).is_empty());
}

#[test]
fn test_single_chunk_when_budget_large() {
    let chunks = split_all(b"cat dog cat\n", 1024);
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].bytes, b"cat dog cat\n");
}

#[test]
fn test_chunks_end_after_separator() {
    let chunks = split_all(b"one two three four\n", 8);
    assert!(chunks.len() > 1);
    for chunk in &chunks[..chunks.len() - 1] {
        let last = *chunk.bytes.last().unwrap();
        assert!(is_separator_byte(last), "chunk ends with 0x{last:02X}");
    }
}

#[test]
fn test_concatenation_reproduces_input() {
    let data = b"alpha beta gamma delta epsilon zeta\n";
    let chunks = split_all(data, 10);
    let rebuilt: Vec<u8> = chunks.into_iter().flat_map(|c| c.bytes).collect();
    assert_eq!(rebuilt, data);
}

#[test]
fn test_no_chunk_exceeds_budget() {
    let chunks = split_all(b"aa bb cc dd ee ff gg hh\n", 5);
    for chunk in &chunks {
        assert!(chunk.size() <= 5);
    }
}

#[test]
fn test_trailing_bytes_without_separator_are_emitted() {
    // "tail" has no trailing separator; the final partial chunk keeps it
    let chunks = split_all(b"head tail", 16);
    let rebuilt: Vec<u8> = chunks.into_iter().flat_map(|c| c.bytes).collect();
    assert_eq!(rebuilt, b"head tail");
}

#[test]
fn test_word_longer_than_budget_is_an_error() {
    let mut splitter =
        ChunkSplitter::new(Cursor::new(b"supercalifragilistic ok".to_vec()), 0, 8).unwrap();
    match splitter.next_chunk() {
        Err(ChunkError::NoSeparator { budget: 8 }) => {}
        other => panic!("expected NoSeparator, got {other:?}"),
    }
}

#[test]
fn test_file_ending_exactly_at_window_edge() {
    // 8 bytes, budget 8, no separator at all: still the final chunk
    let chunks = split_all(b"exactly8", 8);
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].bytes, b"exactly8");
}

#[test]
fn test_zero_budget_rejected() {
    assert!(matches!(
        ChunkSplitter::new(Cursor::new(Vec::new()), 0, 0),
        Err(ChunkError::ZeroBudget)
    ));
}

#[test]
fn test_all_separator_kinds_are_split_points() {
    for sep in [b' ', b'\t', b'\n', b'\r'] {
        let mut data = b"aaa".to_vec();
        data.push(sep);
        data.extend_from_slice(b"bbb ");
        let chunks = split_all(&data, 4);
        assert_eq!(chunks[0].bytes.last(), Some(&sep));
    }
}

#[test]
fn test_multibyte_text_never_cut_mid_character() {
    // Latin-1 words in UTF-8: every boundary must fall after an ASCII
    // separator, never inside a 2-byte sequence.
    let data = "ação café météo über naïve\n".as_bytes();
    let chunks = split_all(data, 9);
    for chunk in &chunks {
        // Each chunk must itself be valid UTF-8
        assert!(std::str::from_utf8(&chunk.bytes).is_ok());
    }
}

#[test]
fn test_file_id_propagated() {
    let splitter = ChunkSplitter::new(Cursor::new(b"a b c ".to_vec()), 7, 4).unwrap();
    for chunk in splitter {
        assert_eq!(chunk.unwrap().file_id, 7);
    }
}

#[test]
fn test_error_ends_iteration() {
    let mut splitter =
        ChunkSplitter::new(Cursor::new(b"overlongword".to_vec()), 0, 4).unwrap();
    assert!(splitter.next().unwrap().is_err());
    assert!(splitter.next().is_none());
}

// ──────────────────────────────────────────────────
// Property tests
// ──────────────────────────────────────────────────

/// Words of 1..=6 word bytes joined by random separators, so any budget
/// >= 7 can always find a split point.
fn text_strategy() -> impl Strategy<Value = Vec<u8>> {
    let word = proptest::collection::vec(
        prop_oneof![Just(b'a'), Just(b'e'), Just(b'x'), Just(b'9'), Just(b'_')],
        1..=6,
    );
    let sep = prop_oneof![Just(b' '), Just(b'\t'), Just(b'\n'), Just(b'\r')];
    proptest::collection::vec((word, sep), 0..64).prop_map(|pairs| {
        let mut data = Vec::new();
        for (w, s) in pairs {
            data.extend_from_slice(&w);
            data.push(s);
        }
        data
    })
}

proptest! {
    #[test]
    fn prop_concatenation_reproduces_file(data in text_strategy(), budget in 7usize..64) {
        let chunks = split_all(&data, budget);
        let rebuilt: Vec<u8> = chunks.into_iter().flat_map(|c| c.bytes).collect();
        prop_assert_eq!(rebuilt, data);
    }

    #[test]
    fn prop_no_split_words(data in text_strategy(), budget in 7usize..64) {
        let chunks = split_all(&data, budget);
        if chunks.is_empty() {
            return Ok(());
        }
        for chunk in &chunks[..chunks.len() - 1] {
            prop_assert!(is_separator_byte(*chunk.bytes.last().unwrap()));
        }
        for chunk in &chunks {
            prop_assert!(chunk.size() <= budget);
            prop_assert!(!chunk.bytes.is_empty());
        }
    }
}
