//! Single-pass word/vowel scan over one chunk.
//!
//! Drives every byte through a fresh decoder and classifies the resulting
//! code points. A word is credited when it opens; each vowel class is
//! credited at most once per word. The scan touches no shared state — it
//! returns a value for the caller to merge.

use crate::chunk::Chunk;
use crate::classify::{VOWEL_CLASSES, is_word_char, vowel_of};
use crate::decode::{DecodeError, Utf8Decoder};

/// Output of analyzing one chunk: word count plus, per vowel class, the
/// count of words containing that vowel (not vowel occurrences).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialResult {
    /// Owning file of the analyzed chunk
    pub file_id: usize,
    /// Words opened inside the chunk
    pub words: u64,
    /// Words containing at least one vowel of each class, order A E I O U Y
    pub vowel_words: [u64; VOWEL_CLASSES],
}

impl PartialResult {
    pub fn new(file_id: usize) -> Self {
        Self {
            file_id,
            ..Default::default()
        }
    }
}

/// Scan one chunk's bytes into a `PartialResult`.
///
/// A word opens at the first word-constituent code point and closes at the
/// next non-word code point; the per-word vowel flags reset exactly there.
/// A chunk ending in-word is already fully counted (the word and its vowels
/// were credited as they appeared), which is consistent because chunk
/// boundaries fall on separators.
pub fn analyze_chunk(chunk: &Chunk) -> Result<PartialResult, DecodeError> {
    let mut result = PartialResult::new(chunk.file_id);
    let mut decoder = Utf8Decoder::new();
    let mut in_word = false;
    let mut seen = [false; VOWEL_CLASSES];

    for &byte in &chunk.bytes {
        let Some(cp) = decoder.feed(byte)? else {
            continue;
        };
        if is_word_char(cp, in_word) {
            if !in_word {
                in_word = true;
                result.words += 1;
            }
            if let Some(v) = vowel_of(cp) {
                let i = v.index();
                if !seen[i] {
                    seen[i] = true;
                    result.vowel_words[i] += 1;
                }
            }
        } else {
            in_word = false;
            seen = [false; VOWEL_CLASSES];
        }
    }
    decoder.finish()?;

    Ok(result)
}
