//! Separator-aligned chunk splitting.
//!
//! A file is cut into chunks of at most `budget` bytes, each ending exactly
//! after a separator byte so no word ever spans two chunks. Separators are
//! single-byte ASCII, which also guarantees no multi-byte UTF-8 sequence
//! straddles a chunk boundary — workers can decode each chunk independently.

use std::io::{self, Read, Seek, SeekFrom};

use memchr::{memrchr, memrchr3};
use thiserror::Error;

/// Splitting failure.
#[derive(Error, Debug)]
pub enum ChunkError {
    /// Underlying read or seek failed.
    #[error("{0}")]
    Io(#[from] io::Error),

    /// A full window of `budget` bytes contains no separator: some word is
    /// longer than the budget and cannot be emitted without splitting it.
    #[error("no separator within {budget} bytes; word exceeds chunk budget")]
    NoSeparator {
        /// The configured chunk byte budget
        budget: usize,
    },

    /// The budget must allow at least one byte per chunk.
    #[error("chunk budget must be at least 1 byte")]
    ZeroBudget,
}

/// An identified slice of raw bytes belonging to one source file.
/// Immutable once handed to a consumer; discarded after processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Index of the owning file in the run's file list
    pub file_id: usize,
    /// The chunk payload
    pub bytes: Vec<u8>,
}

impl Chunk {
    pub fn new(file_id: usize, bytes: Vec<u8>) -> Self {
        Self { file_id, bytes }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Offset of the last separator byte in `buf`, if any.
/// memrchr covers three needles; carriage return gets its own pass.
#[inline]
fn last_separator(buf: &[u8]) -> Option<usize> {
    match (memrchr3(b' ', b'\n', b'\t', buf), memrchr(b'\r', buf)) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    }
}

/// Cuts a byte source into separator-aligned chunks of bounded size.
///
/// Works over any `Read + Seek` source: a `File`, or a `Cursor` over mmap'd
/// bytes. Each attempt reads up to `budget` bytes, scans backward for the
/// last separator, emits everything up to and including it, and rewinds the
/// source past the unconsumed tail so those bytes lead the next window.
#[derive(Debug)]
pub struct ChunkSplitter<R> {
    source: R,
    file_id: usize,
    budget: usize,
    done: bool,
}

impl<R: Read + Seek> ChunkSplitter<R> {
    pub fn new(source: R, file_id: usize, budget: usize) -> Result<Self, ChunkError> {
        if budget == 0 {
            return Err(ChunkError::ZeroBudget);
        }
        Ok(Self {
            source,
            file_id,
            budget,
            done: false,
        })
    }

    /// Produce the next chunk, or `None` at end of input.
    ///
    /// Every chunk except possibly the last ends with a separator byte. The
    /// last chunk of a file may end mid-word only when no separator exists
    /// before EOF; it is emitted rather than dropped so that concatenating
    /// all chunks reproduces the file exactly.
    pub fn next_chunk(&mut self) -> Result<Option<Chunk>, ChunkError> {
        if self.done {
            return Ok(None);
        }

        let mut buf = vec![0u8; self.budget];
        let n = read_window(&mut self.source, &mut buf)?;
        if n == 0 {
            self.done = true;
            return Ok(None);
        }
        buf.truncate(n);

        match last_separator(&buf) {
            Some(k) => {
                // Un-read the tail past the separator; it leads the next window.
                let tail = (n - k - 1) as i64;
                if tail > 0 {
                    self.source.seek(SeekFrom::Current(-tail))?;
                }
                buf.truncate(k + 1);
                Ok(Some(Chunk::new(self.file_id, buf)))
            }
            None if n < self.budget => {
                // Short read means EOF: trailing bytes with no separator form
                // the final, unterminated chunk.
                self.done = true;
                log::debug!(
                    "file {}: emitting {} trailing bytes with no separator",
                    self.file_id,
                    n
                );
                Ok(Some(Chunk::new(self.file_id, buf)))
            }
            None => {
                // Full window, no separator. Probe one byte to distinguish a
                // file ending exactly at the window edge from a word that
                // genuinely exceeds the budget.
                let mut probe = [0u8; 1];
                if self.source.read(&mut probe)? == 0 {
                    self.done = true;
                    return Ok(Some(Chunk::new(self.file_id, buf)));
                }
                self.source.seek(SeekFrom::Current(-1))?;
                Err(ChunkError::NoSeparator {
                    budget: self.budget,
                })
            }
        }
    }
}

/// Iterator over chunks; yields errors in place so callers can `?` per item.
impl<R: Read + Seek> Iterator for ChunkSplitter<R> {
    type Item = Result<Chunk, ChunkError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_chunk() {
            Ok(Some(chunk)) => Some(Ok(chunk)),
            Ok(None) => None,
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Fill `buf` as far as the source allows, retrying on partial reads.
/// A return shorter than `buf` means EOF was reached.
fn read_window(source: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut total = 0;
    while total < buf.len() {
        match source.read(&mut buf[total..]) {
            Ok(0) => break,
            Ok(n) => total += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(total)
}
