//! Run-level error type.
//!
//! Chunk-scoped decode failures never surface here — workers log and discard
//! those. What remains is fatal to the run: unreadable input, a file the
//! splitter cannot legally partition, or a configuration that cannot work.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::chunk::ChunkError;

/// Fatal pipeline failure; no partial report is produced.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Opening or reading an input file failed.
    #[error("{}: {source}", path.display())]
    Io {
        /// The file being read
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Splitting an input file failed (word exceeding the chunk budget).
    #[error("{}: {source}", path.display())]
    Split {
        /// The file being split
        path: PathBuf,
        #[source]
        source: ChunkError,
    },

    /// Unusable run configuration.
    #[error("invalid configuration: {0}")]
    Config(&'static str),

    /// The run was started with no input files.
    #[error("no input files given")]
    NoFiles,
}
