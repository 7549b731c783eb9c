//! Coordinator: splits files into chunks, feeds the worker pool, and
//! collects per-file totals.
//!
//! One coordinator thread produces chunks in file order; N symmetric,
//! stateless workers race to consume them. The queue and the aggregation
//! region are the only shared mutable state. Termination is a sentinel
//! drain followed by a completion barrier: the coordinator blocks until
//! every chunk it sent has been merged or discarded.

use std::io::Cursor;
use std::path::Path;
use std::thread;

use crate::analyze::analyze_chunk;
use crate::chunk::ChunkSplitter;
use crate::common::io::read_file;
use crate::error::PipelineError;
use crate::queue::{ChunkQueue, WorkItem};
use crate::region::{AggregationRegion, FileCounters};

/// Default chunk byte budget.
pub const DEFAULT_CHUNK_BYTES: usize = 4096;

/// Default work-queue depth.
pub const DEFAULT_QUEUE_CAPACITY: usize = 10;

/// Run parameters.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Maximum chunk size in bytes
    pub chunk_bytes: usize,
    /// Worker thread count
    pub workers: usize,
    /// Work-queue capacity in chunks
    pub queue_capacity: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunk_bytes: DEFAULT_CHUNK_BYTES,
            workers: num_cpus::get(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl PipelineConfig {
    fn validate(&self) -> Result<(), PipelineError> {
        if self.chunk_bytes == 0 {
            return Err(PipelineError::Config("chunk size must be at least 1 byte"));
        }
        if self.workers == 0 {
            return Err(PipelineError::Config("worker count must be at least 1"));
        }
        if self.queue_capacity == 0 {
            return Err(PipelineError::Config("queue capacity must be at least 1"));
        }
        Ok(())
    }
}

/// Analyze all `files` and return one `FileCounters` per file, in input
/// order.
///
/// Any file open/read or split failure is fatal: the coordinator stops
/// producing, still delivers one sentinel per worker, drains outstanding
/// merges, and returns the error. Malformed chunks are not fatal — workers
/// log and discard them and the run continues.
pub fn run<P: AsRef<Path>>(
    files: &[P],
    config: &PipelineConfig,
) -> Result<Vec<FileCounters>, PipelineError> {
    config.validate()?;
    if files.is_empty() {
        return Err(PipelineError::NoFiles);
    }

    let region = AggregationRegion::new(
        files
            .iter()
            .map(|p| p.as_ref().display().to_string()),
    );
    let queue = ChunkQueue::with_capacity(config.queue_capacity);

    let mut fatal: Option<PipelineError> = None;
    let mut sent: u64 = 0;

    thread::scope(|scope| {
        let queue = &queue;
        let region = &region;
        for worker_id in 0..config.workers {
            scope.spawn(move || worker_loop(worker_id, queue, region));
        }
        log::debug!("spawned {} workers", config.workers);

        // Chunks of each file are enqueued in file order. Workers race to
        // dequeue, so merge order is unspecified; merging is commutative.
        'files: for (file_id, path) in files.iter().enumerate() {
            let path = path.as_ref();
            let data = match read_file(path) {
                Ok(data) => data,
                Err(source) => {
                    fatal = Some(PipelineError::Io {
                        path: path.to_path_buf(),
                        source,
                    });
                    break;
                }
            };
            let splitter =
                match ChunkSplitter::new(Cursor::new(&data[..]), file_id, config.chunk_bytes) {
                    Ok(splitter) => splitter,
                    Err(source) => {
                        fatal = Some(split_error(path, source));
                        break;
                    }
                };
            let before = sent;
            for item in splitter {
                match item {
                    Ok(chunk) => {
                        queue.put(WorkItem::Chunk(chunk));
                        sent += 1;
                    }
                    Err(source) => {
                        fatal = Some(split_error(path, source));
                        break 'files;
                    }
                }
            }
            log::debug!("file {}: {} chunks sent", path.display(), sent - before);
        }

        // Exactly one sentinel per worker, then the completion barrier:
        // chunks sent must equal results accounted before totals are read.
        for _ in 0..config.workers {
            queue.put(WorkItem::Shutdown);
        }
        region.wait_merged(sent);
    });

    if let Some(err) = fatal {
        return Err(err);
    }
    if region.discarded() > 0 {
        log::warn!(
            "{} of {} chunks discarded due to decode errors",
            region.discarded(),
            sent
        );
    }
    Ok(region.snapshot())
}

fn split_error(path: &Path, source: crate::chunk::ChunkError) -> PipelineError {
    PipelineError::Split {
        path: path.to_path_buf(),
        source,
    }
}

/// Worker life cycle: take, analyze, merge; exit on the sentinel.
/// Workers keep no state between chunks.
fn worker_loop(worker_id: usize, queue: &ChunkQueue, region: &AggregationRegion) {
    loop {
        match queue.take() {
            WorkItem::Chunk(chunk) => match analyze_chunk(&chunk) {
                Ok(result) => region.merge_partial(&result),
                Err(err) => {
                    log::warn!(
                        "worker {worker_id}: skipping chunk of file id {}: {err}",
                        chunk.file_id
                    );
                    region.discard(chunk.file_id);
                }
            },
            WorkItem::Shutdown => {
                log::debug!("worker {worker_id}: shutdown");
                break;
            }
        }
    }
}
