/// Use mimalloc as the global allocator.
/// The splitter allocates one owned buffer per chunk, so a run over large
/// inputs performs many small short-lived allocations; mimalloc's thread-local
/// caching keeps that cheap across the worker pool.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod analyze;
pub mod chunk;
pub mod classify;
pub mod common;
pub mod decode;
pub mod error;
pub mod pipeline;
pub mod queue;
pub mod region;
