mod core;


pub use self::core::{DEFAULT_CHUNK_BYTES, DEFAULT_QUEUE_CAPACITY, PipelineConfig, run};
