mod core;


pub use self::core::{ChunkQueue, WorkItem};
