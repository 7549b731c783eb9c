mod core;


pub use self::core::{PartialResult, analyze_chunk};
