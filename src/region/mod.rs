mod core;


pub use self::core::{AggregationRegion, FileCounters};
