//! fanflow - fan-out/fan-in streaming pipelines with cooperative shutdown
//!
//! An unbounded producer feeds a shared stream, parallel worker stages
//! filter or transform it as competing consumers, the per-worker outputs
//! are merged back into one stream, and a bounded take yields the first `n`
//! results before a shared shutdown signal stops every task.

pub mod merge;
pub mod pipeline;
pub mod primes;
pub mod shutdown;
pub mod source;
pub mod stage;
pub mod take;

// Re-export the combinators and signal types at the crate root
pub use merge::fan_in;
pub use pipeline::{filter_pipeline, PipelineConfig};
pub use shutdown::{Shutdown, ShutdownGuard};
pub use source::{from_iter_source, repeat_eval, FlowStream, Source};
pub use stage::{filter_stage, transform_stage};
pub use take::take;
