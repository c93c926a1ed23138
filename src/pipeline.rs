//! Driver that wires the combinators into the full fan-out/fan-in pipeline.

use crate::merge::fan_in;
use crate::shutdown::{Shutdown, ShutdownGuard};
use crate::source::{repeat_eval, FlowStream};
use crate::stage::filter_stage;
use crate::take::take;

/// In-process pipeline configuration.
///
/// There is deliberately no CLI, environment or file surface behind this;
/// callers construct it directly.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Number of concurrent worker stages competing for the source.
    pub workers: usize,
    /// Number of results to collect before shutdown.
    pub limit: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
            limit: 10,
        }
    }
}

/// Wire producer → workers (fan-out) → fan-in → bounded take.
///
/// Returns the bounded result stream together with the guard that triggers
/// shutdown of every pipeline task when dropped, on any exit path of the
/// caller. A `workers` count of zero is not rejected; such a pipeline never
/// produces output.
///
/// # Examples
/// ```
/// use fanflow::{filter_pipeline, PipelineConfig};
/// use futures_util::stream::StreamExt;
///
/// # async fn example() {
/// let config = PipelineConfig { workers: 2, limit: 5 };
/// let mut counter = 0u64;
/// let (evens, _guard) = filter_pipeline(
///     &config,
///     move || {
///         counter += 1;
///         counter
///     },
///     |n| n % 2 == 0,
/// );
/// let result = evens.collect::<Vec<_>>().await;
/// assert_eq!(result.len(), 5);
/// # }
/// ```
pub fn filter_pipeline<T, F, P>(
    config: &PipelineConfig,
    producer: F,
    predicate: P,
) -> (FlowStream<T>, ShutdownGuard)
where
    T: Send + 'static,
    F: FnMut() -> T + Send + 'static,
    P: Fn(&T) -> bool + Send + Clone + 'static,
{
    let shutdown = Shutdown::new();
    log::debug!(
        "starting filter pipeline: {} workers, limit {}",
        config.workers,
        config.limit
    );

    let source = repeat_eval(&shutdown, producer);
    let outputs: Vec<FlowStream<T>> = (0..config.workers)
        .map(|_| filter_stage(&shutdown, source.clone(), predicate.clone()))
        .collect();
    let merged = fan_in(&shutdown, outputs);
    let bounded = take(&shutdown, merged, config.limit);

    let guard = shutdown.guard();
    (bounded, guard)
}
