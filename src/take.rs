//! Bounded consumption: yield at most the first `n` items of a stream.

use async_stream::stream;
use futures_core::Stream;
use futures_util::{pin_mut, stream::StreamExt};

use crate::shutdown::Shutdown;
use crate::source::FlowStream;

/// Yield at most the first `n` items of `s`, racing each read against
/// `shutdown`.
///
/// The output closes after the nth item, on upstream closure, or on
/// shutdown, whichever comes first; `n == 0` yields an immediately closed
/// stream. Stopping early is not an error. `take` never triggers the
/// shutdown itself — that is the caller's job, typically via a
/// [`ShutdownGuard`](crate::shutdown::ShutdownGuard) held by the driver.
///
/// # Examples
/// ```
/// use fanflow::{from_iter_source, take, Shutdown};
/// use futures_util::stream::StreamExt;
///
/// # async fn example() {
/// let shutdown = Shutdown::new();
/// let source = from_iter_source(&shutdown, vec![1, 2, 3, 4, 5]);
/// let result = take(&shutdown, source.into_stream(), 3)
///     .collect::<Vec<_>>()
///     .await;
/// assert_eq!(result, vec![1, 2, 3]);
/// # }
/// ```
pub fn take<T, S>(shutdown: &Shutdown, s: S, n: usize) -> FlowStream<T>
where
    S: Stream<Item = T> + Send + 'static,
    T: Send + 'static,
{
    let shutdown = shutdown.clone();
    stream! {
        pin_mut!(s);
        for _ in 0..n {
            tokio::select! {
                biased;
                _ = shutdown.triggered() => break,
                maybe_item = s.next() => {
                    match maybe_item {
                        Some(item) => yield item,
                        None => break,
                    }
                }
            }
        }
    }
    .boxed()
}
