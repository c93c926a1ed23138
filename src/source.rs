//! Stream sources: the unbounded repeat-eval producer and the shared
//! receiver handle that fans its output out to competing workers.

use async_stream::stream;
use futures_util::stream::{BoxStream, StreamExt};
use std::sync::Arc;
use tokio::spawn;
use tokio::sync::{mpsc, Mutex};

use crate::shutdown::Shutdown;

/// A boxed, heap-allocated stream of values, the crate-wide stream type.
pub type FlowStream<O> = BoxStream<'static, O>;

// Channels carry at most one in-flight item, matching the unbuffered
// channels of the classic pipeline shape this crate reproduces.
pub(crate) const CHANNEL_DEPTH: usize = 1;

/// Cloneable handle to a shared stream of values.
///
/// Clones form a competing-consumer group: each item is delivered to exactly
/// one caller of [`recv`](Source::recv), whichever is ready first. This is
/// the fan-out side of the pipeline, not a broadcast.
pub struct Source<T> {
    rx: Arc<Mutex<mpsc::Receiver<T>>>,
}

impl<T> Clone for Source<T> {
    fn clone(&self) -> Self {
        Source {
            rx: Arc::clone(&self.rx),
        }
    }
}

impl<T> Source<T>
where
    T: Send + 'static,
{
    pub(crate) fn new(rx: mpsc::Receiver<T>) -> Self {
        Source {
            rx: Arc::new(Mutex::new(rx)),
        }
    }

    /// Receive the next item, or `None` once the source has closed and
    /// drained.
    pub async fn recv(&self) -> Option<T> {
        self.rx.lock().await.recv().await
    }

    /// Adapt the handle into a plain stream for single-consumer use.
    pub fn into_stream(self) -> FlowStream<T> {
        stream! {
            while let Some(item) = self.recv().await {
                yield item;
            }
        }
        .boxed()
    }
}

/// Repeatedly evaluate `producer` and publish each value, racing every send
/// against `shutdown`.
///
/// The source closes when shutdown fires or every handle is dropped. A value
/// already computed when the race is lost is dropped; that is the accepted
/// in-flight loss of cooperative teardown.
pub fn repeat_eval<T, F>(shutdown: &Shutdown, mut producer: F) -> Source<T>
where
    T: Send + 'static,
    F: FnMut() -> T + Send + 'static,
{
    let (tx, rx) = mpsc::channel(CHANNEL_DEPTH);
    let shutdown = shutdown.clone();
    spawn(async move {
        loop {
            let value = producer();
            tokio::select! {
                biased;
                _ = shutdown.triggered() => break,
                sent = tx.send(value) => {
                    if sent.is_err() {
                        break;
                    }
                }
            }
        }
        log::trace!("repeat_eval source stopped");
    });
    Source::new(rx)
}

/// Publish the items of `iter` in order, then close.
///
/// Finite counterpart of [`repeat_eval`]; sends race against `shutdown` the
/// same way.
pub fn from_iter_source<T, I>(shutdown: &Shutdown, iter: I) -> Source<T>
where
    T: Send + 'static,
    I: IntoIterator<Item = T> + Send + 'static,
    I::IntoIter: Send,
{
    let (tx, rx) = mpsc::channel(CHANNEL_DEPTH);
    let shutdown = shutdown.clone();
    spawn(async move {
        for value in iter {
            tokio::select! {
                biased;
                _ = shutdown.triggered() => return,
                sent = tx.send(value) => {
                    if sent.is_err() {
                        return;
                    }
                }
            }
        }
        log::trace!("finite source exhausted");
    });
    Source::new(rx)
}
