//! Worker stages: competing consumers over a shared [`Source`] that filter
//! or transform items onto their own private output stream.

use futures_util::stream::StreamExt;
use tokio::spawn;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::shutdown::Shutdown;
use crate::source::{FlowStream, Source, CHANNEL_DEPTH};

/// Spawn a worker that receives from `source`, applies `f`, and forwards
/// `Some` results on its own stream.
///
/// Starting several stages against clones of one `Source` fans the work out;
/// each input item reaches exactly one of them, whichever is ready to
/// receive. Every blocking receive and send is raced against `shutdown`; the
/// stage exits and closes its output when shutdown fires or the source
/// closes.
pub fn transform_stage<T, U, F>(shutdown: &Shutdown, source: Source<T>, mut f: F) -> FlowStream<U>
where
    T: Send + 'static,
    U: Send + 'static,
    F: FnMut(T) -> Option<U> + Send + 'static,
{
    let (tx, rx) = mpsc::channel(CHANNEL_DEPTH);
    let shutdown = shutdown.clone();
    spawn(async move {
        loop {
            let item = tokio::select! {
                biased;
                _ = shutdown.triggered() => break,
                received = source.recv() => match received {
                    Some(item) => item,
                    None => break,
                },
            };
            if let Some(out) = f(item) {
                tokio::select! {
                    biased;
                    _ = shutdown.triggered() => break,
                    sent = tx.send(out) => {
                        if sent.is_err() {
                            break;
                        }
                    }
                }
            }
        }
        log::trace!("worker stage stopped");
    });
    ReceiverStream::new(rx).boxed()
}

/// Predicate form of [`transform_stage`]: forward items for which
/// `predicate` holds, unchanged.
pub fn filter_stage<T, P>(shutdown: &Shutdown, source: Source<T>, predicate: P) -> FlowStream<T>
where
    T: Send + 'static,
    P: Fn(&T) -> bool + Send + 'static,
{
    transform_stage(shutdown, source, move |item| {
        if predicate(&item) {
            Some(item)
        } else {
            None
        }
    })
}
