//! Fan-in: merge independently produced streams into one, closing the
//! merged stream only after every input has closed.

use futures_core::Stream;
use futures_util::stream::StreamExt;
use tokio::spawn;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::shutdown::Shutdown;
use crate::source::{FlowStream, CHANNEL_DEPTH};

/// Merge `inputs` into a single stream, preserving no ordering across
/// sources.
///
/// One forwarder task drains each input and races every send against
/// `shutdown`. Each forwarder owns a clone of the merged sender that dies
/// with it, so the merged stream closes exactly when the last forwarder has
/// exited: all inputs closed, or shutdown cut them short. Every value seen
/// on an input before its closure is forwarded exactly once, unless shutdown
/// intervenes mid-send.
pub fn fan_in<T, S>(shutdown: &Shutdown, inputs: Vec<S>) -> FlowStream<T>
where
    S: Stream<Item = T> + Send + 'static + Unpin,
    T: Send + 'static,
{
    let (tx, rx) = mpsc::channel(CHANNEL_DEPTH);

    let mut forwarders = Vec::with_capacity(inputs.len());
    for mut input in inputs {
        let tx = tx.clone();
        let shutdown = shutdown.clone();
        forwarders.push(spawn(async move {
            while let Some(item) = input.next().await {
                tokio::select! {
                    biased;
                    _ = shutdown.triggered() => return,
                    sent = tx.send(item) => {
                        if sent.is_err() {
                            return;
                        }
                    }
                }
            }
        }));
    }
    drop(tx);

    // Join the forwarders so stragglers are observed before the closure of
    // the merged stream is reported.
    spawn(async move {
        for handle in forwarders {
            if let Err(err) = handle.await {
                log::debug!("fan_in forwarder task failed: {}", err);
            }
        }
        log::trace!("fan_in closed after all forwarders finished");
    });

    ReceiverStream::new(rx).boxed()
}
