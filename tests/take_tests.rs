use fanflow::{from_iter_source, repeat_eval, take, Shutdown};
use futures_util::stream::StreamExt;
use quickcheck::quickcheck;
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::time::timeout;

#[tokio::test]
async fn take_yields_the_first_n_in_order() {
    let shutdown = Shutdown::new();
    let source = from_iter_source(&shutdown, vec![1, 2, 3, 4, 5]);
    let result = take(&shutdown, source.into_stream(), 3)
        .collect::<Vec<_>>()
        .await;
    assert_eq!(result, vec![1, 2, 3]);
}

#[tokio::test]
async fn take_zero_is_an_empty_closed_stream() {
    let shutdown = Shutdown::new();
    let source = repeat_eval(&shutdown, || 1u32);
    let result = timeout(
        Duration::from_secs(1),
        take(&shutdown, source.into_stream(), 0).collect::<Vec<_>>(),
    )
    .await
    .unwrap();
    assert!(result.is_empty());
}

#[tokio::test]
async fn take_stops_short_when_upstream_closes() {
    let shutdown = Shutdown::new();
    let source = from_iter_source(&shutdown, vec![1, 2, 3]);
    let result = take(&shutdown, source.into_stream(), 10)
        .collect::<Vec<_>>()
        .await;
    assert_eq!(result, vec![1, 2, 3]);
}

#[tokio::test]
async fn take_ends_early_on_shutdown() {
    let shutdown = Shutdown::new();
    let source = repeat_eval(&shutdown, || 1u32);
    let mut bounded = take(&shutdown, source.into_stream(), 1_000_000);

    assert_eq!(bounded.next().await, Some(1));
    shutdown.trigger();
    let rest = timeout(Duration::from_secs(1), bounded.collect::<Vec<_>>())
        .await
        .unwrap();
    assert!(rest.len() <= 2, "got {} values after shutdown", rest.len());
}

quickcheck! {
    fn take_is_bounded_by_min_of_n_and_available(items: Vec<u32>, n: usize) -> bool {
        let n = n % 64;
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let shutdown = Shutdown::new();
            let expected: Vec<u32> = items.iter().take(n).cloned().collect();
            let source = from_iter_source(&shutdown, items.clone());
            let result = take(&shutdown, source.into_stream(), n)
                .collect::<Vec<_>>()
                .await;
            result == expected
        })
    }
}
