use fanflow::Shutdown;
use std::time::Duration;
use tokio::time::timeout;

#[tokio::test]
async fn trigger_transitions_exactly_once() {
    let shutdown = Shutdown::new();
    assert!(!shutdown.is_triggered());
    assert!(shutdown.trigger());
    assert!(shutdown.is_triggered());
    assert!(!shutdown.trigger());
    assert!(shutdown.is_triggered());
}

#[tokio::test]
async fn triggered_resolves_immediately_when_already_fired() {
    let shutdown = Shutdown::new();
    shutdown.trigger();
    timeout(Duration::from_millis(100), shutdown.triggered())
        .await
        .unwrap();
}

#[tokio::test]
async fn triggered_wakes_pending_waiters() {
    let shutdown = Shutdown::new();
    let waiter = {
        let shutdown = shutdown.clone();
        tokio::spawn(async move { shutdown.triggered().await })
    };
    // Give the waiter time to block before firing
    tokio::time::sleep(Duration::from_millis(20)).await;
    shutdown.trigger();
    timeout(Duration::from_secs(1), waiter)
        .await
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn clones_share_the_same_signal() {
    let shutdown = Shutdown::new();
    let other = shutdown.clone();
    shutdown.trigger();
    assert!(other.is_triggered());
    timeout(Duration::from_millis(100), other.triggered())
        .await
        .unwrap();
}

#[tokio::test]
async fn guard_triggers_on_drop() {
    let shutdown = Shutdown::new();
    {
        let _guard = shutdown.guard();
        assert!(!shutdown.is_triggered());
    }
    assert!(shutdown.is_triggered());
}

#[tokio::test]
async fn guard_drop_after_manual_trigger_is_harmless() {
    let shutdown = Shutdown::new();
    let guard = shutdown.guard();
    assert!(guard.shutdown().trigger());
    drop(guard);
    assert!(shutdown.is_triggered());
}
