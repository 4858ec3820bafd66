use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn logout_event_carries_logout_action() {
    assert_eq!(SessionEnded::logout().action, "logout");
}

#[test]
fn emit_reaches_every_subscriber() {
    let events = SessionEvents::new();
    let hits = Arc::new(AtomicUsize::new(0));
    for _ in 0..2 {
        let hits = hits.clone();
        events.subscribe(move |event| {
            assert_eq!(event.action, LOGOUT_ACTION);
            hits.fetch_add(1, Ordering::SeqCst);
        });
    }
    events.emit(&SessionEnded::logout());
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[test]
fn unsubscribed_listener_is_not_called() {
    let events = SessionEvents::new();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let id = events.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    assert!(events.unsubscribe(id));
    assert!(!events.unsubscribe(id));
    events.emit(&SessionEnded::logout());
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert_eq!(events.listener_count(), 0);
}

#[test]
fn listener_may_subscribe_during_emit() {
    let events = SessionEvents::new();
    let inner = events.clone();
    events.subscribe(move |_| {
        inner.subscribe(|_| {});
    });
    events.emit(&SessionEnded::logout());
    assert_eq!(events.listener_count(), 2);
}

#[test]
fn poisoned_registry_degrades_without_panicking() {
    let events = SessionEvents::new();
    let registry = Arc::clone(&events.registry);
    let _ = std::thread::spawn(move || {
        let _held = registry.lock().unwrap();
        panic!("poison the registry");
    })
    .join();

    let id = events.subscribe(|_| {});
    assert_eq!(id, SubscriptionId(u64::MAX));
    assert!(!events.unsubscribe(id));
    assert_eq!(events.listener_count(), 0);
    events.emit(&SessionEnded::logout());
}
