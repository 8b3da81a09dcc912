//! Integration tests implementing `SingletonApi` by hand, without the macro.
//!
//! NOTE: All tests use #[serial] because they share the same static registry.
//! The static is initialized by whichever test runs first, so every assertion
//! compares against the value actually stored rather than a fixed string.

use aircraft_patterns::{LazySingletonRegistry, SingletonApi};
use serial_test::serial;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

static MY_REGISTRY: LazySingletonRegistry = LazySingletonRegistry::new();

struct MySingleton;

impl SingletonApi for MySingleton {
    fn registry() -> &'static LazySingletonRegistry {
        &MY_REGISTRY
    }
}

const MY_SINGLETON: MySingleton = MySingleton;

#[test]
#[serial]
fn test_repeated_acquire_is_idempotent() {
    let first = MY_SINGLETON.acquire("one");

    for candidate in ["two", "three", ""] {
        let again = MY_SINGLETON.acquire(candidate);
        assert!(Arc::ptr_eq(&first, &again));
        assert_eq!(again.value(), first.value());
    }
}

#[test]
#[serial]
fn test_get_after_acquire() {
    let acquired = MY_SINGLETON.acquire("get");

    assert!(MY_SINGLETON.is_initialized());
    assert_eq!(MY_SINGLETON.get().unwrap().value(), acquired.value());
}

#[test]
#[serial]
fn test_constructor_not_called_once_initialized() {
    MY_SINGLETON.acquire("seed");

    let called = AtomicUsize::new(0);
    MY_SINGLETON.acquire_with(|| {
        called.fetch_add(1, Ordering::SeqCst);
        "late".to_string()
    });

    assert_eq!(called.load(Ordering::SeqCst), 0);
}

#[test]
#[serial]
fn test_with_tracing() {
    let event_count = Arc::new(AtomicUsize::new(0));
    let event_count_clone = Arc::clone(&event_count);

    MY_SINGLETON.set_trace_callback(move |_event| {
        event_count_clone.fetch_add(1, Ordering::SeqCst);
    });

    MY_SINGLETON.acquire("traced"); // +1 event
    let _ = MY_SINGLETON.get(); // +1 event

    assert_eq!(event_count.load(Ordering::SeqCst), 2);

    MY_SINGLETON.clear_trace_callback();
}
