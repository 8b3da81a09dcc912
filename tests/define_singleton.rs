//! Integration tests for `define_singleton!`: isolation and tracing.

use aircraft_patterns::{define_singleton, race, single_winner, Error, RegistryEvent, SingletonApi};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[test]
fn test_singletons_are_isolated() {
    define_singleton!(tower);
    define_singleton!(ground);

    tower::acquire("tower frequency");

    assert!(tower::is_initialized());
    assert!(!ground::is_initialized());
    assert_eq!(ground::get().unwrap_err(), Error::NotInitialized);

    ground::acquire("ground frequency");
    assert_eq!(tower::get().unwrap().value(), "tower frequency");
    assert_eq!(ground::get().unwrap().value(), "ground frequency");
}

#[test]
fn test_sequential_first_value_wins() {
    define_singleton!(sequential);

    assert_eq!(sequential::acquire("A").value(), "A");
    assert_eq!(sequential::acquire("B").value(), "A");
    assert_eq!(sequential::acquire_with(|| "C".into()).value(), "A");
}

#[test]
fn test_trait_access_through_api_constant() {
    define_singleton!(via_trait);

    let instance = via_trait::API.acquire("trait");
    assert_eq!(instance.value(), "trait");
    assert!(via_trait::API.is_initialized());
    assert!(Arc::ptr_eq(&instance, &via_trait::API.get().unwrap()));
}

#[test]
fn test_race_against_static_registry() {
    define_singleton!(raced);

    let outcomes = race(raced::registry(), &["FOO", "BAR"], Duration::from_millis(1));
    let winner = single_winner(&outcomes).unwrap();

    assert_eq!(raced::get().unwrap().value(), winner);
}

#[test]
fn test_try_acquire_with_retry() {
    define_singleton!(fallible);

    let err = fallible::try_acquire_with(|| Err::<String, _>("no fix")).unwrap_err();
    assert_eq!(err, "no fix");
    assert!(!fallible::is_initialized());

    let ok = fallible::try_acquire_with(|| Ok::<_, &str>("fix".to_string())).unwrap();
    assert_eq!(ok.value(), "fix");
}

#[test]
fn test_tracing_events() {
    define_singleton!(traced);

    let events = Arc::new(Mutex::new(Vec::new()));
    let events_clone = events.clone();

    traced::set_trace_callback(move |event| {
        events_clone.lock().unwrap().push(format!("{}", event));
    });

    let _ = traced::get();
    traced::acquire("FOO");
    traced::acquire("BAR");

    traced::clear_trace_callback();
    traced::acquire("ignored");

    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 3);
    assert_eq!(captured[0], "get { found: false }");
    assert_eq!(captured[1], "acquire { value: FOO, initialized: true }");
    assert_eq!(captured[2], "acquire { value: FOO, initialized: false }");
}

#[test]
fn test_trace_counts_initializations() {
    define_singleton!(counted);

    let initializations = Arc::new(Mutex::new(0));
    let init_clone = initializations.clone();

    counted::set_trace_callback(move |event| {
        if let RegistryEvent::Acquire {
            initialized: true, ..
        } = event
        {
            *init_clone.lock().unwrap() += 1;
        }
    });

    let candidates: Vec<String> = (0..16).map(|i| i.to_string()).collect();
    race(counted::registry(), &candidates, Duration::ZERO);

    assert_eq!(*initializations.lock().unwrap(), 1);
}
