//! Drives several threads into a registry at once and records what each saw.

use std::sync::Barrier;
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::LazySingletonRegistry;

/// What one racing caller supplied and what it got back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceOutcome {
    pub candidate: String,
    pub observed: String,
}

/// Spawn one thread per candidate. Each waits for the others to start, sleeps
/// `delay` to emulate slow setup, then calls [`LazySingletonRegistry::acquire`].
///
/// Outcomes are returned in candidate order. Which candidate wins is up to the
/// scheduler.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use aircraft_patterns::{race, single_winner, LazySingletonRegistry};
///
/// let registry = LazySingletonRegistry::new();
/// let outcomes = race(&registry, &["FOO", "BAR"], Duration::from_millis(1));
///
/// let winner = single_winner(&outcomes).unwrap();
/// assert!(winner == "FOO" || winner == "BAR");
/// ```
pub fn race<S: AsRef<str>>(
    registry: &LazySingletonRegistry,
    candidates: &[S],
    delay: Duration,
) -> Vec<RaceOutcome> {
    let barrier = Barrier::new(candidates.len());

    thread::scope(|scope| {
        let handles: Vec<_> = candidates
            .iter()
            .map(|candidate| {
                let candidate = candidate.as_ref().to_owned();
                let barrier = &barrier;
                scope.spawn(move || {
                    barrier.wait();
                    thread::sleep(delay);
                    let instance = registry.acquire(candidate.as_str());
                    debug!(candidate = %candidate, observed = instance.value(), "racer finished");
                    RaceOutcome {
                        observed: instance.value().to_owned(),
                        candidate,
                    }
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect()
    })
}

/// The value every racer observed, or `None` if they disagree (or there were none).
pub fn single_winner(outcomes: &[RaceOutcome]) -> Option<&str> {
    let (first, rest) = outcomes.split_first()?;
    rest.iter()
        .all(|outcome| outcome.observed == first.observed)
        .then_some(first.observed.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(candidate: &str, observed: &str) -> RaceOutcome {
        RaceOutcome {
            candidate: candidate.to_string(),
            observed: observed.to_string(),
        }
    }

    #[test]
    fn test_single_winner_agreement() {
        let outcomes = vec![outcome("FOO", "BAR"), outcome("BAR", "BAR")];
        assert_eq!(single_winner(&outcomes), Some("BAR"));
    }

    #[test]
    fn test_single_winner_disagreement() {
        let outcomes = vec![outcome("FOO", "FOO"), outcome("BAR", "BAR")];
        assert_eq!(single_winner(&outcomes), None);
    }

    #[test]
    fn test_single_winner_empty() {
        assert_eq!(single_winner(&[]), None);
    }

    #[test]
    fn test_race_foo_bar() {
        let registry = LazySingletonRegistry::new();
        let outcomes = race(&registry, &["FOO", "BAR"], Duration::from_millis(1));

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].candidate, "FOO");
        assert_eq!(outcomes[1].candidate, "BAR");

        let winner = single_winner(&outcomes).unwrap();
        assert!(winner == "FOO" || winner == "BAR");
        assert_eq!(registry.get().unwrap().value(), winner);
    }

    #[test]
    fn test_race_after_init_keeps_value() {
        let registry = LazySingletonRegistry::new();
        registry.acquire("early");

        let outcomes = race(&registry, &["x", "y", "z"], Duration::ZERO);
        assert_eq!(single_winner(&outcomes), Some("early"));
    }

    #[test]
    fn test_race_without_candidates() {
        let registry = LazySingletonRegistry::new();
        let outcomes = race::<&str>(&registry, &[], Duration::ZERO);

        assert!(outcomes.is_empty());
        assert!(!registry.is_initialized());
    }
}
