//! Singleton race example for aircraft-patterns.
//!
//! Demonstrates:
//! - Two threads racing to initialize a process-wide singleton
//! - Both threads receiving the same instance, whoever won
//! - Watching the race through the trace callback
//!
//! Run with: `cargo run --example singleton_race`

use aircraft_patterns::{define_singleton, race, single_winner};
use std::time::Duration;

// Process-wide singleton for this example
define_singleton!(flight_plan);

fn main() {
    println!("=== aircraft-patterns: Singleton Race ===\n");

    flight_plan::set_trace_callback(|event| println!("   [trace] {event}"));

    println!("If you see the same value, then singleton was reused (yay!)");
    println!("If you see different values, then 2 singletons were created (booo!!)\n");
    println!("RESULT:");

    let outcomes = race(
        flight_plan::registry(),
        &["FOO", "BAR"],
        Duration::from_millis(1),
    );

    for outcome in &outcomes {
        println!("   asked for {:?}, got {:?}", outcome.candidate, outcome.observed);
    }

    match single_winner(&outcomes) {
        Some(winner) => println!("\nSingle instance holding {winner:?}"),
        None => println!("\nThreads disagreed"),
    }

    // Later callers get the same instance no matter what they pass.
    let late = flight_plan::acquire("LATE");
    println!("Late caller sees {:?}", late.value());
}
