//! # Aircraft Patterns
//!
//! Creational design patterns over a toy aircraft domain, centred on a
//! thread-safe lazy singleton.
//!
//! ## Quick Start
//!
//! ```rust
//! use aircraft_patterns::LazySingletonRegistry;
//!
//! let registry = LazySingletonRegistry::new();
//!
//! // The first caller's candidate wins; later candidates are discarded.
//! let first = registry.acquire("FOO");
//! let second = registry.acquire("BAR");
//!
//! assert_eq!(first.value(), "FOO");
//! assert_eq!(second.value(), "FOO");
//! ```
//!
//! ## Features
//!
//! - **Exactly-once**: one instance per registry, however many threads race for it
//! - **Lock-free after init**: reads go through `OnceLock`; the trace lock is only
//!   taken while a callback is installed
//! - **Retryable construction**: a failed or panicking constructor leaves it uninitialized
//! - **Tracing support**: optional callback for monitoring registry operations
//!
//! ## Main Items
//!
//! - [`LazySingletonRegistry`] - The registry itself; own it or put it in a `static`
//! - [`define_singleton!`] - Declare a process-wide singleton module
//! - [`SingletonApi`] - Trait behind the macro, for hand-written statics
//! - [`race`] - Drive concurrent callers into a registry and record what they saw
//! - [`patterns`] - Factory Method, Abstract Factory, Prototype and Builder

mod error;
mod instance;
mod macros;
mod race;
mod registry;
mod registry_event;
mod registry_trait;

pub mod patterns;

pub use error::{Error, Result};
pub use instance::{Instance, InstanceRef, RegistryState};
pub use race::{race, single_winner, RaceOutcome};
pub use registry::{LazySingletonRegistry, TraceCallback};
pub use registry_event::RegistryEvent;
pub use registry_trait::SingletonApi;
