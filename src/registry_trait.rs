//! Core trait for process-wide singleton access.
//!
//! This module provides the `SingletonApi` trait with default implementations
//! that forward to a `'static` [`LazySingletonRegistry`]. Implementors only
//! supply the `registry` accessor; [`define_singleton!`](crate::define_singleton)
//! generates one for you.

use crate::{InstanceRef, LazySingletonRegistry, RegistryEvent, Result};

/// Zero-sized handle onto a process-wide singleton.
///
/// Every method has a default implementation; the implementor decides which
/// `static` registry backs it.
pub trait SingletonApi {
    /// Access the registry static.
    fn registry() -> &'static LazySingletonRegistry;

    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    fn set_trace_callback(&self, callback: impl Fn(&RegistryEvent<'_>) + Send + Sync + 'static) {
        Self::registry().set_trace_callback(callback);
    }

    fn clear_trace_callback(&self) {
        Self::registry().clear_trace_callback();
    }

    // -------------------------------------------------------------------------------------------------
    // Singleton
    // -------------------------------------------------------------------------------------------------

    /// Return the process-wide instance, constructing it from `candidate` on first use.
    ///
    /// See [`LazySingletonRegistry::acquire`].
    fn acquire(&self, candidate: impl Into<String>) -> InstanceRef {
        Self::registry().acquire(candidate)
    }

    fn acquire_with(&self, init: impl FnOnce() -> String) -> InstanceRef {
        Self::registry().acquire_with(init)
    }

    /// Fallible construction; a failed attempt leaves the singleton uninitialized.
    fn try_acquire_with<E>(
        &self,
        init: impl FnOnce() -> std::result::Result<String, E>,
    ) -> std::result::Result<InstanceRef, E> {
        Self::registry().try_acquire_with(init)
    }

    /// Non-blocking lookup.
    ///
    /// # Errors
    ///
    /// - The singleton has not been acquired yet
    fn get(&self) -> Result<InstanceRef> {
        Self::registry().get()
    }

    fn is_initialized(&self) -> bool {
        Self::registry().is_initialized()
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
