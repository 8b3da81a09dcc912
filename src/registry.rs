//! Thread-safe, exactly-once lazy construction of a single shared instance.
//!
//! The first caller of [`LazySingletonRegistry::acquire`] takes the construction
//! lock, re-checks the state and builds the [`Instance`]. Callers arriving while
//! construction is in flight block on the same lock and then see the finished
//! instance. Once initialized, reads go through `OnceLock::get`, whose acquire
//! load pairs with the release store in `set`, so a partially built instance is
//! never observable and the construction lock is never touched again. The trace
//! lock is only taken while a callback is installed.
//!
//! # Examples
//!
//! ```
//! use aircraft_patterns::LazySingletonRegistry;
//!
//! let registry = LazySingletonRegistry::new();
//!
//! let first = registry.acquire("A");
//! let second = registry.acquire("B");
//!
//! assert_eq!(first.value(), "A");
//! assert_eq!(second.value(), "A");
//! ```

use std::convert::Infallible;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

use tracing::{debug, trace};

use crate::instance::{Instance, InstanceRef, RegistryState};
use crate::{Error, RegistryEvent, Result};

/// Type alias for the user-supplied tracing callback.
///
/// The callback receives every [`RegistryEvent`] the registry emits. It must be
/// thread-safe because a registry is usually shared across threads.
pub type TraceCallback = dyn Fn(&RegistryEvent<'_>) + Send + Sync + 'static;

/// Holds at most one [`Instance`], constructed by the first caller to acquire it.
///
/// `new` is `const`, so a registry can live in a `static` (see
/// [`define_singleton!`](crate::define_singleton)) or be owned by an
/// application context and handed to callers explicitly.
pub struct LazySingletonRegistry {
    instance: OnceLock<InstanceRef>,
    init_lock: Mutex<()>,
    trace: Mutex<Option<Arc<TraceCallback>>>,
    // Mirrors `trace.is_some()` so emitting without a callback stays lock-free.
    has_trace: AtomicBool,
}

impl LazySingletonRegistry {
    pub const fn new() -> Self {
        Self {
            instance: OnceLock::new(),
            init_lock: Mutex::new(()),
            trace: Mutex::new(None),
            has_trace: AtomicBool::new(false),
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Set a tracing callback for registry operations.
    ///
    /// # Lock Poisoning Recovery
    ///
    /// If the trace lock is poisoned, this method recovers by extracting the inner value.
    pub fn set_trace_callback(
        &self,
        callback: impl Fn(&RegistryEvent<'_>) + Send + Sync + 'static,
    ) {
        let mut guard = self.trace.lock().unwrap_or_else(|p| p.into_inner());
        *guard = Some(Arc::new(callback));
        self.has_trace.store(true, Ordering::Release);
    }

    /// Clear the tracing callback.
    pub fn clear_trace_callback(&self) {
        let mut guard = self.trace.lock().unwrap_or_else(|p| p.into_inner());
        *guard = None;
        self.has_trace.store(false, Ordering::Release);
    }

    /// Invoke the current callback, if any.
    ///
    /// The callback is cloned out of the trace lock first, so it may call back
    /// into this registry without deadlocking. Without a callback installed the
    /// trace lock is not taken at all.
    fn emit_event(&self, event: &RegistryEvent<'_>) {
        if !self.has_trace.load(Ordering::Acquire) {
            return;
        }

        let callback = self
            .trace
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone();

        if let Some(callback) = callback {
            callback(event);
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Acquisition
    // -------------------------------------------------------------------------------------------------

    /// Return the shared instance, constructing it from `candidate` if this
    /// caller is the first to get here.
    ///
    /// Any string is accepted, including an empty one. If another caller won
    /// the race, `candidate` is dropped and the winner's value is returned.
    /// Never fails; may block while another thread is constructing.
    pub fn acquire(&self, candidate: impl Into<String>) -> InstanceRef {
        let candidate = candidate.into();
        self.acquire_with(move || candidate)
    }

    /// Like [`acquire`](Self::acquire), but only builds the candidate value if
    /// this caller actually performs the construction.
    pub fn acquire_with(&self, init: impl FnOnce() -> String) -> InstanceRef {
        match self.try_acquire_with(|| Ok::<_, Infallible>(init())) {
            Ok(instance) => instance,
            Err(never) => match never {},
        }
    }

    /// Fallible construction.
    ///
    /// If `init` returns `Err`, the registry stays uninitialized and the error
    /// goes back to this caller only; the next caller gets to try again. A
    /// panicking `init` likewise leaves the registry uninitialized, since the
    /// construction lock recovers from poisoning.
    pub fn try_acquire_with<E>(
        &self,
        init: impl FnOnce() -> std::result::Result<String, E>,
    ) -> std::result::Result<InstanceRef, E> {
        if let Some(instance) = self.instance.get() {
            trace!(value = instance.value(), "singleton fast path");
            let instance = Arc::clone(instance);
            self.emit_event(&RegistryEvent::Acquire {
                value: instance.value(),
                initialized: false,
            });
            return Ok(instance);
        }

        let (instance, initialized) = {
            let guard = self.init_lock.lock().unwrap_or_else(|p| p.into_inner());

            // Another thread may have finished construction while we waited.
            match self.instance.get() {
                Some(instance) => (Arc::clone(instance), false),
                None => match init() {
                    Ok(value) => {
                        let instance = Arc::new(Instance::new(value));
                        // Cannot already be set: we hold init_lock and saw it empty.
                        let published = self.instance.set(Arc::clone(&instance)).is_ok();
                        debug_assert!(published, "instance set twice under init_lock");
                        debug!(value = instance.value(), "singleton initialized");
                        (instance, true)
                    }
                    Err(err) => {
                        drop(guard);
                        debug!("singleton construction failed, state left uninitialized");
                        self.emit_event(&RegistryEvent::InitFailed);
                        return Err(err);
                    }
                },
            }
        };

        self.emit_event(&RegistryEvent::Acquire {
            value: instance.value(),
            initialized,
        });

        Ok(instance)
    }

    // -------------------------------------------------------------------------------------------------
    // Inspection
    // -------------------------------------------------------------------------------------------------

    /// Return the instance without blocking or initializing.
    ///
    /// # Errors
    ///
    /// [`Error::NotInitialized`] if no caller has acquired the instance yet.
    pub fn get(&self) -> Result<InstanceRef> {
        let found = self.instance.get().cloned();

        self.emit_event(&RegistryEvent::Get {
            found: found.is_some(),
        });

        found.ok_or(Error::NotInitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.instance.get().is_some()
    }

    pub fn state(&self) -> RegistryState {
        match self.instance.get() {
            Some(instance) => RegistryState::Initialized(Arc::clone(instance)),
            None => RegistryState::Uninitialized,
        }
    }
}

impl Default for LazySingletonRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LazySingletonRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySingletonRegistry")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
