//! The single value a [`LazySingletonRegistry`](crate::LazySingletonRegistry) hands out.

use std::fmt;
use std::sync::Arc;

/// Shared, read-only handle to the registry's instance.
pub type InstanceRef = Arc<Instance>;

/// Opaque payload holding the winning candidate value.
///
/// Instances are only ever built by the registry, and they are not `Clone`:
/// every caller shares the same allocation through an [`InstanceRef`].
#[derive(Debug, PartialEq, Eq)]
pub struct Instance {
    value: String,
}

impl Instance {
    pub(crate) fn new(value: String) -> Self {
        Self { value }
    }

    /// The candidate value supplied by whichever caller performed initialization.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Snapshot of the registry's state machine.
///
/// `Uninitialized` only ever moves to `Initialized`, never back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryState {
    Uninitialized,
    Initialized(InstanceRef),
}

impl RegistryState {
    pub fn is_initialized(&self) -> bool {
        matches!(self, RegistryState::Initialized(_))
    }
}
