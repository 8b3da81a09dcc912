//! Macros for declaring process-wide singletons.

/// Creates a process-wide lazy singleton with a single macro invocation.
///
/// The macro generates a module containing:
/// - A `static` [`LazySingletonRegistry`](crate::LazySingletonRegistry) (private)
/// - An `Api` struct that implements [`SingletonApi`](crate::SingletonApi)
/// - Free functions forwarding to it
///
/// # Examples
///
/// ```rust
/// use aircraft_patterns::define_singleton;
///
/// define_singleton!(tower);
///
/// let first = tower::acquire("FOO");
/// let second = tower::acquire("BAR");
///
/// assert_eq!(first.value(), "FOO");
/// assert_eq!(second.value(), "FOO");
/// ```
///
/// # Multiple Singletons
///
/// Every invocation owns its own registry:
///
/// ```rust
/// use aircraft_patterns::define_singleton;
///
/// define_singleton!(approach);
/// define_singleton!(departure);
///
/// approach::acquire("runway 27");
///
/// assert!(approach::is_initialized());
/// assert!(!departure::is_initialized());
/// ```
#[macro_export]
macro_rules! define_singleton {
    ($name:ident) => {
        #[allow(dead_code)]
        pub mod $name {
            static REGISTRY: $crate::LazySingletonRegistry = $crate::LazySingletonRegistry::new();

            /// Zero-sized type that implements the singleton API.
            pub struct Api;

            impl $crate::SingletonApi for Api {
                fn registry() -> &'static $crate::LazySingletonRegistry {
                    &REGISTRY
                }
            }

            /// Convenient constant for trait-based access.
            pub const API: Api = Api;

            /// Return the instance, constructing it from `candidate` on first use.
            pub fn acquire(candidate: impl Into<String>) -> $crate::InstanceRef {
                use $crate::SingletonApi;
                API.acquire(candidate)
            }

            /// Return the instance, running `init` only if this call constructs it.
            pub fn acquire_with(init: impl FnOnce() -> String) -> $crate::InstanceRef {
                use $crate::SingletonApi;
                API.acquire_with(init)
            }

            /// Fallible construction; on error the singleton stays uninitialized.
            pub fn try_acquire_with<E>(
                init: impl FnOnce() -> ::std::result::Result<String, E>,
            ) -> ::std::result::Result<$crate::InstanceRef, E> {
                use $crate::SingletonApi;
                API.try_acquire_with(init)
            }

            /// Non-blocking lookup.
            pub fn get() -> $crate::Result<$crate::InstanceRef> {
                use $crate::SingletonApi;
                API.get()
            }

            pub fn is_initialized() -> bool {
                use $crate::SingletonApi;
                API.is_initialized()
            }

            /// Access the underlying registry, e.g. to hand it to a race driver.
            pub fn registry() -> &'static $crate::LazySingletonRegistry {
                &REGISTRY
            }

            /// Set a tracing callback for singleton operations.
            pub fn set_trace_callback(
                callback: impl Fn(&$crate::RegistryEvent<'_>) + Send + Sync + 'static,
            ) {
                use $crate::SingletonApi;
                API.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                use $crate::SingletonApi;
                API.clear_trace_callback()
            }
        }
    };
}
