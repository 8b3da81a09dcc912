/// Events emitted by a singleton registry during operations.
///
/// These events are passed to the tracing callback set via `set_trace_callback`.
/// They borrow from the registry, so a callback that wants to keep one should
/// format it or copy the fields out.
///
/// # Examples
///
/// ```rust
/// use aircraft_patterns::RegistryEvent;
///
/// let event = RegistryEvent::Acquire { value: "FOO", initialized: true };
/// assert_eq!(event.to_string(), "acquire { value: FOO, initialized: true }");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryEvent<'a> {
    /// An `acquire` call returned.
    Acquire {
        /// The value held by the instance the caller received
        value: &'a str,
        /// Whether this call constructed the instance
        initialized: bool,
    },

    /// A non-blocking lookup was performed.
    Get {
        /// Whether the registry was already initialized
        found: bool,
    },

    /// A fallible constructor returned an error; the registry stays uninitialized.
    InitFailed,
}

impl std::fmt::Display for RegistryEvent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryEvent::Acquire { value, initialized } => {
                write!(f, "acquire {{ value: {value}, initialized: {initialized} }}")
            }
            RegistryEvent::Get { found } => write!(f, "get {{ found: {found} }}"),
            RegistryEvent::InitFailed => write!(f, "Initialization failed"),
        }
    }
}
