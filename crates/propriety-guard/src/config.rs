//! Configuration for guarded properties.

/// What a [`GuardedProperty`](crate::GuardedProperty) does when a caller
/// breaks its policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViolationMode {
    /// Return [`Error::AccessDenied`](propriety_core::Error::AccessDenied).
    #[default]
    Error,
    /// Panic, treating the violation as a programming error.
    Panic,
}

/// Settings shared by guarded properties.
///
/// Default settings:
/// - Violation mode: [`ViolationMode::Error`]
/// - Trace permitted accesses: off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GuardConfig {
    mode: ViolationMode,
    trace_access: bool,
}

impl GuardConfig {
    /// Creates a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the violation mode.
    pub fn with_mode(mut self, mode: ViolationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Emits a `trace` event for every permitted access when enabled.
    pub fn with_trace_access(mut self, enabled: bool) -> Self {
        self.trace_access = enabled;
        self
    }

    /// The configured violation mode.
    pub fn mode(&self) -> ViolationMode {
        self.mode
    }

    /// Whether permitted accesses are traced.
    pub fn trace_access(&self) -> bool {
        self.trace_access
    }
}
