use std::{fmt, sync::Arc};

/// User-provided callbacks for observing degraded decodes without taking on a
/// tracing dependency.
#[derive(Clone, Default)]
pub struct FallbackCallbacks {
    pub on_fallback: Option<Arc<dyn Fn(FallbackEvent) + Send + Sync>>,
    pub on_missing_field: Option<Arc<dyn Fn(MissingFieldEvent) + Send + Sync>>,
}

impl fmt::Debug for FallbackCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FallbackCallbacks")
            .field("on_fallback", &self.on_fallback.as_ref().map(|_| "callback"))
            .field(
                "on_missing_field",
                &self.on_missing_field.as_ref().map(|_| "callback"),
            )
            .finish()
    }
}

/// Why a record was kept in its unparsed form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FallbackReason {
    /// Typed decoding failed (type mismatch, nested required field, ...).
    Structural(String),
    /// An enum-typed field held a value outside its allowed set.
    InvalidEnum,
    /// A nested record was itself unparsed.
    UnparsedChild,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::Structural(message) => write!(f, "structural mismatch: {message}"),
            FallbackReason::InvalidEnum => write!(f, "enum value outside allowed set"),
            FallbackReason::UnparsedChild => write!(f, "nested record is unparsed"),
        }
    }
}

/// A record fell back to its unparsed representation.
#[derive(Clone, Debug)]
pub struct FallbackEvent {
    pub schema: &'static str,
    pub reason: FallbackReason,
}

/// A required field was absent or null.
#[derive(Clone, Debug)]
pub struct MissingFieldEvent {
    pub schema: &'static str,
    pub field: &'static str,
}

/// Internal helper that owns the registered callbacks (if any).
#[derive(Clone, Default)]
pub(crate) struct Telemetry {
    callbacks: FallbackCallbacks,
}

impl Telemetry {
    pub fn new(callbacks: Option<FallbackCallbacks>) -> Self {
        Self {
            callbacks: callbacks.unwrap_or_default(),
        }
    }

    pub fn record_fallback(&self, event: FallbackEvent) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            schema = event.schema,
            reason = %event.reason,
            "record kept unparsed"
        );

        if let Some(cb) = &self.callbacks.on_fallback {
            cb(event);
        }
    }

    pub fn record_missing_field(&self, event: MissingFieldEvent) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            schema = event.schema,
            field = event.field,
            "required field missing"
        );

        if let Some(cb) = &self.callbacks.on_missing_field {
            cb(event);
        }
    }
}

impl fmt::Debug for Telemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.callbacks.fmt(f)
    }
}
