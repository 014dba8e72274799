use crate::telemetry::{FallbackCallbacks, Telemetry};

/// Decode policy shared by [`Record::decode_with`](crate::Record::decode_with)
/// and friends.
///
/// The default matches the wire contract: unknown keys are kept in the
/// extension bag and type or enum mismatches degrade to the unparsed form.
#[derive(Clone, Debug)]
pub struct Config {
    /// Keep keys the schema does not know in `additional_properties`
    /// (defaults to `true`).
    pub capture_additional_properties: bool,
    /// Return [`Error::Unparsed`](crate::Error::Unparsed) instead of falling
    /// back to the unparsed form (defaults to `false`).
    pub strict: bool,
    /// Optional callbacks fired on fallbacks and missing required fields.
    pub callbacks: Option<FallbackCallbacks>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capture_additional_properties: true,
            strict: false,
            callbacks: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_additional_properties(mut self, capture: bool) -> Self {
        self.capture_additional_properties = capture;
        self
    }

    pub fn with_callbacks(mut self, callbacks: FallbackCallbacks) -> Self {
        self.callbacks = Some(callbacks);
        self
    }

    pub(crate) fn telemetry(&self) -> Telemetry {
        Telemetry::new(self.callbacks.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_lenient() {
        let cfg = Config::default();
        assert!(cfg.capture_additional_properties);
        assert!(!cfg.strict);
        assert!(cfg.callbacks.is_none());
    }

    #[test]
    fn builder_overrides() {
        let cfg = Config::new()
            .with_strict(true)
            .with_additional_properties(false)
            .with_callbacks(FallbackCallbacks::default());
        assert!(cfg.strict);
        assert!(!cfg.capture_additional_properties);
        assert!(cfg.callbacks.is_some());
    }
}
