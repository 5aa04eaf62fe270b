//! Transformation options

use serde::{Deserialize, Serialize};

/// Options applied to every conversion of one response.
///
/// Deserializable with defaults for missing fields, so hosts can keep them in
/// their own configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformOptions {
    /// Top-level field holding the payload of interest, e.g. `data`.
    pub envelope_key: Option<String>,
    /// Pass documents with a non-empty `errors` field through untouched.
    pub detect_errors: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            envelope_key: None,
            detect_errors: true,
        }
    }
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty key clears the envelope.
    pub fn with_envelope_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.envelope_key = (!key.is_empty()).then_some(key);
        self
    }

    pub fn with_error_detection(mut self, enabled: bool) -> Self {
        self.detect_errors = enabled;
        self
    }

    /// The envelope key, if set and non-empty.
    pub fn envelope_key(&self) -> Option<&str> {
        self.envelope_key.as_deref().filter(|k| !k.is_empty())
    }
}
