//! Localizable messages.
//!
//! The domain never builds user-facing prose. It emits a translation key
//! plus named parameters, and a presentation-side translator renders them.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A translation key with named interpolation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Stable translation key, e.g. `feedback_success_streak`.
    pub key: String,
    /// Values substituted for `{{name}}` placeholders.
    pub params: BTreeMap<String, String>,
}

impl Message {
    /// Creates a message without parameters.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            params: BTreeMap::new(),
        }
    }

    /// Adds a named parameter.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.params.insert(name.into(), value.to_string());
        self
    }

    /// Returns the value of a parameter, if set.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}
