//! Run-scoped variable store.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Variables extracted during one run.
///
/// A store is created empty when a run starts and dropped when it ends.
/// Values keep their JSON shape so a later step can interpolate an object
/// or number as well as a plain string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableStore {
    values: HashMap<String, serde_json::Value>,
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a value, replacing any previous binding of the same name.
    pub fn bind(&mut self, name: impl Into<String>, value: serde_json::Value) {
        self.values.insert(name.into(), value);
    }

    /// Returns the raw value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.values.get(name)
    }

    /// Returns the value bound to `name` in the form used for interpolation.
    ///
    /// Strings are returned without quotes; every other value is rendered
    /// as compact JSON.
    #[must_use]
    pub fn get_string(&self, name: &str) -> Option<String> {
        self.values.get(name).map(|value| match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Returns true if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
