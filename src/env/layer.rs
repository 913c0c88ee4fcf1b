//! Environment variable layering.
//!
//! The CLI resolves declarations against the process environment with any
//! number of `.env` files stacked on top. Each layer remembers where it came
//! from, so `list --json` can show which file supplied a value.

use std::collections::HashMap;

use super::source::EnvSource;

/// One layer of environment variables.
///
/// # Example
///
/// ```
/// use envexist::env::EnvLayer;
///
/// let mut layer = EnvLayer::new(".env");
/// layer.set("DB_HOST", "localhost");
///
/// assert_eq!(layer.vars.get("DB_HOST").map(String::as_str), Some("localhost"));
/// assert_eq!(layer.source, ".env");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvLayer {
    /// Variables in this layer.
    pub vars: HashMap<String, String>,
    /// Source of this layer (for debugging).
    pub source: String,
}

impl EnvLayer {
    /// Create a new layer with the given source name.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            vars: HashMap::new(),
            source: source.into(),
        }
    }

    /// Snapshot the process environment into a layer named `process`.
    ///
    /// Variables whose name or value is not valid unicode are skipped.
    pub fn from_process() -> Self {
        Self::from_vars(
            "process",
            std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        )
    }

    /// Build a layer from any key/value iterator.
    pub fn from_vars<I, K, V>(source: impl Into<String>, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            source: source.into(),
        }
    }

    /// Add a variable to this layer.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Check if this layer has a variable.
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Get the number of variables in this layer.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Check if this layer is empty.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Manages layered environment variables.
///
/// The first layer pushed has lowest priority, the last has highest.
///
/// # Example
///
/// ```
/// use envexist::env::{EnvLayer, EnvLayerStack, EnvSource};
///
/// let mut stack = EnvLayerStack::new();
///
/// let mut base = EnvLayer::new("process");
/// base.set("APP_MODE", "production");
/// base.set("APP_PORT", "80");
/// stack.push(base);
///
/// let mut overlay = EnvLayer::new(".env");
/// overlay.set("APP_MODE", "development");
/// stack.push(overlay);
///
/// assert_eq!(stack.get("APP_MODE"), Some("development"));
/// assert_eq!(stack.get_var("APP_PORT"), Some("80".to_string()));
/// assert_eq!(stack.source_of("APP_MODE"), Some(".env"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvLayerStack {
    /// Layers from lowest to highest priority.
    layers: Vec<EnvLayer>,
}

impl EnvLayerStack {
    /// Create a new empty stack.
    pub fn new() -> Self {
        Self { layers: vec![] }
    }

    /// Add a layer on top of the existing ones.
    pub fn push(&mut self, layer: EnvLayer) {
        tracing::debug!(source = %layer.source, vars = layer.len(), "Pushing env layer");
        self.layers.push(layer);
    }

    /// Get the value from the highest priority layer that contains the key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.layers
            .iter()
            .rev()
            .find_map(|layer| layer.vars.get(key))
            .map(String::as_str)
    }

    /// Get the source of the highest priority layer that contains the key.
    pub fn source_of(&self, key: &str) -> Option<&str> {
        self.layers
            .iter()
            .rev()
            .find(|layer| layer.contains(key))
            .map(|layer| layer.source.as_str())
    }
}

impl EnvSource for EnvLayerStack {
    fn get_var(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }
}
