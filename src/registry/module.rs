//! A named group of declared variables.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use super::spec::{Requirement, VariableSpec};
use crate::env::EnvSource;

/// Variable name to resolved value, as delivered to a module.
pub type ResolvedData = HashMap<String, String>;

/// Callback fired once with a module's resolved data.
pub type Callback = Box<dyn FnOnce(ResolvedData)>;

/// Build the lookup key for a variable of a module.
pub(crate) fn lookup_key(module: &str, var: &str) -> String {
    format!("{module}_{var}")
}

/// A named owner of declared environment variables.
///
/// Names are uppercased on creation; every variable `X` of module `M` is
/// looked up as `M_X`.
pub struct Module {
    name: String,
    specs: BTreeMap<String, VariableSpec>,
    callback: Option<Callback>,
}

impl Module {
    pub(crate) fn new(name: &str, callback: Option<Callback>) -> Self {
        Self {
            name: name.to_uppercase(),
            specs: BTreeMap::new(),
            callback,
        }
    }

    /// The normalized (uppercase) module name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared specs, sorted by variable name.
    pub fn specs(&self) -> impl Iterator<Item = (&str, &VariableSpec)> {
        self.specs.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    /// Look up a spec by variable name (case-insensitive).
    pub fn spec(&self, var: &str) -> Option<&VariableSpec> {
        self.specs.get(&var.to_uppercase())
    }

    /// Number of declared variables.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether no variable was declared.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Environment key for one of this module's variables.
    pub fn key_for(&self, var: &str) -> String {
        lookup_key(&self.name, &var.to_uppercase())
    }

    /// Whether every declared spec is satisfied.
    pub fn is_satisfied(&self) -> bool {
        self.specs.values().all(|spec| spec.satisfied)
    }

    /// Lookup keys of unsatisfied specs, sorted by variable name.
    pub fn unsatisfied_keys(&self) -> Vec<String> {
        self.specs
            .iter()
            .filter(|(_, spec)| !spec.satisfied)
            .map(|(name, _)| lookup_key(&self.name, name))
            .collect()
    }

    /// Data this module receives: every spec with a non-empty value.
    pub fn resolved_data(&self) -> ResolvedData {
        self.specs
            .iter()
            .filter(|(_, spec)| !spec.value.is_empty())
            .map(|(name, spec)| (name.clone(), spec.value.clone()))
            .collect()
    }

    /// Whether a callback is still waiting to be fired.
    pub fn is_pending(&self) -> bool {
        self.callback.is_some()
    }

    /// Fire the callback with the resolved data, at most once.
    pub(crate) fn notify(&mut self) {
        if let Some(callback) = self.callback.take() {
            let data = self.resolved_data();
            tracing::debug!(module = %self.name, vars = data.len(), "Notifying module");
            callback(data);
        }
    }

    fn declare(
        &mut self,
        env: &dyn EnvSource,
        requirement: Requirement,
        var: &str,
        description: &str,
        example: &str,
    ) {
        let var = var.to_uppercase();
        let key = lookup_key(&self.name, &var);
        let spec = VariableSpec::declare(requirement, description, example, env.get_var(&key));

        tracing::debug!(
            key = %key,
            requirement = ?requirement,
            satisfied = spec.satisfied,
            "Declared variable"
        );
        self.specs.insert(var, spec);
    }
}

impl fmt::Debug for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Module")
            .field("name", &self.name)
            .field("specs", &self.specs)
            .field("pending", &self.is_pending())
            .finish()
    }
}

/// Chainable declaration handle returned by registration.
///
/// Each declaration reads the environment immediately. Re-declaring a name
/// replaces the earlier spec.
///
/// # Example
///
/// ```
/// use envexist::Registry;
/// use std::collections::HashMap;
///
/// let env = HashMap::from([("DB_HOST".to_string(), "localhost".to_string())]);
/// let mut registry = Registry::with_source(env);
///
/// registry
///     .module_silent("db")
///     .need("host", "database host", "localhost")
///     .want("user", "login name", "postgres")
///     .may("port", "listen port", "5432");
///
/// let db = &registry.modules()[0];
/// assert_eq!(db.spec("port").map(|s| s.value.as_str()), Some("5432"));
/// ```
pub struct ModuleMut<'r> {
    module: &'r mut Module,
    env: &'r dyn EnvSource,
}

impl<'r> ModuleMut<'r> {
    pub(crate) fn new(module: &'r mut Module, env: &'r dyn EnvSource) -> Self {
        Self { module, env }
    }

    /// Declare a required variable.
    pub fn need(&mut self, name: &str, description: &str, example: &str) -> &mut Self {
        self.module
            .declare(self.env, Requirement::Need, name, description, example);
        self
    }

    /// Declare an optional variable.
    pub fn want(&mut self, name: &str, description: &str, example: &str) -> &mut Self {
        self.module
            .declare(self.env, Requirement::Want, name, description, example);
        self
    }

    /// Declare an optional variable whose example is used when it is unset.
    pub fn may(&mut self, name: &str, description: &str, example: &str) -> &mut Self {
        self.module
            .declare(self.env, Requirement::May, name, description, example);
        self
    }

    /// The module being declared.
    pub fn module(&self) -> &Module {
        self.module
    }
}
