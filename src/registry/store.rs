//! The registry and its resolution pass.

use std::fmt;
use std::io::{self, Write};

use super::delivery::Delivery;
use super::module::{Callback, Module, ModuleMut, ResolvedData};
use crate::env::{EnvSource, SystemEnv};
use crate::error::{EnvexistError, Result};
use crate::report::{EnvTable, ReportOptions, TableRow};

/// A single validation barrier shared by independently registering
/// components.
///
/// Registration reads the environment right away; [`resolve`](Self::resolve)
/// then checks every module and, only if all of them are satisfied, fires
/// each module's callback in registration order. The registry is not meant
/// to be shared across threads.
///
/// # Example
///
/// ```
/// use envexist::Registry;
/// use std::collections::HashMap;
///
/// let env = HashMap::from([("CACHE_URL".to_string(), "redis://cache".to_string())]);
/// let mut registry = Registry::with_source(env);
///
/// registry
///     .module("cache", |data| assert_eq!(data["URL"], "redis://cache"))
///     .need("url", "cache endpoint", "redis://localhost");
///
/// assert!(registry.resolve());
/// ```
pub struct Registry {
    env: Box<dyn EnvSource>,
    modules: Vec<Module>,
}

impl Registry {
    /// Create a registry reading the process environment.
    pub fn new() -> Self {
        Self::with_source(SystemEnv)
    }

    /// Create a registry reading from any lookup.
    pub fn with_source(env: impl EnvSource + 'static) -> Self {
        Self {
            env: Box::new(env),
            modules: Vec::new(),
        }
    }

    /// Register a module whose callback receives its resolved data.
    ///
    /// The callback gets only the variables with a non-empty value.
    pub fn module<F>(&mut self, name: &str, callback: F) -> ModuleMut<'_>
    where
        F: FnOnce(ResolvedData) + 'static,
    {
        self.register(name, Some(Box::new(callback)))
    }

    /// Register a module that only takes part in validation.
    pub fn module_silent(&mut self, name: &str) -> ModuleMut<'_> {
        self.register(name, None)
    }

    /// Register a module for the application entry point.
    ///
    /// The resolved data is pushed into the returned [`Delivery`], so the
    /// caller can run [`resolve`](Self::resolve) first and collect the data
    /// afterwards.
    pub fn main(&mut self, name: &str) -> (ModuleMut<'_>, Delivery) {
        let (tx, delivery) = Delivery::channel();
        let module = self.module(name, move |data| {
            // The slot is empty, so this never blocks. A dropped Delivery
            // just means nobody is listening.
            let _ = tx.send(data);
        });
        (module, delivery)
    }

    fn register(&mut self, name: &str, callback: Option<Callback>) -> ModuleMut<'_> {
        let module = Module::new(name, callback);
        if self.modules.iter().any(|m| m.name() == module.name()) {
            tracing::warn!(module = %module.name(), "Module registered more than once");
        }
        tracing::debug!(module = %module.name(), "Registering module");

        self.modules.push(module);
        let index = self.modules.len() - 1;
        ModuleMut::new(&mut self.modules[index], self.env.as_ref())
    }

    /// Validate every module and, if all are satisfied, notify them.
    ///
    /// Returns `false` without firing any callback when at least one
    /// required variable is empty. Each module is notified at most once,
    /// so a second successful call only reaches modules registered since.
    pub fn resolve(&mut self) -> bool {
        if let Some(module) = self.modules.iter().find(|m| !m.is_satisfied()) {
            tracing::warn!(
                module = %module.name(),
                missing = ?module.unsatisfied_keys(),
                "Environment resolution failed"
            );
            return false;
        }

        for module in &mut self.modules {
            module.notify();
        }

        tracing::info!(modules = self.modules.len(), "Environment resolved");
        true
    }

    /// Same pass as [`resolve`](Self::resolve), reporting the missing keys.
    ///
    /// # Errors
    ///
    /// Returns `Unresolved` listing every required key without a value.
    pub fn try_resolve(&mut self) -> Result<()> {
        if self.resolve() {
            Ok(())
        } else {
            Err(EnvexistError::Unresolved {
                missing: self.missing_keys(),
            })
        }
    }

    /// Lookup keys of all required variables without a value.
    ///
    /// Modules in registration order, variables sorted by name.
    pub fn missing_keys(&self) -> Vec<String> {
        self.modules
            .iter()
            .flat_map(Module::unsatisfied_keys)
            .collect()
    }

    /// Drop every registered module.
    ///
    /// Deliveries of modules that were never notified close.
    pub fn release(&mut self) {
        tracing::debug!(modules = self.modules.len(), "Releasing registry");
        self.modules.clear();
    }

    /// Registered modules in registration order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Number of registered modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether no module is registered.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Build the report table of every declared variable.
    pub fn table(&self, options: ReportOptions) -> EnvTable {
        let mut table = EnvTable::new(options);
        for module in &self.modules {
            for (var, spec) in module.specs() {
                // The value column shows what the environment held; an
                // applied default is flagged on the example cell instead.
                let value = if spec.default_applied {
                    String::new()
                } else {
                    spec.value.clone()
                };
                table.add_row(TableRow {
                    key: module.key_for(var),
                    value,
                    description: spec.description.clone(),
                    example: spec.example.clone(),
                    required: spec.is_required(),
                    has_default: spec.has_default(),
                });
            }
        }
        table
    }

    /// Render the report with default options.
    pub fn render_report(&self) -> String {
        self.table(ReportOptions::default()).render()
    }

    /// Write the report to any writer.
    pub fn write_report<W: Write + ?Sized>(
        &self,
        out: &mut W,
        options: ReportOptions,
    ) -> io::Result<()> {
        out.write_all(self.table(options).render().as_bytes())?;
        out.flush()
    }

    /// Dump the report to stdout.
    ///
    /// Diagnostic only: write errors are logged and otherwise ignored.
    pub fn print_env_list(&self) {
        let stdout = io::stdout();
        if let Err(e) = self.write_report(&mut stdout.lock(), ReportOptions::default()) {
            tracing::debug!(error = %e, "Failed to print environment report");
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("modules", &self.modules)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    const K1: &str = "KEY_1";
    const K2: &str = "KEY_2";

    fn registry(pairs: &[(&str, &str)]) -> Registry {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Registry::with_source(env)
    }

    #[test]
    fn all_set() {
        let mut reg = registry(&[("M1_KEY_1", "1"), ("M1_KEY_2", "2")]);
        reg.module_silent("M1").need(K1, "", "").want(K2, "", "");
        assert!(reg.resolve());
    }

    #[test]
    fn only_needed_set() {
        let mut reg = registry(&[("M1_KEY_1", "1")]);
        reg.module_silent("M1").need(K1, "", "").want(K2, "", "");
        assert!(reg.resolve());
    }

    #[test]
    fn lacking_needed_fails() {
        let mut reg = registry(&[("M1_KEY_2", "1")]);
        reg.module_silent("M1").need(K1, "", "").want(K2, "", "");
        assert!(!reg.resolve());
        assert_eq!(reg.missing_keys(), vec!["M1_KEY_1"]);
    }

    #[test]
    fn all_empty_fails() {
        let mut reg = registry(&[]);
        reg.module_silent("M1").need(K1, "", "").want(K2, "", "");
        assert!(!reg.resolve());
    }

    #[test]
    fn one_failed_module_blocks_every_callback() {
        let fired = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&fired);

        let mut reg = registry(&[("M1_KEY_1", "1")]);
        reg.module("M1", move |_| *flag.borrow_mut() = true)
            .need(K1, "", "");
        reg.module_silent("M2").need(K1, "", "");

        assert!(!reg.resolve());
        assert!(!*fired.borrow());
        assert!(reg.modules()[0].is_pending());
    }

    #[test]
    fn callbacks_fire_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut reg = registry(&[]);
        for name in ["b", "a", "c"] {
            let sink = Rc::clone(&order);
            reg.module(name, move |_| sink.borrow_mut().push(name));
        }

        assert!(reg.resolve());
        assert_eq!(*order.borrow(), vec!["b", "a", "c"]);
    }

    #[test]
    fn second_resolve_does_not_renotify() {
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let mut reg = registry(&[]);
        reg.module("m", move |_| *sink.borrow_mut() += 1);

        assert!(reg.resolve());
        assert!(reg.resolve());
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn try_resolve_reports_missing_keys() {
        let mut reg = registry(&[]);
        reg.module_silent("db").need("port", "", "").need("host", "", "");
        reg.module_silent("cache").need("url", "", "");

        match reg.try_resolve() {
            Err(EnvexistError::Unresolved { missing }) => {
                assert_eq!(missing, vec!["DB_HOST", "DB_PORT", "CACHE_URL"]);
            }
            other => panic!("Expected Unresolved, got {other:?}"),
        }
    }

    #[test]
    fn release_then_resolve_is_vacuous() {
        let mut reg = registry(&[]);
        reg.module_silent("m").need(K1, "", "");
        assert!(!reg.resolve());

        reg.release();
        assert!(reg.is_empty());
        assert!(reg.resolve());
        assert!(reg.missing_keys().is_empty());
    }

    #[test]
    fn release_closes_pending_delivery() {
        let mut reg = registry(&[]);
        let (_, delivery) = reg.main("m");
        reg.release();
        assert_eq!(delivery.recv(), None);
    }

    #[test]
    fn main_delivers_after_resolve() {
        let mut reg = registry(&[("M1_KEY_1", "1")]);
        let (mut module, delivery) = reg.main("M1");
        module.need(K1, "", "").want(K2, "", "");

        assert!(delivery.try_recv().is_none());
        assert!(reg.resolve());

        let data = delivery.recv().unwrap();
        assert_eq!(data, HashMap::from([(K1.to_string(), "1".to_string())]));
        assert!(delivery.is_closed());
    }

    #[test]
    fn checking_closed_before_recv_keeps_data() {
        let mut reg = registry(&[("M_K", "v")]);
        let (mut module, delivery) = reg.main("m");
        module.need("k", "", "");

        assert!(reg.resolve());
        assert!(!delivery.is_closed());

        let data = delivery.recv().unwrap();
        assert_eq!(data["K"], "v");
        assert!(delivery.is_closed());
    }

    #[test]
    fn main_survives_dropped_delivery() {
        let mut reg = registry(&[]);
        drop(reg.main("m").1);
        assert!(reg.resolve());
    }

    #[test]
    fn duplicate_module_names_are_kept_apart() {
        let mut reg = registry(&[("M_K", "1")]);
        reg.module_silent("m").need("k", "", "");
        reg.module_silent("M").want("other", "", "");

        assert_eq!(reg.len(), 2);
        assert!(reg.resolve());
    }

    #[test]
    fn write_report_matches_render() {
        let mut reg = registry(&[]);
        reg.module_silent("m").want("k", "desc", "ex");

        let mut out = Vec::new();
        reg.write_report(&mut out, ReportOptions::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), reg.render_report());
    }

    #[test]
    fn report_sorts_variables_within_module() {
        let mut reg = registry(&[]);
        reg.module_silent("z").want("b", "", "").want("a", "", "");
        reg.module_silent("y").want("c", "", "");

        let report = reg.render_report();
        let za = report.find("Z_A").unwrap();
        let zb = report.find("Z_B").unwrap();
        let yc = report.find("Y_C").unwrap();
        assert!(za < zb && zb < yc);
    }
}
