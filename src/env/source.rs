//! Key-value lookup over an environment.

use std::collections::HashMap;

/// A get-by-key view of environment variables.
///
/// Keys passed in are already normalized (`MODULE_VARNAME`, uppercase).
///
/// # Example
///
/// ```
/// use envexist::env::EnvSource;
/// use std::collections::HashMap;
///
/// let mut env = HashMap::new();
/// env.insert("DB_HOST".to_string(), "localhost".to_string());
///
/// assert_eq!(env.get_var("DB_HOST"), Some("localhost".to_string()));
/// assert_eq!(env.get_var("DB_PORT"), None);
/// ```
pub trait EnvSource {
    /// Look up a variable, `None` when it is absent.
    fn get_var(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvSource for SystemEnv {
    fn get_var(&self, key: &str) -> Option<String> {
        // Non-unicode values are treated as unset.
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn get_var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get_var(&self, key: &str) -> Option<String> {
        (**self).get_var(key)
    }
}
