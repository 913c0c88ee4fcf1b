//! envexist - Validate module environment variables before startup.
//!
//! Components declare the environment variables they need on a shared
//! [`Registry`]. Startup code resolves the registry once: either every
//! required variable is set and each component receives its values, or
//! nothing is delivered and a report shows what is missing.
//!
//! # Modules
//!
//! - [`registry`] - Modules, declarations and the resolution pass
//! - [`report`] - Fixed-width table of declared variables
//! - [`env`] - Environment lookup, layering and `.env` files
//! - [`manifest`] - YAML declarations for the CLI
//! - [`secrets`] - Secret detection for masked output
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use envexist::Registry;
//! use std::collections::HashMap;
//!
//! let env = HashMap::from([("MYMODULE_PARAM_1".to_string(), "1".to_string())]);
//! let mut registry = Registry::with_source(env);
//!
//! let (mut app, delivery) = registry.main("mymodule");
//! app.need("param_1", "a required value", "example")
//!     .want("param_2", "an optional value", "example")
//!     .may("param_3", "the example is the default", "default_value");
//!
//! if !registry.resolve() {
//!     registry.print_env_list();
//!     return;
//! }
//!
//! let env = delivery.recv().unwrap();
//! assert_eq!(env["PARAM_1"], "1");
//! assert_eq!(env["PARAM_3"], "default_value");
//! assert!(!env.contains_key("PARAM_2"));
//! ```

pub mod cli;
pub mod env;
pub mod error;
pub mod manifest;
pub mod registry;
pub mod report;
pub mod secrets;

pub use error::{EnvexistError, Result};
pub use registry::{Delivery, Module, ModuleMut, Registry, Requirement, ResolvedData, VariableSpec};
