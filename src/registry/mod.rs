//! Module registration and the resolution pass.
//!
//! Independent components declare the variables they need on a shared
//! [`Registry`]; startup code runs [`Registry::resolve`] once and, only when
//! every required variable is set, each component receives its values.
//!
//! - [`spec`] - One declared variable
//! - [`module`] - A named group of declarations plus its callback
//! - [`delivery`] - Single-slot receiver for [`Registry::main`]
//! - [`store`] - The registry and resolution pass

pub mod delivery;
pub mod module;
pub mod spec;
pub mod store;

pub use delivery::Delivery;
pub use module::{Module, ModuleMut, ResolvedData};
pub use store::Registry;
pub use spec::{Requirement, VariableSpec};
