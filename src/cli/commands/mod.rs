//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed through [`CommandDispatcher`] and share their environment setup
//! through [`CommandContext`].

pub mod check;
pub mod context;
pub mod dispatcher;
pub mod list;

pub use context::CommandContext;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
