//! Environment lookup.
//!
//! The registry never touches the process environment directly. Every
//! declaration asks an [`EnvSource`] for its key instead, which keeps the
//! registry testable and lets the CLI layer `.env` files over the real
//! environment.
//!
//! # Modules
//!
//! - [`source`] - The [`EnvSource`] trait and the process environment
//! - [`layer`] - Priority layers of variables with source tracking
//! - [`dotenv`] - `.env` file parsing

pub mod dotenv;
pub mod layer;
pub mod source;

pub use dotenv::{load_env_file, DotenvParser};
pub use layer::{EnvLayer, EnvLayerStack};
pub use source::{EnvSource, SystemEnv};
