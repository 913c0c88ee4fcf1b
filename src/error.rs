//! Error types for envexist operations.
//!
//! This module defines [`EnvexistError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - The resolution pass itself reports failure as a plain `bool`
//!   ([`Registry::resolve`](crate::Registry::resolve)); [`EnvexistError::Unresolved`]
//!   exists for callers who prefer `?` via
//!   [`Registry::try_resolve`](crate::Registry::try_resolve)
//! - Manifest and env file problems used by the CLI get their own variants
//! - Use `anyhow::Error` (via `EnvexistError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envexist operations.
#[derive(Debug, Error)]
pub enum EnvexistError {
    /// Manifest file not found at expected location.
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Failed to parse manifest file.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// Failed to read or parse a dotenv file.
    #[error("Failed to load env file {path}: {message}")]
    EnvFileParse { path: PathBuf, message: String },

    /// One or more required variables have no value.
    #[error("Required environment variables are not set: {}", missing.join(", "))]
    Unresolved { missing: Vec<String> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for envexist operations.
pub type Result<T> = std::result::Result<T, EnvexistError>;
