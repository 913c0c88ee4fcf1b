//! Environment and registry setup shared by all commands.

use std::path::PathBuf;

use crate::cli::args::Cli;
use crate::env::{load_env_file, EnvLayer, EnvLayerStack};
use crate::error::Result;
use crate::manifest::Manifest;
use crate::registry::{Delivery, Registry};
use crate::report::ReportOptions;
use crate::secrets::{is_secret, MASK};

/// Global options every command needs.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub manifest: PathBuf,
    pub env_files: Vec<PathBuf>,
    pub mask_secrets: bool,
}

impl CommandContext {
    /// Take the global flags from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            manifest: cli.manifest.clone(),
            env_files: cli.env_files.clone(),
            mask_secrets: cli.mask_secrets,
        }
    }

    /// The process environment with every env file layered on top.
    ///
    /// # Errors
    ///
    /// Returns `EnvFileParse` for an unreadable or malformed env file.
    pub fn env_stack(&self) -> Result<EnvLayerStack> {
        let mut stack = EnvLayerStack::new();
        stack.push(EnvLayer::from_process());
        for path in &self.env_files {
            stack.push(load_env_file(path)?);
        }
        Ok(stack)
    }

    /// Load the manifest and register its modules on a fresh registry.
    pub fn build_registry(&self) -> Result<(Registry, Vec<(String, Delivery)>)> {
        self.build_registry_on(self.env_stack()?)
    }

    /// Same as [`build_registry`](Self::build_registry) over a prepared stack.
    pub fn build_registry_on(
        &self,
        stack: EnvLayerStack,
    ) -> Result<(Registry, Vec<(String, Delivery)>)> {
        let manifest = Manifest::load(&self.manifest)?;
        let mut registry = Registry::with_source(stack);
        let deliveries = manifest.register(&mut registry);
        Ok((registry, deliveries))
    }

    /// Report options matching the flags.
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            mask_secrets: self.mask_secrets,
        }
    }

    /// A value as it may be shown for `key`.
    pub fn display_value<'a>(&self, key: &str, value: &'a str) -> &'a str {
        if self.mask_secrets && !value.is_empty() && is_secret(key) {
            MASK
        } else {
            value
        }
    }
}
