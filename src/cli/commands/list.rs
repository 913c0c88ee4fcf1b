//! List command implementation.
//!
//! The `envexist list` command shows every declared variable, whether or
//! not the environment satisfies it.

use serde::Serialize;
use std::io::Write;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};
use crate::cli::args::ListArgs;
use crate::env::EnvLayerStack;
use crate::error::Result;
use crate::registry::{Registry, Requirement};

/// The list command implementation.
pub struct ListCommand {
    context: CommandContext,
    args: ListArgs,
}

/// One variable in `--json` output.
#[derive(Debug, Serialize)]
struct ListEntry<'a> {
    key: String,
    module: &'a str,
    name: &'a str,
    requirement: Requirement,
    value: &'a str,
    /// Layer that supplied the value; `None` when the environment lacks it.
    source: Option<&'a str>,
    satisfied: bool,
    default_applied: bool,
    description: &'a str,
    example: &'a str,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(context: CommandContext, args: ListArgs) -> Self {
        Self { context, args }
    }

    fn entries<'a>(
        &self,
        registry: &'a Registry,
        stack: &'a EnvLayerStack,
    ) -> Vec<ListEntry<'a>> {
        let mut entries = Vec::new();
        for module in registry.modules() {
            for (name, spec) in module.specs() {
                let key = module.key_for(name);
                let value = self.context.display_value(&key, &spec.value);
                let source = stack.source_of(&key);
                entries.push(ListEntry {
                    key,
                    module: module.name(),
                    name,
                    requirement: spec.requirement,
                    value,
                    source,
                    satisfied: spec.satisfied,
                    default_applied: spec.default_applied,
                    description: &spec.description,
                    example: &spec.example,
                });
            }
        }
        entries
    }
}

impl Command for ListCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let stack = self.context.env_stack()?;
        let (registry, _deliveries) = self.context.build_registry_on(stack.clone())?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&self.entries(&registry, &stack))
                .map_err(anyhow::Error::from)?;
            writeln!(out, "{json}")?;
        } else {
            registry.write_report(&mut *out, self.context.report_options())?;
        }

        Ok(CommandResult::success())
    }
}
