//! Check command implementation.
//!
//! The `envexist check` command resolves the manifest against the
//! environment. On failure it prints the full report and exits 1.

use console::style;
use std::io::Write;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};
use crate::cli::args::CheckArgs;
use crate::error::{EnvexistError, Result};

/// The check command implementation.
pub struct CheckCommand {
    context: CommandContext,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(context: CommandContext, args: CheckArgs) -> Self {
        Self { context, args }
    }
}

impl Command for CheckCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let (mut registry, deliveries) = self.context.build_registry()?;

        match registry.try_resolve() {
            Ok(()) => {
                writeln!(
                    out,
                    "{} All environment variables resolved",
                    style("✓").green().bold()
                )?;

                if self.args.print {
                    for (module, delivery) in &deliveries {
                        let Some(data) = delivery.try_recv() else {
                            continue;
                        };
                        let mut vars: Vec<_> = data.into_iter().collect();
                        vars.sort();
                        for (name, value) in vars {
                            let key = format!("{module}_{name}");
                            writeln!(out, "{key}={}", self.context.display_value(&key, &value))?;
                        }
                    }
                }

                Ok(CommandResult::success())
            }
            Err(EnvexistError::Unresolved { missing }) => {
                registry.write_report(&mut *out, self.context.report_options())?;
                writeln!(
                    out,
                    "{} Missing required variables: {}",
                    style("✗").red().bold(),
                    missing.join(", ")
                )?;
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}
