//! envexist CLI entry point.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use envexist::cli::commands::CommandContext;
use envexist::cli::{Cli, CommandDispatcher};
use envexist::EnvexistError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("envexist=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("envexist=info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("envexist starting with args: {:?}", cli);

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let dispatcher = CommandDispatcher::new(CommandContext::from_cli(&cli));
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match dispatcher.dispatch(&cli, &mut out) {
        Ok(result) => {
            let _ = out.flush();
            ExitCode::from(result.exit_code as u8)
        }
        Err(e) => {
            let _ = out.flush();
            eprintln!("{} {}", console::style("Error:").red().bold(), e);
            match e {
                EnvexistError::ManifestNotFound { .. }
                | EnvexistError::ManifestParse { .. }
                | EnvexistError::EnvFileParse { .. } => ExitCode::from(2),
                _ => ExitCode::from(1),
            }
        }
    }
}
