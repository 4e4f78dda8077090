//! Teamdeck CLI
//!
//! Main entry point for the `teamdeck` binary.

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use teamdeck_cli::cli::Cli;
use teamdeck_cli::CliError;
use teamdeck_common_config::Environment;
use teamdeck_common_log::{LogConfig, LogLevel};

fn main() -> ExitCode {
    if let Err(e) = Environment::init() {
        eprintln!("warning: {e}");
    }
    let cli = Cli::parse();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = e.code(), "{e}");
            eprintln!("error[{}]: {e}", e.code());
            if let Some(hint) = e.hint() {
                eprintln!("hint: {hint}");
            }
            e.exit_code()
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = cli.load_config()?;
    init_logging(&cli, &config);
    cli.execute(config).await
}

fn init_logging(cli: &Cli, config: &teamdeck_common_config::TeamdeckConfig) {
    let mut log = LogConfig::from_settings(
        &config.logging.level,
        &config.logging.format,
        config.logging.file.clone(),
    )
    .with_env_overrides();

    let explicit = match cli.verbose {
        0 if cli.quiet => Some(LogLevel::Error),
        0 => None,
        1 => Some(LogLevel::Debug),
        _ => Some(LogLevel::Trace),
    };
    if let Some(level) = explicit {
        log = log.with_level(level);
    }

    if let Err(e) = teamdeck_common_log::init(log) {
        eprintln!("warning: {e}");
    }
}
