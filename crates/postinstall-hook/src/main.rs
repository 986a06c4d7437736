//! Post-install hook entry point.

use clap::Parser;
use postinstall_hook::exec::SystemRunner;
use postinstall_hook::hook;
use postinstall_hook::logging::{LogConfig, LogFormat, init_logging};
use postinstall_hook::platform::Os;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    init_logging(&log_config_from_cli(&cli));

    let os = Os::current();
    tracing::debug!("Detected platform: {}", os.display_name());

    let exit_code = match hook::run(&SystemRunner, os) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: postinstall failed: {error}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config
}
