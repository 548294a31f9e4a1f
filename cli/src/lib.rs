//! # Notion Bridge CLI
//!
//! Argument groups and exit handling shared by the `notion-adapter`,
//! `update-notion-database` and `notion-publish` binaries.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use notion_bridge::TracingLevel;

/// Logging flags accepted by every binary
#[derive(Args, Debug, Clone, Default)]
pub struct LogArgs {
    /// Log level: error, warn, info, debug or trace [env: NOTION_BRIDGE_LOG]
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<TracingLevel>,

    /// Raise the log level one step per occurrence
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also write logs to this file
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

impl LogArgs {
    /// Level chosen by the flags, else the environment, else `default`
    #[must_use]
    pub fn level(&self, default: TracingLevel) -> TracingLevel {
        self.log_level
            .unwrap_or_else(|| TracingLevel::from_env_or(default))
            .raised_by(self.verbose)
    }

    /// Install the global subscriber
    pub fn init(&self, default: TracingLevel) {
        self.level(default).init_tracing(self.log_file.clone());
    }
}

/// Map a run outcome to the process exit status, printing any failure to stderr
///
/// Library failures exit with status 1. Usage errors never get here; clap exits with 2.
#[must_use]
pub fn finish(result: notion_bridge::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            tracing::debug!("Run failed: {}", report.current_context());
            eprintln!("Error: {report:?}");
            ExitCode::FAILURE
        },
    }
}
