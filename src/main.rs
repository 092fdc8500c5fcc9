#![warn(clippy::all, rust_2018_idioms)]

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::prelude::*;

use cwlogs::app::cli::Cli;
use cwlogs::app::commands::{self, Command};
use cwlogs::app::config::ClientConfig;
use cwlogs::app::data_plane::CloudWatchLogsClient;

/// Filter used when RUST_LOG is unset. AWS SDK crates stay at warn.
fn default_filter(verbose: u8) -> String {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    format!(
        "cwlogs={},aws_config=warn,aws_sigv4=warn,aws_smithy_runtime=warn,aws_smithy_runtime_api=warn,aws_smithy_http=warn,hyper=warn",
        level
    )
}

fn init_logging(verbose: u8) {
    // stdout carries the listing, so diagnostics go to stderr
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::builder().parse(default_filter(verbose)))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal()),
    );

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("cwlogs: failed to set tracing subscriber: {}", e);
        return;
    }

    // Bridge log crate events from dependencies to tracing
    if let Err(e) = tracing_log::LogTracer::init() {
        eprintln!("cwlogs: failed to initialize log-to-tracing bridge: {}", e);
    }
}

fn run(command: &Command, config: &ClientConfig) -> anyhow::Result<()> {
    // Bad arguments fail here, before a client exists
    command.validate()?;

    let client = CloudWatchLogsClient::new(config).context(command.phase())?;

    let stdout = std::io::stdout();
    commands::run(command, &client, stdout.lock())
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    let config = match cli.client_config() {
        Ok(config) => config,
        Err(e) => e.exit(),
    };
    let command = cli.to_command();

    tracing::debug!("Running {:?} with {:?}", command, config);

    match run(&command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        // Reader went away (`cwlogs groups | head`); nothing left to report
        Err(e) if commands::is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("cwlogs: error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
