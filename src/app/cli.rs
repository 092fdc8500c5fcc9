//! Command-line argument parsing.
//!
//! `events` is the default command: when the first positional argument is
//! not a known subcommand, `events` is inserted in front of it before clap
//! sees the arguments.

#![warn(clippy::all, rust_2018_idioms)]

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};

use crate::app::commands::Command;
use crate::app::config::{ClientConfig, DEFAULT_REGION};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_BRANCH"),
    " ",
    env!("GIT_COMMIT"),
    ")"
);

const SUBCOMMANDS: &[&str] = &["groups", "streams", "events", "help"];

/// Global flags that consume the following argument as their value
const VALUE_FLAGS: &[&str] = &["--region", "--access-key-id", "--secret-access-key"];

/// CLI for AWS CloudWatch Logs.
#[derive(Parser, Debug)]
#[command(name = "cwlogs")]
#[command(version, long_version = LONG_VERSION, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// AWS region.
    #[arg(long, env = "AWS_REGION", default_value = DEFAULT_REGION, global = true)]
    pub region: String,

    /// AWS access key ID.
    #[arg(long, env = "AWS_ACCESS_KEY_ID", hide_env_values = true, global = true)]
    pub access_key_id: Option<String>,

    /// AWS secret access key.
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true, global = true)]
    pub secret_access_key: Option<String>,

    /// Log diagnostics to stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List log groups.
    Groups,

    /// List log streams.
    Streams {
        /// Log group from which to list streams.
        group: String,
    },

    /// List log events (default command).
    Events {
        /// Log group from which to list events.
        group: String,

        /// Filter events matching this pattern.
        pattern: Option<String>,

        /// Filter events since (gte) this time, YYYY-MM-DDTHH:MM:SS in UTC.
        #[arg(long, value_name = "TIME")]
        since: Option<String>,

        /// Filter events until (lte) this time, YYYY-MM-DDTHH:MM:SS in UTC.
        #[arg(long, value_name = "TIME")]
        until: Option<String>,
    },
}

impl Cli {
    /// Parse the process arguments, exiting with usage on error
    pub fn parse_args() -> Self {
        Self::parse_from(with_default_command(std::env::args_os()))
    }

    /// Parse `args` (program name first) without exiting
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(with_default_command(args))
    }

    /// Region and credentials; both keys are required
    pub fn client_config(&self) -> Result<ClientConfig, clap::Error> {
        let access_key_id = required(&self.access_key_id, "--access-key-id")?;
        let secret_access_key = required(&self.secret_access_key, "--secret-access-key")?;
        Ok(ClientConfig::new(
            self.region.clone(),
            access_key_id,
            secret_access_key,
        ))
    }

    pub fn to_command(&self) -> Command {
        self.command.clone().into()
    }
}

impl From<Commands> for Command {
    fn from(commands: Commands) -> Self {
        match commands {
            Commands::Groups => Command::Groups,
            Commands::Streams { group } => Command::Streams { group },
            Commands::Events {
                group,
                pattern,
                since,
                until,
            } => Command::Events {
                group,
                pattern,
                since,
                until,
            },
        }
    }
}

fn required(value: &Option<String>, flag: &str) -> Result<String, clap::Error> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(Cli::command().error(
            ErrorKind::MissingRequiredArgument,
            format!("the following required argument was not provided: {}", flag),
        )),
    }
}

/// Insert `events` before the first argument that is neither a global flag
/// nor a subcommand name.
pub fn with_default_command<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let mut i = 1;
    while i < args.len() {
        let arg = args[i].to_string_lossy().into_owned();

        if VALUE_FLAGS.contains(&arg.as_str()) {
            i += 2;
            continue;
        }
        if is_global_switch(&arg) {
            i += 1;
            continue;
        }
        if SUBCOMMANDS.contains(&arg.as_str())
            || matches!(arg.as_str(), "-h" | "--help" | "-V" | "--version")
        {
            return args;
        }

        args.insert(i, OsString::from("events"));
        return args;
    }

    args
}

fn is_global_switch(arg: &str) -> bool {
    if VALUE_FLAGS
        .iter()
        .any(|flag| arg.starts_with(&format!("{}=", flag)))
    {
        return true;
    }
    arg == "--verbose"
        || (arg.len() > 1 && arg.starts_with('-') && arg[1..].chars().all(|c| c == 'v'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rewrite(args: &[&str]) -> Vec<String> {
        with_default_command(args.iter().copied())
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec![
            "cwlogs",
            "--access-key-id",
            "AKID",
            "--secret-access-key",
            "SECRET",
        ];
        full.extend_from_slice(args);
        Cli::try_parse_args(full).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_inserted() {
        assert_eq!(
            rewrite(&["cwlogs", "mygroup", "ERROR"]),
            vec!["cwlogs", "events", "mygroup", "ERROR"]
        );
        assert_eq!(
            rewrite(&["cwlogs", "--region", "eu-west-1", "-vv", "mygroup"]),
            vec!["cwlogs", "--region", "eu-west-1", "-vv", "events", "mygroup"]
        );
        assert_eq!(
            rewrite(&["cwlogs", "--region=eu-west-1", "--since", "2024-01-01T00:00:00", "g"]),
            vec![
                "cwlogs",
                "--region=eu-west-1",
                "events",
                "--since",
                "2024-01-01T00:00:00",
                "g"
            ]
        );
    }

    #[test]
    fn test_known_subcommands_untouched() {
        for args in [
            vec!["cwlogs", "groups"],
            vec!["cwlogs", "--region", "us-west-2", "streams", "g"],
            vec!["cwlogs", "events", "g"],
            vec!["cwlogs", "--help"],
            vec!["cwlogs", "--version"],
            vec!["cwlogs"],
        ] {
            assert_eq!(rewrite(&args), args);
        }
    }

    #[test]
    fn test_parse_groups() {
        let cli = parse(&["groups"]);

        assert_eq!(cli.to_command(), Command::Groups);
        assert_eq!(
            cli.client_config().unwrap(),
            ClientConfig::new(cli.region.clone(), "AKID", "SECRET")
        );
    }

    #[test]
    fn test_parse_streams() {
        let cli = parse(&["streams", "/aws/lambda/api"]);

        assert_eq!(
            cli.to_command(),
            Command::Streams {
                group: "/aws/lambda/api".to_string()
            }
        );
    }

    #[test]
    fn test_parse_events_default_command() {
        let cli = parse(&["mygroup", "ERROR", "--since", "2023-01-01T00:00:00"]);

        assert_eq!(
            cli.to_command(),
            Command::Events {
                group: "mygroup".to_string(),
                pattern: Some("ERROR".to_string()),
                since: Some("2023-01-01T00:00:00".to_string()),
                until: None,
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_args([
            "cwlogs",
            "groups",
            "--region",
            "ap-south-1",
            "--access-key-id",
            "AKID",
            "--secret-access-key",
            "SECRET",
        ])
        .unwrap();

        assert_eq!(cli.region, "ap-south-1");
        assert_eq!(cli.client_config().unwrap().access_key_id, "AKID");
    }

    #[test]
    fn test_events_requires_group() {
        let err = Cli::try_parse_args([
            "cwlogs",
            "--access-key-id",
            "a",
            "--secret-access-key",
            "b",
            "events",
        ])
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
