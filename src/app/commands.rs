//! Command dispatch
//!
//! Each command builds its request, drains the matching page iterator and
//! writes every page as it arrives. The first error aborts the command;
//! lines already written stay written.

#![warn(clippy::all, rust_2018_idioms)]

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use crate::app::data_plane::cloudwatch_logs::{
    events_request, groups_request, log_event_pages, log_group_pages, log_stream_pages,
    streams_request, LogsProvider,
};
use crate::app::output::{Line, LineWriter};

/// A fully parsed invocation, independent of how it was parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Groups,
    Streams {
        group: String,
    },
    Events {
        group: String,
        pattern: Option<String>,
        since: Option<String>,
        until: Option<String>,
    },
}

impl Command {
    /// Label prefixed to any error this command returns
    pub fn phase(&self) -> &'static str {
        match self {
            Command::Groups => "List log groups",
            Command::Streams { .. } => "List log streams",
            Command::Events { .. } => "List log events",
        }
    }

    /// Check arguments without contacting the service
    pub fn validate(&self) -> Result<()> {
        match self {
            Command::Groups => {}
            Command::Streams { group } => {
                streams_request(group).context(self.phase())?;
            }
            Command::Events {
                group,
                pattern,
                since,
                until,
            } => {
                events_request(
                    group,
                    pattern.as_deref(),
                    since.as_deref(),
                    until.as_deref(),
                )
                .context(self.phase())?;
            }
        }
        Ok(())
    }
}

/// Run `command` against `provider`, writing lines to `out`
pub fn run<P, W>(command: &Command, provider: &P, out: W) -> Result<()>
where
    P: LogsProvider + ?Sized,
    W: Write,
{
    let mut writer = LineWriter::new(out);
    let pages = dispatch(command, provider, &mut writer).context(command.phase())?;

    info!(
        "{}: {} lines from {} pages",
        command.phase(),
        writer.lines(),
        pages
    );
    Ok(())
}

/// True when `err` came from stdout being closed by the reader (`| head`)
pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<crate::Error>(),
            Some(crate::Error::Output(io)) if io.kind() == std::io::ErrorKind::BrokenPipe
        )
    })
}

fn dispatch<P, W>(
    command: &Command,
    provider: &P,
    writer: &mut LineWriter<W>,
) -> crate::Result<usize>
where
    P: LogsProvider + ?Sized,
    W: Write,
{
    match command {
        Command::Groups => {
            let request = groups_request();
            drain(log_group_pages(provider, &request), writer)
        }
        Command::Streams { group } => {
            let request = streams_request(group)?;
            drain(log_stream_pages(provider, &request), writer)
        }
        Command::Events {
            group,
            pattern,
            since,
            until,
        } => {
            let request = events_request(
                group,
                pattern.as_deref(),
                since.as_deref(),
                until.as_deref(),
            )?;
            drain(log_event_pages(provider, &request), writer)
        }
    }
}

fn drain<T, I, W>(pages: I, writer: &mut LineWriter<W>) -> crate::Result<usize>
where
    T: Line,
    I: Iterator<Item = crate::Result<Vec<T>>>,
    W: Write,
{
    let mut count = 0;
    for page in pages {
        writer.write_page(&page?)?;
        count += 1;
    }
    Ok(count)
}
