//! cwlogs - CLI for AWS CloudWatch Logs
//!
//! Lists log groups, log streams and filtered log events, one line per record.
//!
//! # Commands
//!
//! - **groups**: every log group in the region
//! - **streams `<group>`**: every log stream in a group
//! - **events `<group>` `[pattern]` `[--since TIME]` `[--until TIME]`**: events
//!   matching a CloudWatch Logs filter pattern, interleaved across streams.
//!   This is the default command.
//!
//! # Architecture Overview
//!
//! Every command is the same pipeline:
//!
//! - **Request building** ([`app::data_plane::cloudwatch_logs::request`]): validates
//!   arguments and parses `--since`/`--until` before any network access
//! - **Pagination** ([`app::data_plane::cloudwatch_logs::Pages`]): a pull-based
//!   iterator that fetches one page per step through a
//!   [`app::data_plane::LogsProvider`]
//! - **Rendering** ([`app::output::LineWriter`]): one line per record, flushed per page
//! - **Dispatch** ([`app::commands::run`]): wires the three together and labels
//!   failures with the command's phase
//!
//! The production provider, [`app::data_plane::CloudWatchLogsClient`], wraps the
//! AWS SDK client on a single-threaded tokio runtime so the program stays
//! synchronous and issues one request at a time.

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod error;

pub use error::{Error, Result};
