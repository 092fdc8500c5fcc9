//! CloudWatch Logs Integration Module
//!
//! Lists log groups, log streams and filtered log events.
//!
//! ## Features
//!
//! - Request builders that validate command-line input up front
//! - Pull-based pagination over `DescribeLogGroups`, `DescribeLogStreams`
//!   and `FilterLogEvents`
//! - A [`LogsProvider`] seam so the pipeline runs without AWS in tests
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cwlogs::app::config::ClientConfig;
//! use cwlogs::app::data_plane::cloudwatch_logs::{
//!     events_request, log_event_pages, CloudWatchLogsClient,
//! };
//!
//! # fn example() -> cwlogs::Result<()> {
//! let config = ClientConfig::new("us-east-1", "AKIA...", "secret");
//! let client = CloudWatchLogsClient::new(&config)?;
//!
//! let request = events_request(
//!     "/aws/lambda/my-function",
//!     Some("ERROR"),
//!     Some("2024-01-01T00:00:00"),
//!     None,
//! )?;
//!
//! for page in log_event_pages(&client, &request) {
//!     for event in page? {
//!         println!("{}: {}", event.stream_name, event.message);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all, rust_2018_idioms)]

pub mod client;
pub mod pager;
pub mod provider;
pub mod request;
pub mod types;

// Re-export commonly used types
pub use client::CloudWatchLogsClient;
pub use pager::Pages;
pub use provider::{log_event_pages, log_group_pages, log_stream_pages, LogsProvider};
pub use request::{events_request, groups_request, streams_request};
pub use types::{
    FilterRequest, GroupsRequest, LogEvent, LogGroup, LogStream, Page, StreamsRequest, TimeRange,
};
