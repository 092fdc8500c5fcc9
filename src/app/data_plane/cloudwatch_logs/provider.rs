//! Page-level access to CloudWatch Logs.
//!
//! [`LogsProvider`] fetches exactly one page per call and knows nothing about
//! continuation beyond handing the token back. The listing helpers wrap a
//! provider in a [`Pages`] iterator.

#![warn(clippy::all, rust_2018_idioms)]

use crate::error::Result;

use super::pager::Pages;
use super::types::{
    FilterRequest, GroupsRequest, LogEvent, LogGroup, LogStream, Page, StreamsRequest,
};

/// One page-fetch operation per remote API call
pub trait LogsProvider {
    fn describe_log_groups(
        &self,
        request: &GroupsRequest,
        next_token: Option<String>,
    ) -> Result<Page<LogGroup>>;

    fn describe_log_streams(
        &self,
        request: &StreamsRequest,
        next_token: Option<String>,
    ) -> Result<Page<LogStream>>;

    fn filter_log_events(
        &self,
        request: &FilterRequest,
        next_token: Option<String>,
    ) -> Result<Page<LogEvent>>;
}

/// All pages of log groups
pub fn log_group_pages<'a, P: LogsProvider + ?Sized>(
    provider: &'a P,
    request: &'a GroupsRequest,
) -> impl Iterator<Item = Result<Vec<LogGroup>>> + 'a {
    Pages::new(move |token| provider.describe_log_groups(request, token))
}

/// All pages of log streams in one group
pub fn log_stream_pages<'a, P: LogsProvider + ?Sized>(
    provider: &'a P,
    request: &'a StreamsRequest,
) -> impl Iterator<Item = Result<Vec<LogStream>>> + 'a {
    Pages::new(move |token| provider.describe_log_streams(request, token))
}

/// All pages of events matching a filter
pub fn log_event_pages<'a, P: LogsProvider + ?Sized>(
    provider: &'a P,
    request: &'a FilterRequest,
) -> impl Iterator<Item = Result<Vec<LogEvent>>> + 'a {
    Pages::new(move |token| provider.filter_log_events(request, token))
}
