//! Request construction for the three listing operations.
//!
//! All validation of command-line input happens here, before any client is
//! created, so a bad argument never reaches the network.

#![warn(clippy::all, rust_2018_idioms)]

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::app::time_parse::parse_time;
use crate::error::{Error, Result};

use super::types::{FilterRequest, GroupsRequest, StreamsRequest, TimeRange};

/// Request for listing every log group in the region
pub fn groups_request() -> GroupsRequest {
    GroupsRequest
}

/// Request for listing the streams of `group`
pub fn streams_request(group: &str) -> Result<StreamsRequest> {
    let group = require_group(group)?;
    Ok(StreamsRequest { group })
}

/// Request for filtering the events of `group`.
///
/// Empty `pattern`, `since` and `until` values are treated as absent. The
/// pattern is not validated locally; its syntax belongs to CloudWatch Logs.
pub fn events_request(
    group: &str,
    pattern: Option<&str>,
    since: Option<&str>,
    until: Option<&str>,
) -> Result<FilterRequest> {
    let group = require_group(group)?;

    let start = non_empty(since)
        .map(|value| parse_bound("--since", value))
        .transpose()?;
    let end = non_empty(until)
        .map(|value| parse_bound("--until", value))
        .transpose()?;

    let request = FilterRequest {
        group,
        pattern: non_empty(pattern).map(str::to_string),
        range: TimeRange::new(start, end),
        interleaved: true,
    };

    debug!(
        "Built filter request: {:?} (time bounded: {})",
        request,
        !request.range.is_unbounded()
    );
    Ok(request)
}

fn parse_bound(flag: &str, value: &str) -> Result<DateTime<Utc>> {
    parse_time(value).map_err(|e| match e {
        Error::InvalidArgument { message } => {
            Error::invalid_argument(format!("{}: {}", flag, message))
        }
        other => other,
    })
}

fn require_group(group: &str) -> Result<String> {
    if group.is_empty() {
        return Err(Error::invalid_argument("log group name must not be empty"));
    }
    Ok(group.to_string())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
