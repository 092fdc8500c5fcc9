//! CloudWatch Logs Data Types
//!
//! Records returned by the three listing operations, the request descriptors
//! that drive them, and the page shape shared by all of them.

#![warn(clippy::all, rust_2018_idioms)]

use chrono::{DateTime, Utc};

/// A log group as returned by `DescribeLogGroups`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogGroup {
    pub name: String,
}

impl LogGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A log stream as returned by `DescribeLogStreams`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogStream {
    pub name: String,
    /// Group the stream was listed from (taken from the request)
    pub group_name: String,
}

impl LogStream {
    pub fn new(name: impl Into<String>, group_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group_name: group_name.into(),
        }
    }
}

/// A single matched event as returned by `FilterLogEvents`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub stream_name: String,
    pub event_id: String,
    pub message: String,
}

impl LogEvent {
    pub fn new(
        stream_name: impl Into<String>,
        event_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            stream_name: stream_name.into(),
            event_id: event_id.into(),
            message: message.into(),
        }
    }
}

/// Inclusive time bounds for event filtering. Either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl TimeRange {
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// Start bound in epoch milliseconds, the unit `FilterLogEvents` expects.
    /// Passing seconds here instead would put the range in January 1970.
    pub fn start_millis(&self) -> Option<i64> {
        self.start.map(|t| t.timestamp_millis())
    }

    /// End bound in epoch milliseconds
    pub fn end_millis(&self) -> Option<i64> {
        self.end.map(|t| t.timestamp_millis())
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// Request for `DescribeLogGroups`. Carries no parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupsRequest;

/// Request for `DescribeLogStreams`, scoped to one group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamsRequest {
    pub group: String,
}

/// Request for `FilterLogEvents`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRequest {
    pub group: String,
    /// Filter expression in CloudWatch Logs syntax, sent verbatim
    pub pattern: Option<String>,
    pub range: TimeRange,
    /// Always true: events from all streams come back merged by time
    pub interleaved: bool,
}

/// One batch of records from a single remote call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Continuation token. Absent or empty on the last page.
    pub next_token: Option<String>,
}

impl<T> Page<T> {
    /// Create a page that has more pages after it
    pub fn new(items: Vec<T>, next_token: Option<String>) -> Self {
        Self { items, next_token }
    }

    /// Create a terminal page
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_token: None,
        }
    }

    pub fn is_last(&self) -> bool {
        self.next_token.as_deref().map_or(true, str::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_time_range_millis() {
        let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let range = TimeRange::new(Some(start), None);

        assert_eq!(range.start_millis(), Some(1_672_531_200_000));
        assert_eq!(range.end_millis(), None);
        assert!(!range.is_unbounded());
        assert!(TimeRange::default().is_unbounded());
    }

    #[test]
    fn test_page_is_last() {
        assert!(Page::<LogGroup>::last(vec![]).is_last());
        assert!(Page::<LogGroup>::new(vec![], Some(String::new())).is_last());
        assert!(!Page::<LogGroup>::new(vec![], Some("token".to_string())).is_last());
    }

    #[test]
    fn test_log_stream_creation() {
        let stream = LogStream::new("2024/01/01/[$LATEST]abc", "/aws/lambda/my-function");

        assert_eq!(stream.name, "2024/01/01/[$LATEST]abc");
        assert_eq!(stream.group_name, "/aws/lambda/my-function");
    }
}
