//! CloudWatch Logs Client Wrapper
//!
//! Blocking [`LogsProvider`] over the async AWS SDK client. The wrapper owns a
//! single-threaded tokio runtime and drives one request at a time on it.

#![warn(clippy::all, rust_2018_idioms)]

use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_cloudwatchlogs as cloudwatchlogs;
use aws_sdk_cloudwatchlogs::error::DisplayErrorContext;
use aws_sdk_cloudwatchlogs::operation::filter_log_events::builders::FilterLogEventsFluentBuilder;
use aws_types::region::Region;
use tokio::runtime::Runtime;
use tracing::{debug, info};

use crate::app::config::ClientConfig;
use crate::error::{Error, Result};

use super::provider::LogsProvider;
use super::types::{
    FilterRequest, GroupsRequest, LogEvent, LogGroup, LogStream, Page, StreamsRequest,
};

/// Name reported by the static credentials provider
const CREDENTIALS_PROVIDER_NAME: &str = "cwlogs";

/// CloudWatch Logs client wrapper
pub struct CloudWatchLogsClient {
    runtime: Runtime,
    client: cloudwatchlogs::Client,
}

impl CloudWatchLogsClient {
    /// Create a client for the region and static keys in `config`
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(Error::Runtime)?;

        let credentials = Credentials::new(
            &config.access_key_id,
            &config.secret_access_key,
            None,
            None,
            CREDENTIALS_PROVIDER_NAME,
        );

        let aws_config = runtime.block_on(
            aws_config::defaults(BehaviorVersion::latest())
                .region(Region::new(config.region.clone()))
                .credentials_provider(credentials)
                .load(),
        );

        info!("Created CloudWatch Logs client for region: {}", config.region);

        Ok(Self {
            runtime,
            client: cloudwatchlogs::Client::new(&aws_config),
        })
    }
}

impl LogsProvider for CloudWatchLogsClient {
    fn describe_log_groups(
        &self,
        _request: &GroupsRequest,
        next_token: Option<String>,
    ) -> Result<Page<LogGroup>> {
        let response = self
            .runtime
            .block_on(
                self.client
                    .describe_log_groups()
                    .set_next_token(next_token)
                    .send(),
            )
            .map_err(|e| Error::remote("DescribeLogGroups", DisplayErrorContext(&e).to_string()))?;

        let groups: Vec<LogGroup> = response
            .log_groups
            .unwrap_or_default()
            .into_iter()
            .filter_map(group_from_sdk)
            .collect();

        debug!(
            "DescribeLogGroups returned {} groups, more pages: {}",
            groups.len(),
            response.next_token.is_some()
        );

        Ok(Page::new(groups, response.next_token))
    }

    fn describe_log_streams(
        &self,
        request: &StreamsRequest,
        next_token: Option<String>,
    ) -> Result<Page<LogStream>> {
        let response = self
            .runtime
            .block_on(
                self.client
                    .describe_log_streams()
                    .log_group_name(&request.group)
                    .set_next_token(next_token)
                    .send(),
            )
            .map_err(|e| {
                Error::remote("DescribeLogStreams", DisplayErrorContext(&e).to_string())
            })?;

        let streams: Vec<LogStream> = response
            .log_streams
            .unwrap_or_default()
            .into_iter()
            .filter_map(|stream| stream_from_sdk(stream, &request.group))
            .collect();

        debug!(
            "DescribeLogStreams for {} returned {} streams, more pages: {}",
            request.group,
            streams.len(),
            response.next_token.is_some()
        );

        Ok(Page::new(streams, response.next_token))
    }

    fn filter_log_events(
        &self,
        request: &FilterRequest,
        next_token: Option<String>,
    ) -> Result<Page<LogEvent>> {
        let response = self
            .runtime
            .block_on(filter_call(&self.client, request, next_token).send())
            .map_err(|e| Error::remote("FilterLogEvents", DisplayErrorContext(&e).to_string()))?;

        let events: Vec<LogEvent> = response
            .events
            .unwrap_or_default()
            .into_iter()
            .map(event_from_sdk)
            .collect();

        debug!(
            "FilterLogEvents for {} returned {} events, more pages: {}",
            request.group,
            events.len(),
            response.next_token.is_some()
        );

        Ok(Page::new(events, response.next_token))
    }
}

/// `FilterLogEvents` call for one page of `request`
// `interleaved` is deprecated service-side; results are always interleaved
#[allow(deprecated)]
fn filter_call(
    client: &cloudwatchlogs::Client,
    request: &FilterRequest,
    next_token: Option<String>,
) -> FilterLogEventsFluentBuilder {
    client
        .filter_log_events()
        .log_group_name(&request.group)
        .set_filter_pattern(request.pattern.clone())
        .set_start_time(request.range.start_millis())
        .set_end_time(request.range.end_millis())
        .interleaved(request.interleaved)
        .set_next_token(next_token)
}

fn group_from_sdk(group: cloudwatchlogs::types::LogGroup) -> Option<LogGroup> {
    group.log_group_name.map(LogGroup::new)
}

fn stream_from_sdk(stream: cloudwatchlogs::types::LogStream, group: &str) -> Option<LogStream> {
    stream
        .log_stream_name
        .map(|name| LogStream::new(name, group))
}

fn event_from_sdk(event: cloudwatchlogs::types::FilteredLogEvent) -> LogEvent {
    LogEvent::new(
        event.log_stream_name.unwrap_or_default(),
        event.event_id.unwrap_or_default(),
        event.message.unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::data_plane::cloudwatch_logs::request::events_request;
    use cloudwatchlogs::types::{
        FilteredLogEvent, LogGroup as SdkLogGroup, LogStream as SdkLogStream,
    };

    #[test]
    fn test_group_from_sdk() {
        let named = SdkLogGroup::builder()
            .log_group_name("/aws/lambda/my-function")
            .build();
        let unnamed = SdkLogGroup::builder().build();

        assert_eq!(
            group_from_sdk(named),
            Some(LogGroup::new("/aws/lambda/my-function"))
        );
        assert_eq!(group_from_sdk(unnamed), None);
    }

    #[test]
    fn test_stream_from_sdk_takes_group_from_request() {
        let stream = SdkLogStream::builder()
            .log_stream_name("2024/01/01/[$LATEST]abc")
            .build();

        assert_eq!(
            stream_from_sdk(stream, "/aws/lambda/my-function"),
            Some(LogStream::new(
                "2024/01/01/[$LATEST]abc",
                "/aws/lambda/my-function"
            ))
        );
    }

    #[test]
    fn test_event_from_sdk_defaults_missing_fields() {
        let full = FilteredLogEvent::builder()
            .log_stream_name("stream-1")
            .event_id("3695")
            .message("hello")
            .timestamp(1_000)
            .build();
        let sparse = FilteredLogEvent::builder().message("orphan").build();

        assert_eq!(event_from_sdk(full), LogEvent::new("stream-1", "3695", "hello"));
        assert_eq!(event_from_sdk(sparse), LogEvent::new("", "", "orphan"));
    }

    fn offline_client() -> cloudwatchlogs::Client {
        let config = cloudwatchlogs::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .build();
        cloudwatchlogs::Client::from_conf(config)
    }

    #[test]
    #[allow(deprecated)]
    fn test_filter_call_pattern_and_since() {
        let client = offline_client();
        let request =
            events_request("mygroup", Some("ERROR"), Some("2023-01-01T00:00:00"), None).unwrap();

        let call = filter_call(&client, &request, None);
        let input = call.as_input();

        assert_eq!(input.get_log_group_name().as_deref(), Some("mygroup"));
        assert_eq!(input.get_filter_pattern().as_deref(), Some("ERROR"));
        assert_eq!(*input.get_start_time(), Some(1_672_531_200_000));
        assert_eq!(*input.get_end_time(), None);
        assert_eq!(*input.get_interleaved(), Some(true));
        assert_eq!(*input.get_next_token(), None);
    }

    #[test]
    fn test_filter_call_empty_pattern_sends_none() {
        let client = offline_client();
        let request =
            events_request("mygroup", Some(""), None, Some("2024-01-01T00:00:01")).unwrap();

        let call = filter_call(&client, &request, Some("page-2".to_string()));
        let input = call.as_input();

        assert_eq!(*input.get_filter_pattern(), None);
        assert_eq!(*input.get_start_time(), None);
        assert_eq!(*input.get_end_time(), Some(1_704_067_201_000));
        assert_eq!(input.get_next_token().as_deref(), Some("page-2"));
    }
}
