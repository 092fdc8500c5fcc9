//! Data Plane Services Module
//!
//! AWS data plane integrations: read-only queries against data held inside
//! AWS resources, as opposed to control plane resource management.
//!
//! ## Available Services
//!
//! - **CloudWatch Logs**: list log groups and streams, filter log events

pub mod cloudwatch_logs;

pub use cloudwatch_logs::{CloudWatchLogsClient, LogsProvider};
