//! Application modules: argument parsing, configuration, command dispatch,
//! output rendering and the CloudWatch Logs data plane.

pub mod cli;
pub mod commands;
pub mod config;
pub mod data_plane;
pub mod output;
pub mod time_parse;
