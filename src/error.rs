//! Error types for cwlogs operations.

use thiserror::Error;

/// Result type alias for cwlogs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A command-line value failed local validation.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The CloudWatch Logs service (or the SDK on its behalf) rejected a call.
    #[error("{operation} failed: {message}")]
    Remote {
        operation: &'static str,
        message: String,
    },

    /// The async runtime backing the SDK client could not be created.
    #[error("failed to create async runtime")]
    Runtime(#[source] std::io::Error),

    /// Writing formatted records failed.
    #[error("failed to write output")]
    Output(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn remote(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Remote {
            operation,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn render(err: Error) -> String {
        format!("{:#}", anyhow::Error::from(err).context("List log groups"))
    }

    #[test]
    fn test_io_cause_rendered_once() {
        let rendered = render(Error::Output(io::Error::new(
            io::ErrorKind::BrokenPipe,
            "broken pipe",
        )));
        assert_eq!(rendered, "List log groups: failed to write output: broken pipe");

        let rendered = render(Error::Runtime(io::Error::new(
            io::ErrorKind::Other,
            "no reactor",
        )));
        assert_eq!(rendered.matches("no reactor").count(), 1);
    }
}
