//! Client configuration
//!
//! Built once at startup from command-line flags and the environment, then
//! passed by reference to client construction.

#![warn(clippy::all, rust_2018_idioms)]

/// Region used when neither `--region` nor `AWS_REGION` is given
pub const DEFAULT_REGION: &str = "us-east-1";

/// Region and static credentials for the CloudWatch Logs client
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl ClientConfig {
    pub fn new(
        region: impl Into<String>,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        Self {
            region: region.into(),
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("region", &self.region)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .finish()
    }
}
