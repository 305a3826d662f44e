//! RuSender client configuration

use clap::Parser;

use super::DEFAULT_BASE_URL;

/// RuSender configuration
#[derive(Clone, Debug, PartialEq, Eq, Parser)]
pub struct RuSenderConfig {
    /// The API key sent in the `X-Api-Key` header
    #[clap(long, env = "RUSENDER_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// The API base URL, without the endpoint path
    #[clap(long, env = "RUSENDER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds, covering connect, send and body read
    #[clap(long, env = "RUSENDER_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}
