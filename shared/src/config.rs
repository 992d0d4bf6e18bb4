use std::time::Duration;

use tracing::warn;

/// Transport settings for the member console. Built once at startup and
/// never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub http_server: String,
    pub api_base_url: String,
    pub timeout: Duration,
}

impl Config {
    const DEFAULT_HTTP_SERVER: &'static str = "http://localhost:8080";
    const API_PATH: &'static str = "/api";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(http_server: impl Into<String>) -> Self {
        let http_server: String = http_server.into();
        let http_server = http_server.trim_end_matches('/').to_string();
        let api_base_url = format!("{}{}", http_server, Self::API_PATH);
        Self {
            http_server,
            api_base_url,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Reads `KITCHENSINK_HTTP_SERVER` at runtime, falling back to the value
    /// baked in at build time. Browser builds have no process environment,
    /// so only the build-time value reaches them.
    pub fn from_env() -> Self {
        Self::new(Self::resolve_server(
            std::env::var("KITCHENSINK_HTTP_SERVER").ok(),
            option_env!("KITCHENSINK_HTTP_SERVER"),
        ))
    }

    fn resolve_server(runtime: Option<String>, built_in: Option<&str>) -> String {
        runtime
            .filter(|s| !s.trim().is_empty())
            .or_else(|| {
                built_in
                    .filter(|s| !s.trim().is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| {
                warn!(
                    "KITCHENSINK_HTTP_SERVER not set, using {}",
                    Self::DEFAULT_HTTP_SERVER
                );
                Self::DEFAULT_HTTP_SERVER.to_string()
            })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// URL of the `members` collection.
    pub fn members_url(&self) -> String {
        format!("{}/members", self.api_base_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HTTP_SERVER)
    }
}
