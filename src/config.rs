use std::time::Duration;

/// Where the gateway points and how long it waits. The base URL carries no
/// trailing slash; endpoint paths start with one.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
    pub timeout: Duration,
}

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        GatewayConfig {
            base_url: trim_trailing_slash(base_url.into()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Reads `LMS_API_URL`, falling back to the default deployment.
    pub fn from_env() -> Self {
        match std::env::var("LMS_API_URL") {
            Ok(url) if !url.is_empty() => GatewayConfig::new(url),
            _ => GatewayConfig::default(),
        }
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
