use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const ENV_BASE_URL: &str = "STOREFRONT_API_URL";
const ENV_TIMEOUT_SECS: &str = "STOREFRONT_API_TIMEOUT_SECS";
const ENV_SESSION_TTL_MINS: &str = "STOREFRONT_SESSION_TTL_MINS";
const ENV_LIST_LIMIT: &str = "STOREFRONT_LIST_LIMIT";

/// Transport configuration for the remote catalog API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL, endpoints are joined onto it.
    pub base_url: String,
    /// Optional request timeout.
    pub timeout: Option<Duration>,
    /// Session lifetime requested at login (`expiresInMins`).
    pub session_ttl_mins: Option<u32>,
    /// Page size for the product list; `Some(0)` asks for everything.
    pub list_limit: Option<u32>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
            session_ttl_mins: None,
            list_limit: None,
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_session_ttl_mins(mut self, mins: u32) -> Self {
        self.session_ttl_mins = Some(mins);
        self
    }

    pub fn with_list_limit(mut self, limit: u32) -> Self {
        self.list_limit = Some(limit);
        self
    }

    /// Defaults overridden by the `STOREFRONT_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_BASE_URL).map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            config.base_url = url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(0) => config.timeout = None,
                Ok(secs) => config.timeout = Some(Duration::from_secs(secs)),
                Err(_) => tracing::warn!("Ignoring invalid {}={:?}", ENV_TIMEOUT_SECS, raw),
            }
        }
        if let Some(mins) = parse_u32(&lookup, ENV_SESSION_TTL_MINS) {
            config = config.with_session_ttl_mins(mins);
        }
        if let Some(limit) = parse_u32(&lookup, ENV_LIST_LIMIT) {
            config = config.with_list_limit(limit);
        }
        config
    }

    /// Join a path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn parse_u32(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<u32> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring invalid {}={:?}", key, raw);
            None
        }
    }
}
