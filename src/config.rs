use std::time::Duration;

/// Default device address (Pico W soft AP gateway).
pub const DEFAULT_BASE_URL: &str = "http://192.168.4.1";
/// Default upper bound for a single HTTP request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(2);
/// Default device state polling interval.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Configuration for talking to the board
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Scheme and host of the board, e.g. `http://192.168.4.1`
    pub base_url: String,
    /// Timeout applied to every request
    pub request_timeout: Duration,
    /// Period of the state poller
    pub poll_interval: Duration,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl DeviceConfig {
    /// Config for the board at `base_url`, other settings default.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Full URL of an endpoint path such as `/matrix.cgi`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}
