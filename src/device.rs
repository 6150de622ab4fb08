//! HTTP client for the board's CGI endpoints.

use reqwest::header::CONTENT_TYPE;

use crate::{Error, Result, color::Rgb, config::DeviceConfig, poller::StateSource};

pub const MATRIX_PATH: &str = "/matrix.cgi";
pub const OLED_PATH: &str = "/oled.cgi";
pub const BUZZER_PATH: &str = "/buzzer.cgi";
pub const RGB_PATH: &str = "/rgb.cgi";
pub const STATE_PATH: &str = "/state.shtml";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A single buzzer beep
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuzzerTone {
    /// Frequency in Hz
    pub frequency: u32,
    /// Duration in milliseconds
    pub duration_ms: u32,
    /// Buzzer channel id as the board names it
    pub channel: String,
}

impl BuzzerTone {
    /// Form body for `/buzzer.cgi`.
    pub fn to_form(&self) -> [(&'static str, String); 3] {
        [
            ("freq", self.frequency.to_string()),
            ("dur", self.duration_ms.to_string()),
            ("ch", self.channel.clone()),
        ]
    }
}

/// Form body for `/rgb.cgi`.
pub fn rgb_form(color: Rgb) -> [(&'static str, u8); 3] {
    [("r", color.r), ("g", color.g), ("b", color.b)]
}

/// Typed access to the board endpoints.
///
/// Cheap to clone, clones share one connection pool.
#[derive(Debug, Clone)]
pub struct DeviceClient {
    http: reqwest::Client,
    config: DeviceConfig,
}

impl DeviceClient {
    pub fn new(config: DeviceConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(Error::Client)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Post an already serialized matrix payload (see
    /// [`encode_frame`](crate::transmitter::encode_frame)).
    ///
    /// The firmware splits the raw value on `,` without decoding it, so the
    /// payload is sent unescaped.
    pub async fn post_matrix(&self, payload: &str) -> Result<()> {
        let request = self
            .http
            .post(self.config.endpoint(MATRIX_PATH))
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(format!("data={payload}"));
        Self::expect_success(MATRIX_PATH, request).await
    }

    pub async fn post_oled(&self, text: &str) -> Result<()> {
        let request = self
            .http
            .post(self.config.endpoint(OLED_PATH))
            .form(&[("text", text)]);
        Self::expect_success(OLED_PATH, request).await
    }

    pub async fn post_buzzer(&self, tone: &BuzzerTone) -> Result<()> {
        let request = self
            .http
            .post(self.config.endpoint(BUZZER_PATH))
            .form(&tone.to_form());
        Self::expect_success(BUZZER_PATH, request).await
    }

    pub async fn post_rgb(&self, color: Rgb) -> Result<()> {
        let request = self
            .http
            .post(self.config.endpoint(RGB_PATH))
            .form(&rgb_form(color));
        Self::expect_success(RGB_PATH, request).await
    }

    /// Fetch the raw state document.
    pub async fn fetch_state(&self) -> Result<String> {
        let response = self
            .http
            .get(self.config.endpoint(STATE_PATH))
            .send()
            .await
            .map_err(Error::request(STATE_PATH))?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                path: STATE_PATH,
                status,
            });
        }
        response.text().await.map_err(Error::request(STATE_PATH))
    }

    async fn expect_success(path: &'static str, request: reqwest::RequestBuilder) -> Result<()> {
        let response = request.send().await.map_err(Error::request(path))?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Status { path, status })
        }
    }
}

impl StateSource for DeviceClient {
    async fn fetch_state(&self) -> Result<String> {
        DeviceClient::fetch_state(self).await
    }
}
