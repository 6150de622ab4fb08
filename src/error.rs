use displaydoc::Display;

/// A specialized result type for the BitDogLab controller.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors produced by the controller and its device client.
#[derive(Debug, Display)]
pub enum Error {
    /// Request to `{path}` failed: {source}
    Request {
        path: &'static str,
        source: reqwest::Error,
    },
    /// Device answered `{path}` with status {status}
    Status {
        path: &'static str,
        status: reqwest::StatusCode,
    },
    /// Unable to build the HTTP client: {0}
    Client(reqwest::Error),
    /// Invalid hex color `{0}`, expected `#rrggbb`
    InvalidColor(String),
    /// Unknown effect `{0}`
    UnknownEffect(String),
    /// Unknown preset `{0}`
    UnknownPreset(String),
    /// Cell index {0} is outside of the 5x5 matrix
    CellOutOfRange(usize),
}

impl Error {
    /// Creates a new request error for the given endpoint.
    pub(crate) fn request(path: &'static str) -> impl FnOnce(reqwest::Error) -> Self {
        move |source| Self::Request { path, source }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Request { source, .. } => Some(source),
            Self::Client(source) => Some(source),
            _ => None,
        }
    }
}
