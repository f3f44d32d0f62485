/// Why a backend call failed.
///
/// The dispatcher treats every variant the same way (a static error message in
/// the notification channel); the detail only reaches the logs.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

impl ApiError {
    pub fn bad_request(body: impl Into<String>) -> Self {
        ApiError::Status {
            status: 400,
            body: body.into(),
        }
    }

    pub fn unprocessable(body: impl Into<String>) -> Self {
        ApiError::Status {
            status: 422,
            body: body.into(),
        }
    }

    /// HTTP status behind the error, when there was a response at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            ApiError::NotFound(_) => Some(404),
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Unavailable(_) => None,
        }
    }
}
