//! Error types for the widget.
//!
//! Provider failures keep their cause for logging. The user only ever sees
//! one of two fixed messages, via [`SearchError::user_message`].

use thiserror::Error;

pub const VALIDATION_MESSAGE: &str = "Please enter a valid location.";
pub const NOT_FOUND_MESSAGE: &str = "City not found. Please try again.";

/// Anything that went wrong between sending the request and holding a `WeatherRecord`.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to weather provider failed: {0}")]
    Transport(reqwest::Error),

    #[error("weather provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse weather provider response: {0}")]
    Parse(#[from] serde_json::Error),
}

// The request URL carries the API key in its query string.
impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Transport(err.without_url())
    }
}

/// Outcome of a failed search.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("location is empty")]
    Validation,

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl SearchError {
    /// The message shown in the widget's error line.
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::Validation => VALIDATION_MESSAGE,
            SearchError::Provider(_) => NOT_FOUND_MESSAGE,
        }
    }
}
