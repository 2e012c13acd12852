use thiserror::Error;

/// Errors that can occur when building episode view-models
#[derive(Error, Debug)]
pub enum EpisodeError {
    #[error("Duration must not be negative, got {seconds}")]
    NegativeDuration { seconds: i64 },

    #[error("Episode '{id}' has a non-numeric duration '{value}'")]
    MalformedDuration { id: String, value: String },

    #[error("Failed to parse publish date '{date_str}': {source}")]
    MalformedDate {
        date_str: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Errors that can occur when talking to the episodes API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request to {url} failed: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to parse API response from {url}: {source}")]
    JsonFailed {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Top-level errors for page data loading
#[derive(Error, Debug)]
pub enum PageError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Episode error: {0}")]
    Episode(#[from] EpisodeError),
}
