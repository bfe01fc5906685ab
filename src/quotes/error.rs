use reqwest::StatusCode;

/// Failures surfaced by a quote fetch
#[derive(thiserror::Error, Debug)]
pub enum QuoteError {
    #[error("quote request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("provider returned status {0}")]
    Provider(StatusCode),
    #[error("malformed quote payload: {0}")]
    Deserialize(#[from] serde_json::Error),
}
