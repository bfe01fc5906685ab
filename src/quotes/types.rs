/// ParkWhiz v4 quotes endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.parkwhiz.com/v4/quotes/";

/// Connection settings for the quote provider
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Endpoint the quote request is sent to
    pub base_url: String,
    /// Caller-supplied provider API key
    pub api_key: String,
}

impl ProviderConfig {
    /// Config pointing at the default ParkWhiz endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Override the endpoint, e.g. for a staging provider
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
