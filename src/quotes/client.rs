use crate::models::{Coordinate, ParkingQuote, TimeWindow};
use crate::quotes::error::QuoteError;
use crate::quotes::traits::QuoteSource;
use crate::quotes::types::ProviderConfig;
use async_trait::async_trait;
use chrono::SecondsFormat;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// ParkWhiz quote client
pub struct ParkWhizClient {
    client: Client,
    config: ProviderConfig,
}

impl ParkWhizClient {
    /// Create a client for the given provider config
    pub fn new(config: ProviderConfig) -> Result<Self, QuoteError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self { client, config })
    }

    /// Query string for one quote request
    fn query(&self, coordinate: &Coordinate, window: &TimeWindow) -> Vec<(&'static str, String)> {
        vec![
            (
                "q",
                format!(
                    "coordinates:{},{}",
                    coordinate.latitude, coordinate.longitude
                ),
            ),
            (
                "start_time",
                window.start.to_rfc3339_opts(SecondsFormat::Secs, true),
            ),
            (
                "end_time",
                window.end.to_rfc3339_opts(SecondsFormat::Secs, true),
            ),
            ("api_key", self.config.api_key.clone()),
        ]
    }
}

#[async_trait]
impl QuoteSource for ParkWhizClient {
    async fn fetch(
        &self,
        coordinate: Coordinate,
        window: &TimeWindow,
    ) -> Result<Vec<ParkingQuote>, QuoteError> {
        debug!(
            "Fetching quotes from {} near {},{}",
            self.config.base_url, coordinate.latitude, coordinate.longitude
        );

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&self.query(&coordinate, window))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Provider returned status: {}", status);
            return Err(QuoteError::Provider(status));
        }

        let body = response.text().await?;
        debug!("Downloaded {} bytes of quote data", body.len());

        let quotes: Vec<ParkingQuote> = serde_json::from_str(&body)?;
        info!("✅ Received {} parking quotes", quotes.len());

        Ok(quotes)
    }

    fn source_name(&self) -> &'static str {
        "ParkWhiz"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn client() -> ParkWhizClient {
        ParkWhizClient::new(ProviderConfig::new("test-key")).unwrap()
    }

    #[test]
    fn query_carries_coordinate_window_and_key() {
        let start = Utc.with_ymd_and_hms(2017, 12, 23, 12, 0, 0).unwrap();
        let window = TimeWindow::next_day(start);
        let coordinate = Coordinate::new(41.8857256, -87.636959);

        let query = client().query(&coordinate, &window);

        assert_eq!(
            query,
            vec![
                ("q", "coordinates:41.8857256,-87.636959".to_string()),
                ("start_time", "2017-12-23T12:00:00Z".to_string()),
                ("end_time", "2017-12-24T12:00:00Z".to_string()),
                ("api_key", "test-key".to_string()),
            ]
        );
    }

    #[test]
    fn window_bounds_serialize_as_iso8601() {
        let start = Utc.with_ymd_and_hms(2024, 2, 29, 23, 30, 0).unwrap();
        let window = TimeWindow::next_day(start);

        let query = client().query(&Coordinate::new(0.0, 0.0), &window);

        assert_eq!(query[1].1, "2024-02-29T23:30:00Z");
        assert_eq!(query[2].1, "2024-03-01T23:30:00Z");
    }

    #[test]
    fn source_is_named_after_the_provider() {
        assert_eq!(client().source_name(), "ParkWhiz");
    }
}
