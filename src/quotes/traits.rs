use crate::models::{Coordinate, ParkingQuote, TimeWindow};
use crate::quotes::error::QuoteError;
use async_trait::async_trait;

/// Common trait for all parking-quote providers
/// This allows swapping the provider or mocking it in tests
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch quotes for lots near the coordinate within the time window,
    /// unfiltered, in provider order
    async fn fetch(
        &self,
        coordinate: Coordinate,
        window: &TimeWindow,
    ) -> Result<Vec<ParkingQuote>, QuoteError>;

    /// Get the name of the quote provider
    fn source_name(&self) -> &'static str;
}
