pub mod client;
pub mod error;
pub mod filter;
pub mod traits;
pub mod types;

pub use client::ParkWhizClient;
pub use error::QuoteError;
pub use filter::has_amenity;
pub use traits::QuoteSource;
pub use types::ProviderConfig;
