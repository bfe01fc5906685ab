mod location;
mod models;
mod presenter;
mod quotes;

use anyhow::{Context, Result};
use location::{DeniedLocationSource, FixedLocationSource, LocationSource};
use models::Coordinate;
use presenter::{MapPresenter, MarkerSurface};
use quotes::{ParkWhizClient, ProviderConfig};
use tracing::{info, warn, Level};
use tracing_subscriber;

/// Default search point: the Chicago Loop
const DEFAULT_COORDINATE: Coordinate = Coordinate {
    latitude: 41.8857256,
    longitude: -87.636959,
};

/// Marker surface that renders to the terminal log
struct ConsoleSurface;

impl MarkerSurface for ConsoleSurface {
    fn clear(&mut self) {}

    fn place_marker(&mut self, position: Coordinate) {
        info!(
            "📍 Marker at {:.5},{:.5}",
            position.latitude, position.longitude
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🅿️  Parking Scout - ParkWhiz Quote Viewer");
    info!("==========================================");
    info!("");

    let api_key = std::env::var("PARKWHIZ_API_KEY").context("PARKWHIZ_API_KEY is not set")?;
    let mut config = ProviderConfig::new(api_key);
    if let Ok(base_url) = std::env::var("PARKWHIZ_BASE_URL") {
        config = config.with_base_url(base_url);
    }

    let coordinate = match std::env::var("PARKING_COORDINATE") {
        Ok(raw) => parse_coordinate(&raw)
            .context("Invalid PARKING_COORDINATE, expected \"lat,lng\"")?,
        Err(_) => DEFAULT_COORDINATE,
    };

    // PARKING_PERMISSION=denied simulates a declined runtime permission
    let device: Box<dyn LocationSource> = match std::env::var("PARKING_PERMISSION").as_deref() {
        Ok("denied") => Box::new(DeniedLocationSource),
        _ => Box::new(FixedLocationSource::new(coordinate)),
    };

    let client = ParkWhizClient::new(config)?;
    let mut presenter = MapPresenter::new(client, ConsoleSurface);
    let selection = presenter.selection();

    let here = match device.current_location().await {
        Ok(fix) => fix,
        Err(err) => {
            // No fallback UI; the flow does not start without a fix
            warn!("Error getting a location fix: {}", err);
            return Ok(());
        }
    };

    info!(
        "Searching for parking near {:.5},{:.5} for the next 24 hours...",
        here.latitude, here.longitude
    );
    info!("");

    presenter.on_location_available(here).await;

    println!();
    for (i, marker) in presenter.rendered().iter().enumerate() {
        println!(
            "{}. {} ({:.5}, {:.5})",
            i + 1,
            marker.quote.location().name,
            marker.position.latitude,
            marker.position.longitude
        );
    }
    println!();

    match presenter.on_marker_selected(0) {
        Some(view) => {
            println!("Selected: {}", view.name);
            for url in &view.photo_urls {
                println!("   📷 {}", url);
            }
        }
        None => warn!("No parking lots to select"),
    }

    if selection.borrow().is_some() {
        info!("✅ Selection published to the presentation observable");
    }

    Ok(())
}

/// Parse a "lat,lng" pair
fn parse_coordinate(raw: &str) -> Result<Coordinate> {
    let (latitude, longitude) = raw.split_once(',').context("missing ',' separator")?;

    Ok(Coordinate::new(
        latitude.trim().parse()?,
        longitude.trim().parse()?,
    ))
}
