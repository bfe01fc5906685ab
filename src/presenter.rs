use crate::models::{Coordinate, Entrance, ParkingQuote, ParkingView, TimeWindow};
use crate::quotes::{has_amenity, QuoteError, QuoteSource};
use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Amenity whose coverage is reported for each fetch
const REPORTED_AMENITY: &str = "Covered";

/// Map-rendering seam consumed by the presenter
pub trait MarkerSurface {
    /// Remove every marker previously placed by the presenter
    fn clear(&mut self);

    /// Place one marker at the given position
    fn place_marker(&mut self, position: Coordinate);
}

/// One rendered marker and the quote attached to it
#[derive(Debug, Clone)]
pub struct RenderedMarker {
    pub position: Coordinate,
    pub quote: ParkingQuote,
}

/// Drives the screen flow: location fix → quote fetch → markers → selection
pub struct MapPresenter<S, M> {
    source: S,
    surface: M,
    rendered: Vec<RenderedMarker>,
    selection: watch::Sender<Option<ParkingView>>,
}

impl<S: QuoteSource, M: MarkerSurface> MapPresenter<S, M> {
    pub fn new(source: S, surface: M) -> Self {
        let (selection, _) = watch::channel(None);

        Self {
            source,
            surface,
            rendered: Vec::new(),
            selection,
        }
    }

    /// Observable holding the currently selected lot. `None` until a marker
    /// is selected, and again after each new location fix.
    pub fn selection(&self) -> watch::Receiver<Option<ParkingView>> {
        self.selection.subscribe()
    }

    /// Markers currently on the map, in provider order
    pub fn rendered(&self) -> &[RenderedMarker] {
        &self.rendered
    }

    /// Entry point for a device location fix. Fetch failures are logged and
    /// dropped; the previous markers stay on the map in that case.
    pub async fn on_location_available(&mut self, coordinate: Coordinate) {
        match self.refresh(coordinate).await {
            Ok(count) => info!("Rendered {} parking markers", count),
            Err(err) => warn!(
                "Failed to load parking quotes from {}: {}",
                self.source.source_name(),
                err
            ),
        }
    }

    async fn refresh(&mut self, coordinate: Coordinate) -> Result<usize, QuoteError> {
        let window = TimeWindow::next_day(Utc::now());
        let quotes = self.source.fetch(coordinate, &window).await?;

        // The amenity match is informational only; every quote is rendered.
        let covered = quotes
            .iter()
            .filter(|quote| has_amenity(quote, REPORTED_AMENITY, true))
            .count();
        debug!(
            "{} of {} quotes offer {} parking",
            covered,
            quotes.len(),
            REPORTED_AMENITY
        );

        self.surface.clear();
        self.rendered.clear();
        self.selection.send_replace(None);

        for quote in quotes {
            let entrance = quote
                .location()
                .entrances
                .first()
                .and_then(Entrance::coordinate);

            match entrance {
                Some(position) => {
                    self.surface.place_marker(position);
                    self.rendered.push(RenderedMarker { position, quote });
                }
                None => warn!(
                    "Skipping lot without a mappable entrance: {}",
                    quote.location().name
                ),
            }
        }

        Ok(self.rendered.len())
    }

    /// Entry point for a marker tap. Publishes the lot's display view on the
    /// selection observable and returns it; an out-of-range index publishes
    /// nothing.
    pub fn on_marker_selected(&self, index: usize) -> Option<ParkingView> {
        let marker = self.rendered.get(index)?;
        let view = ParkingView::from_quote(&marker.quote);
        self.selection.send_replace(Some(view.clone()));

        Some(view)
    }
}
