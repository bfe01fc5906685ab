use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Size-variant key used when projecting photos for display
pub const ORIGINAL_PHOTO_SIZE: &str = "original";

/// A latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Start/end timestamps for a quote query
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Window covering the 24 hours from `start`
    pub fn next_day(start: DateTime<Utc>) -> Self {
        Self {
            start,
            end: start + Duration::days(1),
        }
    }
}

/// One parking facility offer, deserialized from one element of the
/// provider's JSON array
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkingQuote {
    #[serde(rename = "_embedded")]
    pub embedded: EmbeddedLocation,
    #[serde(default)]
    pub purchase_options: Vec<PurchaseOption>,
}

impl ParkingQuote {
    pub fn location(&self) -> &ParkingLocation {
        &self.embedded.location
    }
}

/// Wrapper matching the provider's `_embedded` envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddedLocation {
    #[serde(rename = "pw:location")]
    pub location: ParkingLocation,
}

/// One purchase tier for a quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOption {
    #[serde(default)]
    pub amenities: Vec<Amenity>,
}

/// A named facility feature with an enabled flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenity {
    pub name: String,
    pub enabled: bool,
}

/// Physical lot metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkingLocation {
    pub name: String,
    #[serde(default)]
    pub entrances: Vec<Entrance>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

/// A lot entry point
///
/// Coordinates arrive as `[lat, lng]` on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entrance {
    pub coordinates: Vec<f64>,
}

impl Entrance {
    /// Coordinate of this entrance, or `None` when the provider sent fewer
    /// than two elements
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self.coordinates.as_slice() {
            [latitude, longitude, ..] => Some(Coordinate::new(*latitude, *longitude)),
            _ => None,
        }
    }
}

/// One image asset with its size variants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    #[serde(default)]
    pub sizes: HashMap<String, PhotoDetail>,
}

/// One rendition of a photo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoDetail {
    #[serde(rename = "URL")]
    pub url: String,
    pub width: String,
    pub height: String,
}

/// Display-ready projection of a selected quote
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingView {
    pub name: String,
    pub photo_urls: Vec<String>,
}

impl ParkingView {
    /// Project a quote for display: the lot name plus the "original" URL of
    /// each photo, in photo order. Photos without an "original" rendition
    /// are dropped.
    pub fn from_quote(quote: &ParkingQuote) -> Self {
        let location = quote.location();
        let photo_urls = location
            .photos
            .iter()
            .filter_map(|photo| photo.sizes.get(ORIGINAL_PHOTO_SIZE))
            .map(|detail| detail.url.clone())
            .collect();

        Self {
            name: location.name.clone(),
            photo_urls,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn photo(entries: &[(&str, &str)]) -> Photo {
        Photo {
            sizes: entries
                .iter()
                .map(|(size, url)| {
                    (
                        size.to_string(),
                        PhotoDetail {
                            url: url.to_string(),
                            width: "640".to_string(),
                            height: "480".to_string(),
                        },
                    )
                })
                .collect(),
        }
    }

    fn quote_with(location: ParkingLocation) -> ParkingQuote {
        ParkingQuote {
            embedded: EmbeddedLocation { location },
            purchase_options: vec![],
        }
    }

    #[test]
    fn next_day_window_spans_24_hours() {
        let start = Utc.with_ymd_and_hms(2017, 12, 23, 12, 0, 0).unwrap();
        let window = TimeWindow::next_day(start);

        assert_eq!(window.start, start);
        assert_eq!(window.end - window.start, Duration::hours(24));
    }

    #[test]
    fn entrance_coordinate_is_lat_then_lng() {
        let entrance = Entrance {
            coordinates: vec![41.88, -87.63],
        };

        let coordinate = entrance.coordinate().unwrap();
        assert_eq!(coordinate.latitude, 41.88);
        assert_eq!(coordinate.longitude, -87.63);
    }

    #[test]
    fn entrance_without_two_coordinates_yields_none() {
        let empty = Entrance {
            coordinates: vec![],
        };
        let short = Entrance {
            coordinates: vec![41.88],
        };

        assert!(empty.coordinate().is_none());
        assert!(short.coordinate().is_none());
    }

    #[test]
    fn view_keeps_only_original_photo_renditions_in_order() {
        let quote = quote_with(ParkingLocation {
            name: "Grant Park Garage".to_string(),
            entrances: vec![],
            photos: vec![
                photo(&[("original", "a")]),
                photo(&[("thumb", "b")]),
                photo(&[("thumb", "c"), ("original", "d")]),
            ],
        });

        let view = ParkingView::from_quote(&quote);
        assert_eq!(view.name, "Grant Park Garage");
        assert_eq!(view.photo_urls, vec!["a", "d"]);
    }

    #[test]
    fn view_of_photoless_lot_has_no_urls() {
        let quote = quote_with(ParkingLocation {
            name: "Surface Lot 9".to_string(),
            entrances: vec![],
            photos: vec![],
        });

        assert!(ParkingView::from_quote(&quote).photo_urls.is_empty());
    }

    #[test]
    fn quote_decodes_from_provider_payload() {
        let payload = r#"
        [
            {
                "_embedded": {
                    "pw:location": {
                        "name": "Millennium Lakeside Garage",
                        "entrances": [{"coordinates": [41.8857256, -87.6369590]}],
                        "photos": [
                            {
                                "sizes": {
                                    "original": {"URL": "https://img.example/1.jpg", "width": "1024", "height": "768"}
                                }
                            }
                        ]
                    }
                },
                "purchase_options": [
                    {"amenities": [{"name": "Covered", "enabled": true}]}
                ]
            }
        ]
        "#;

        let quotes: Vec<ParkingQuote> = serde_json::from_str(payload).unwrap();
        assert_eq!(quotes.len(), 1);

        let quote = &quotes[0];
        assert_eq!(quote.location().name, "Millennium Lakeside Garage");
        assert_eq!(
            quote.location().entrances[0].coordinate(),
            Some(Coordinate::new(41.8857256, -87.6369590))
        );
        assert_eq!(
            quote.purchase_options[0].amenities[0],
            Amenity {
                name: "Covered".to_string(),
                enabled: true
            }
        );
        assert_eq!(
            quote.location().photos[0].sizes["original"].url,
            "https://img.example/1.jpg"
        );
    }

    #[test]
    fn quote_decodes_when_optional_arrays_are_missing() {
        let payload = r#"
        {
            "_embedded": {
                "pw:location": {"name": "Bare Lot"}
            }
        }
        "#;

        let quote: ParkingQuote = serde_json::from_str(payload).unwrap();
        assert!(quote.location().entrances.is_empty());
        assert!(quote.location().photos.is_empty());
        assert!(quote.purchase_options.is_empty());
    }
}
