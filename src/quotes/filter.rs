use crate::models::ParkingQuote;

/// True if any purchase option on the quote carries an amenity exactly
/// matching `(name, enabled)`. A quote with no purchase options never
/// matches.
pub fn has_amenity(quote: &ParkingQuote, name: &str, enabled: bool) -> bool {
    quote.purchase_options.iter().any(|option| {
        option
            .amenities
            .iter()
            .any(|amenity| amenity.name == name && amenity.enabled == enabled)
    })
}
