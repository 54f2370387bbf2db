mod nominatim;
mod reverse_geocoder;

pub use nominatim::{Config, GeocodeError, NominatimGeocoder};
pub use reverse_geocoder::{ReverseGeocoder, UNKNOWN_LOCATION};
