use crate::domain::{GeoPoint, Venue};
use crate::geocoding::ReverseGeocoder;
use crate::venue::PositionSource;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Picks the venue of a class, either from the lecturer's current position or from a point picked on a map.
#[derive(Debug)]
pub struct VenueSelector {
    geocoder: Arc<dyn ReverseGeocoder>,
    position_source: Arc<dyn PositionSource>,
    default_venue: Venue,
}

impl VenueSelector {
    pub fn new(geocoder: Arc<dyn ReverseGeocoder>, position_source: Arc<dyn PositionSource>, default_venue: Venue) -> Self {
        VenueSelector {
            geocoder,
            position_source,
            default_venue,
        }
    }

    /// Returns the venue at the current position, or the default venue when no position is available.
    #[instrument(skip(self))]
    pub async fn detect(&self) -> Venue {
        let position = self.position_source.current_position().await.and_then(|point| {
            point.validate()?;
            Ok(point)
        });

        match position {
            Ok(point) => self.select(point).await,
            Err(e) => {
                warn!("⚠️ {}, falling back to '{}'", e, self.default_venue.name);
                self.default_venue.clone()
            }
        }
    }

    /// Returns the venue at a point picked by the user.
    #[instrument(skip(self))]
    pub async fn select(&self, point: GeoPoint) -> Venue {
        let name = self.geocoder.name_of(&point).await;
        info!("📍 Selected venue '{}' at {}", name, point);
        Venue::new(name, point)
    }
}
