use crate::domain::GeoPoint;
use crate::venue::{PositionError, PositionSource};
use async_trait::async_trait;

/// A position source for hosts without a positioning device, reporting a position given up front, if any.
#[derive(Clone, Debug, Default)]
pub struct FixedPosition(Option<GeoPoint>);

impl FixedPosition {
    pub fn new(position: Option<GeoPoint>) -> Self {
        FixedPosition(position)
    }
}

#[async_trait]
impl PositionSource for FixedPosition {
    async fn current_position(&self) -> Result<GeoPoint, PositionError> {
        self.0.ok_or(PositionError::Unsupported)
    }
}
