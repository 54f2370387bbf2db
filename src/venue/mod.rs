mod fixed_position;
mod position_source;
mod selector;

pub use fixed_position::FixedPosition;
pub use position_source::{PositionError, PositionSource};
pub use selector::VenueSelector;
