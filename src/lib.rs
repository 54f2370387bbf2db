//! Geofenced class attendance: students may only mark their attendance when their position lies within a radius
//! around the lecture venue.

pub mod app_config;
pub mod attendance;
pub mod commands;
pub mod domain;
mod extensions;
mod geo_point_deserializer;
pub mod geocoding;
pub mod geofence;
pub mod venue;
