//! Where to ask for weather.
//!
//! There is no system geolocation here: coordinates come from the config
//! file or the command line. Having none is the normal "no permission"
//! state, and weather is then simply left out.

use crate::types::{Location, LocationError};

/// Build a [`Location`] from optional coordinates.
pub fn resolve(
    latitude: Option<f64>,
    longitude: Option<f64>,
    label: Option<String>,
) -> Result<Location, LocationError> {
    let (latitude, longitude) = match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => (latitude, longitude),
        (None, None) => return Err(LocationError::NotConfigured),
        _ => return Err(LocationError::Incomplete),
    };

    if !is_valid(latitude, longitude) {
        return Err(LocationError::InvalidCoordinates {
            latitude,
            longitude,
        });
    }

    Ok(Location {
        latitude,
        longitude,
        label,
    })
}

pub fn is_valid(latitude: f64, longitude: f64) -> bool {
    (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude)
}
