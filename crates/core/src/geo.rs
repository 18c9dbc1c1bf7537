//! Geographic validation helpers.

use crate::error::CoreError;
use crate::types::LatLng;

/// Validate a `[latitude, longitude]` pair.
///
/// Latitude must be within [-90, 90], longitude within [-180, 180], and
/// both must be finite.
pub fn validate_position(position: &LatLng) -> Result<(), CoreError> {
    let [lat, lng] = *position;
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(CoreError::Validation(format!(
            "latitude {lat} out of range [-90, 90]"
        )));
    }
    if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
        return Err(CoreError::Validation(format!(
            "longitude {lng} out of range [-180, 180]"
        )));
    }
    Ok(())
}

/// Validate a boundary polygon: every vertex must be a valid position.
///
/// An empty polygon is accepted; "no boundary" is expressed by the absence
/// of the boundary record, not by an empty vertex list.
pub fn validate_polygon(polygon: &[LatLng]) -> Result<(), CoreError> {
    for (i, vertex) in polygon.iter().enumerate() {
        validate_position(vertex)
            .map_err(|e| CoreError::Validation(format!("polygon vertex {i}: {e}")))?;
    }
    Ok(())
}
