//! Region boundary row model.

use sqlx::types::Json;
use sqlx::FromRow;

use pinmap_core::types::LatLng;

/// The single row of the `region_boundary` table, when one exists.
#[derive(Debug, Clone, FromRow)]
pub struct BoundaryRow {
    pub name: String,
    pub polygon: Json<Vec<LatLng>>,
    pub min_zoom: f64,
    pub max_zoom: f64,
}
