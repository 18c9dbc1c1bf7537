//! Repository for the singleton `region_boundary` table.

use sqlx::types::Json;
use sqlx::PgPool;

use pinmap_core::types::LatLng;

use crate::models::boundary::BoundaryRow;

/// Column list for `region_boundary` queries.
const BOUNDARY_COLUMNS: &str = "name, polygon, min_zoom, max_zoom";

/// Provides access to the at-most-one region boundary.
pub struct BoundaryRepo;

impl BoundaryRepo {
    /// Fetch the boundary, if one has been set.
    pub async fn get(pool: &PgPool) -> Result<Option<BoundaryRow>, sqlx::Error> {
        let query = format!("SELECT {BOUNDARY_COLUMNS} FROM region_boundary");
        sqlx::query_as::<_, BoundaryRow>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Replace the boundary: delete any existing row, then insert the new
    /// one. A fixed two-statement sequence, per the singleton invariant.
    pub async fn replace(
        pool: &PgPool,
        name: &str,
        polygon: &[LatLng],
        min_zoom: f64,
        max_zoom: f64,
    ) -> Result<BoundaryRow, sqlx::Error> {
        sqlx::query("DELETE FROM region_boundary")
            .execute(pool)
            .await?;

        let query = format!(
            "INSERT INTO region_boundary (name, polygon, min_zoom, max_zoom) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {BOUNDARY_COLUMNS}"
        );
        sqlx::query_as::<_, BoundaryRow>(&query)
            .bind(name)
            .bind(Json(polygon))
            .bind(min_zoom)
            .bind(max_zoom)
            .fetch_one(pool)
            .await
    }

    /// Remove the boundary. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM region_boundary")
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
