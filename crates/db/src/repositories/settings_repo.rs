//! Repository for the singleton `map_settings` table.

use sqlx::types::Json;
use sqlx::PgPool;

use pinmap_core::content::ContentBlockKind;

use crate::models::settings::SettingsRow;

/// Column list for `map_settings` queries.
const SETTINGS_COLUMNS: &str = "\
    center_lat, center_lng, default_zoom, allowed_content_kinds, \
    content_kind_order, filter_fields, sort_fields";

/// Provides access to the at-most-one map settings record.
pub struct SettingsRepo;

impl SettingsRepo {
    /// Fetch the settings row, if one has been stored.
    pub async fn get(pool: &PgPool) -> Result<Option<SettingsRow>, sqlx::Error> {
        let query = format!("SELECT {SETTINGS_COLUMNS} FROM map_settings");
        sqlx::query_as::<_, SettingsRow>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Upsert the settings row: the first write creates it, later writes
    /// update it in place.
    #[allow(clippy::too_many_arguments)]
    pub async fn upsert(
        pool: &PgPool,
        center_lat: f64,
        center_lng: f64,
        default_zoom: f64,
        allowed_content_kinds: &[ContentBlockKind],
        content_kind_order: &[ContentBlockKind],
        filter_fields: &[String],
        sort_fields: &[String],
    ) -> Result<SettingsRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO map_settings \
                (singleton, center_lat, center_lng, default_zoom, \
                 allowed_content_kinds, content_kind_order, filter_fields, sort_fields) \
             VALUES (TRUE, $1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (singleton) DO UPDATE SET \
                center_lat = EXCLUDED.center_lat, \
                center_lng = EXCLUDED.center_lng, \
                default_zoom = EXCLUDED.default_zoom, \
                allowed_content_kinds = EXCLUDED.allowed_content_kinds, \
                content_kind_order = EXCLUDED.content_kind_order, \
                filter_fields = EXCLUDED.filter_fields, \
                sort_fields = EXCLUDED.sort_fields \
             RETURNING {SETTINGS_COLUMNS}"
        );
        sqlx::query_as::<_, SettingsRow>(&query)
            .bind(center_lat)
            .bind(center_lng)
            .bind(default_zoom)
            .bind(Json(allowed_content_kinds))
            .bind(Json(content_kind_order))
            .bind(Json(filter_fields))
            .bind(Json(sort_fields))
            .fetch_one(pool)
            .await
    }
}
