//! Map settings row model.

use sqlx::types::Json;
use sqlx::FromRow;

use pinmap_core::content::ContentBlockKind;

/// The single row of the `map_settings` table, when one exists.
#[derive(Debug, Clone, FromRow)]
pub struct SettingsRow {
    pub center_lat: f64,
    pub center_lng: f64,
    pub default_zoom: f64,
    pub allowed_content_kinds: Json<Vec<ContentBlockKind>>,
    pub content_kind_order: Json<Vec<ContentBlockKind>>,
    pub filter_fields: Json<Vec<String>>,
    pub sort_fields: Json<Vec<String>>,
}
