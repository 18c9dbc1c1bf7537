//! Wire DTOs and the row-to-wire shape translation.
//!
//! The wire format is camelCase with a combined `position: [lat, lng]`
//! pair; the storage format is snake_case with separate latitude and
//! longitude columns. Response shapes are the `pinmap_core::model` types;
//! the request payloads live here.

use serde::Deserialize;

use pinmap_core::content::ContentBlock;
use pinmap_core::model::{Pin, RegionBoundary, TagDefinition};
use pinmap_core::settings::MapSettings;
use pinmap_core::types::LatLng;
use pinmap_db::models::boundary::BoundaryRow;
use pinmap_db::models::pin::PinRow;
use pinmap_db::models::settings::SettingsRow;
use pinmap_db::models::tag::TagRow;

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// Query parameters for pin listing.
#[derive(Debug, Deserialize)]
pub struct PinListParams {
    /// Restrict to pins carrying this tag (main or supporting).
    pub tag: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePinRequest {
    pub title: String,
    pub position: LatLng,
    pub main_tag: String,
    #[serde(default)]
    pub supporting_tags: Vec<String>,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

/// Partial pin update: absent fields are left untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePinRequest {
    pub title: Option<String>,
    pub position: Option<LatLng>,
    pub main_tag: Option<String>,
    pub supporting_tags: Option<Vec<String>>,
    pub content: Option<Vec<ContentBlock>>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTagRequest {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTagRequest {
    pub name: Option<String>,
    pub color: Option<String>,
}

// ---------------------------------------------------------------------------
// Row → wire translation
// ---------------------------------------------------------------------------

pub fn pin_to_wire(row: PinRow, supporting_tags: Vec<String>) -> Pin {
    Pin {
        id: row.id,
        title: row.title,
        position: [row.latitude, row.longitude],
        main_tag: row.main_tag,
        supporting_tags,
        content: row.content.0,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

pub fn tag_to_wire(row: TagRow) -> TagDefinition {
    TagDefinition {
        id: row.id,
        name: row.name,
        color: row.color,
    }
}

pub fn boundary_to_wire(row: BoundaryRow) -> RegionBoundary {
    RegionBoundary {
        name: row.name,
        polygon: row.polygon.0,
        min_zoom: row.min_zoom,
        max_zoom: row.max_zoom,
    }
}

pub fn settings_to_wire(row: SettingsRow) -> MapSettings {
    MapSettings {
        default_center: [row.center_lat, row.center_lng],
        default_zoom: row.default_zoom,
        allowed_content_kinds: row.allowed_content_kinds.0,
        content_kind_order: row.content_kind_order.0,
        filter_fields: row.filter_fields.0,
        sort_fields: row.sort_fields.0,
    }
}
