//! Wire-shaped domain models.
//!
//! These are the JSON shapes the HTTP API speaks: camelCase field names
//! and a combined `position: [lat, lng]` pair. The storage layer has its
//! own row structs with separate latitude/longitude columns; the API crate
//! translates between the two.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::ContentBlock;
use crate::types::{LatLng, Timestamp};

/// A geolocated content record with classification tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pin {
    pub id: Uuid,
    pub title: String,
    pub position: LatLng,
    pub main_tag: String,
    pub supporting_tags: Vec<String>,
    pub content: Vec<ContentBlock>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A classification tag: unique display name plus a display color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDefinition {
    pub id: Uuid,
    pub name: String,
    pub color: String,
}

/// The optional system-wide boundary polygon with its relevant zoom range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionBoundary {
    pub name: String,
    pub polygon: Vec<LatLng>,
    pub min_zoom: f64,
    pub max_zoom: f64,
}
