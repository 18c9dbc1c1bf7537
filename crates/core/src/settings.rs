//! Map display settings and their hard-coded fallback defaults.

use serde::{Deserialize, Serialize};

use crate::content::ContentBlockKind;
use crate::types::LatLng;

/// Global map display configuration.
///
/// At most one settings record exists; when none has been stored yet the
/// defaults below apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSettings {
    /// Map center shown before any user interaction.
    pub default_center: LatLng,
    pub default_zoom: f64,
    /// Content-block kinds pins may carry.
    pub allowed_content_kinds: Vec<ContentBlockKind>,
    /// Display order of content kinds in the pin detail view.
    pub content_kind_order: Vec<ContentBlockKind>,
    /// Pin fields the list view can filter on.
    pub filter_fields: Vec<String>,
    /// Pin fields the list view can sort on.
    pub sort_fields: Vec<String>,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            default_center: [52.1, 19.4],
            default_zoom: 6.0,
            allowed_content_kinds: ContentBlockKind::ALL.to_vec(),
            content_kind_order: ContentBlockKind::ALL.to_vec(),
            filter_fields: vec!["mainTag".into(), "supportingTags".into()],
            sort_fields: vec!["title".into(), "createdAt".into(), "updatedAt".into()],
        }
    }
}
