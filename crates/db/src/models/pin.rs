//! Pin row model and storage-shaped write payloads.

use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use pinmap_core::content::ContentBlock;
use pinmap_core::types::Timestamp;

/// A row from the `pins` table. Supporting tags live in a junction table
/// and are fetched separately.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PinRow {
    pub id: Uuid,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    pub main_tag: String,
    pub content: Json<Vec<ContentBlock>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `pin_supporting_tags` junction table.
#[derive(Debug, Clone, FromRow)]
pub struct SupportingTagRow {
    pub pin_id: Uuid,
    pub tag_name: String,
}

/// Storage-shaped payload for creating a pin. The server assigns id and
/// both timestamps.
#[derive(Debug, Clone)]
pub struct NewPin {
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    pub main_tag: String,
    pub supporting_tags: Vec<String>,
    pub content: Vec<ContentBlock>,
}

/// Storage-shaped partial update. `None` fields are left untouched;
/// `supporting_tags: Some(_)` replaces the whole association set.
#[derive(Debug, Clone, Default)]
pub struct PinPatch {
    pub title: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub main_tag: Option<String>,
    pub supporting_tags: Option<Vec<String>>,
    pub content: Option<Vec<ContentBlock>>,
}
