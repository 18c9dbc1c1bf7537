//! Tag definition row model.

use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `tags` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TagRow {
    pub id: Uuid,
    pub name: String,
    pub color: String,
}
