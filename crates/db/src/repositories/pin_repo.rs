//! Repository for the `pins` and `pin_supporting_tags` tables.
//!
//! Provides pin CRUD plus supporting-tag association management. Supporting
//! tags are deduplicated here, at the application level; the database only
//! guards against exact duplicate (pin, tag) rows.

use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::pin::{NewPin, PinPatch, PinRow, SupportingTagRow};

/// Column list for `pins` queries.
const PIN_COLUMNS: &str = "\
    id, title, latitude, longitude, main_tag, content, created_at, updated_at";

/// Provides CRUD operations for pins and their supporting-tag associations.
pub struct PinRepo;

impl PinRepo {
    /// List all pins, oldest first. With `tag`, only pins whose main tag is
    /// `tag` or whose supporting tags contain it.
    pub async fn list(pool: &PgPool, tag: Option<&str>) -> Result<Vec<PinRow>, sqlx::Error> {
        match tag {
            Some(tag) => {
                let query = format!(
                    "SELECT {PIN_COLUMNS} FROM pins \
                     WHERE main_tag = $1 \
                        OR id IN (SELECT pin_id FROM pin_supporting_tags WHERE tag_name = $1) \
                     ORDER BY created_at"
                );
                sqlx::query_as::<_, PinRow>(&query)
                    .bind(tag)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {PIN_COLUMNS} FROM pins ORDER BY created_at");
                sqlx::query_as::<_, PinRow>(&query).fetch_all(pool).await
            }
        }
    }

    /// Find a pin by its ID.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<PinRow>, sqlx::Error> {
        let query = format!("SELECT {PIN_COLUMNS} FROM pins WHERE id = $1");
        sqlx::query_as::<_, PinRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a pin and its supporting-tag rows. The database assigns the id
    /// and sets both timestamps to the same instant.
    pub async fn create(pool: &PgPool, new: &NewPin) -> Result<PinRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO pins (title, latitude, longitude, main_tag, content) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {PIN_COLUMNS}"
        );
        let row = sqlx::query_as::<_, PinRow>(&query)
            .bind(&new.title)
            .bind(new.latitude)
            .bind(new.longitude)
            .bind(&new.main_tag)
            .bind(Json(&new.content))
            .fetch_one(pool)
            .await?;

        Self::insert_supporting_tags(pool, row.id, &new.supporting_tags).await?;

        Ok(row)
    }

    /// Partially update a pin. `None` fields keep their stored value;
    /// `supporting_tags: Some(_)` replaces the association set. Refreshes
    /// `updated_at`. Returns `None` when the pin does not exist.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        patch: &PinPatch,
    ) -> Result<Option<PinRow>, sqlx::Error> {
        let query = format!(
            "UPDATE pins SET \
                title = COALESCE($2, title), \
                latitude = COALESCE($3, latitude), \
                longitude = COALESCE($4, longitude), \
                main_tag = COALESCE($5, main_tag), \
                content = COALESCE($6, content), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {PIN_COLUMNS}"
        );
        let row = sqlx::query_as::<_, PinRow>(&query)
            .bind(id)
            .bind(patch.title.as_deref())
            .bind(patch.latitude)
            .bind(patch.longitude)
            .bind(patch.main_tag.as_deref())
            .bind(patch.content.as_ref().map(Json))
            .fetch_optional(pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        if let Some(tags) = &patch.supporting_tags {
            sqlx::query("DELETE FROM pin_supporting_tags WHERE pin_id = $1")
                .bind(id)
                .execute(pool)
                .await?;
            Self::insert_supporting_tags(pool, id, tags).await?;
        }

        Ok(Some(row))
    }

    /// Delete a pin. Supporting-tag rows go with it via `ON DELETE CASCADE`.
    /// Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pins WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Supporting tags for one pin, in name order.
    pub async fn supporting_tags(pool: &PgPool, pin_id: Uuid) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT tag_name FROM pin_supporting_tags WHERE pin_id = $1 ORDER BY tag_name",
        )
        .bind(pin_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }

    /// All supporting-tag associations, for assembling a pin listing in one
    /// extra round trip instead of one per pin.
    pub async fn all_supporting_tags(pool: &PgPool) -> Result<Vec<SupportingTagRow>, sqlx::Error> {
        sqlx::query_as::<_, SupportingTagRow>(
            "SELECT pin_id, tag_name FROM pin_supporting_tags ORDER BY tag_name",
        )
        .fetch_all(pool)
        .await
    }

    async fn insert_supporting_tags(
        pool: &PgPool,
        pin_id: Uuid,
        tags: &[String],
    ) -> Result<(), sqlx::Error> {
        let deduped = dedup_preserving_order(tags);
        if deduped.is_empty() {
            return Ok(());
        }
        sqlx::query(
            "INSERT INTO pin_supporting_tags (pin_id, tag_name) \
             SELECT $1, unnest($2::text[])",
        )
        .bind(pin_id)
        .bind(&deduped)
        .execute(pool)
        .await?;
        Ok(())
    }
}

/// Drop duplicate tag names, keeping the first occurrence.
fn dedup_preserving_order(tags: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tags.iter()
        .filter(|tag| seen.insert(tag.as_str()))
        .cloned()
        .collect()
}
