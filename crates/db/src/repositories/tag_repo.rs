//! Repository for the `tags` table.
//!
//! Name uniqueness is enforced by the `uq_tags_name` constraint; a
//! duplicate insert surfaces as a database error for the caller to
//! classify. The in-use check backs the route-level delete guard, since
//! `main_tag` is a free-text column rather than a foreign key.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::tag::TagRow;

/// Column list for `tags` queries.
const TAG_COLUMNS: &str = "id, name, color";

/// Provides CRUD operations for tag definitions.
pub struct TagRepo;

impl TagRepo {
    /// List all tags in name order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<TagRow>, sqlx::Error> {
        let query = format!("SELECT {TAG_COLUMNS} FROM tags ORDER BY name");
        sqlx::query_as::<_, TagRow>(&query).fetch_all(pool).await
    }

    /// Find a tag by its ID.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<TagRow>, sqlx::Error> {
        let query = format!("SELECT {TAG_COLUMNS} FROM tags WHERE id = $1");
        sqlx::query_as::<_, TagRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a tag. A duplicate name violates `uq_tags_name` and the error
    /// propagates unmodified.
    pub async fn create(pool: &PgPool, name: &str, color: &str) -> Result<TagRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO tags (name, color) VALUES ($1, $2) RETURNING {TAG_COLUMNS}"
        );
        sqlx::query_as::<_, TagRow>(&query)
            .bind(name)
            .bind(color)
            .fetch_one(pool)
            .await
    }

    /// Update a tag's name and/or color. Returns `None` when the tag does
    /// not exist.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        name: Option<&str>,
        color: Option<&str>,
    ) -> Result<Option<TagRow>, sqlx::Error> {
        let query = format!(
            "UPDATE tags SET \
                name = COALESCE($2, name), \
                color = COALESCE($3, color) \
             WHERE id = $1 \
             RETURNING {TAG_COLUMNS}"
        );
        sqlx::query_as::<_, TagRow>(&query)
            .bind(id)
            .bind(name)
            .bind(color)
            .fetch_optional(pool)
            .await
    }

    /// Delete a tag. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether any pin references `name` as its main tag or among its
    /// supporting tags.
    pub async fn in_use(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        let (in_use,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM pins WHERE main_tag = $1) \
                 OR EXISTS (SELECT 1 FROM pin_supporting_tags WHERE tag_name = $1)",
        )
        .bind(name)
        .fetch_one(pool)
        .await?;
        Ok(in_use)
    }
}
