//! Handlers for tag definition CRUD.
//!
//! Deletes are guarded: a tag whose name any pin still references, as main
//! tag or supporting tag, is refused. The storage layer cannot express this
//! declaratively because `main_tag` is a free-text column.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

use pinmap_core::error::CoreError;
use pinmap_core::model::TagDefinition;
use pinmap_db::repositories::TagRepo;

use crate::dto::{tag_to_wire, CreateTagRequest, UpdateTagRequest};
use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::middleware::admin::RequireAdmin;
use crate::state::AppState;

/// GET /api/tags
pub async fn list_tags(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = TagRepo::list_all(&state.pool).await?;
    let tags: Vec<TagDefinition> = rows.into_iter().map(tag_to_wire).collect();

    Ok(Json(tags))
}

/// GET /api/tags/{id}
pub async fn get_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let row = TagRepo::find_by_id(&state.pool, tag_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tag",
            id: tag_id,
        }))?;

    Ok(Json(tag_to_wire(row)))
}

/// POST /api/tags
///
/// A duplicate name surfaces as a unique-constraint violation, which the
/// error layer maps to 409.
pub async fn create_tag(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateTagRequest>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }
    if input.color.trim().is_empty() {
        return Err(AppError::BadRequest("color must not be empty".into()));
    }

    let row = TagRepo::create(&state.pool, &input.name, &input.color).await?;

    tracing::info!(tag_id = %row.id, name = %row.name, "Tag created");

    Ok((StatusCode::CREATED, Json(tag_to_wire(row))))
}

/// PUT /api/tags/{id}
pub async fn update_tag(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(tag_id): Path<Uuid>,
    ApiJson(input): ApiJson<UpdateTagRequest>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.name {
        if name.trim().is_empty() {
            return Err(AppError::BadRequest("name must not be empty".into()));
        }
    }

    let row = TagRepo::update(
        &state.pool,
        tag_id,
        input.name.as_deref(),
        input.color.as_deref(),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Tag",
        id: tag_id,
    }))?;

    tracing::info!(tag_id = %tag_id, "Tag updated");

    Ok(Json(tag_to_wire(row)))
}

/// DELETE /api/tags/{id}
///
/// Refused while any pin references the tag's name.
pub async fn delete_tag(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(tag_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let row = TagRepo::find_by_id(&state.pool, tag_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tag",
            id: tag_id,
        }))?;

    if TagRepo::in_use(&state.pool, &row.name).await? {
        return Err(AppError::BadRequest(format!(
            "tag '{}' is referenced by existing pins and cannot be deleted",
            row.name
        )));
    }

    TagRepo::delete(&state.pool, tag_id).await?;

    tracing::info!(tag_id = %tag_id, name = %row.name, "Tag deleted");

    Ok(StatusCode::NO_CONTENT)
}
