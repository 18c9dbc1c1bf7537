//! Handlers for pin CRUD.
//!
//! Each handler validates its input, calls into the repository layer, and
//! translates between the wire shape (camelCase, `position` pair) and the
//! storage shape (separate latitude/longitude columns).

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

use pinmap_core::content::validate_content;
use pinmap_core::error::CoreError;
use pinmap_core::geo::validate_position;
use pinmap_core::model::Pin;
use pinmap_db::models::pin::{NewPin, PinPatch};
use pinmap_db::repositories::PinRepo;

use crate::dto::{pin_to_wire, CreatePinRequest, PinListParams, UpdatePinRequest};
use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::middleware::admin::RequireAdmin;
use crate::state::AppState;

/// GET /api/pins
///
/// List all pins, optionally restricted to those carrying `?tag=NAME` as
/// main or supporting tag.
pub async fn list_pins(
    State(state): State<AppState>,
    Query(params): Query<PinListParams>,
) -> AppResult<impl IntoResponse> {
    let rows = PinRepo::list(&state.pool, params.tag.as_deref()).await?;

    // One extra round trip for all associations instead of one per pin.
    let mut by_pin: HashMap<Uuid, Vec<String>> = HashMap::new();
    for assoc in PinRepo::all_supporting_tags(&state.pool).await? {
        by_pin.entry(assoc.pin_id).or_default().push(assoc.tag_name);
    }

    let pins: Vec<Pin> = rows
        .into_iter()
        .map(|row| {
            let tags = by_pin.remove(&row.id).unwrap_or_default();
            pin_to_wire(row, tags)
        })
        .collect();

    Ok(Json(pins))
}

/// GET /api/pins/{id}
pub async fn get_pin(
    State(state): State<AppState>,
    Path(pin_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let row = PinRepo::find_by_id(&state.pool, pin_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Pin",
            id: pin_id,
        }))?;
    let tags = PinRepo::supporting_tags(&state.pool, pin_id).await?;

    Ok(Json(pin_to_wire(row, tags)))
}

/// POST /api/pins
///
/// Create a pin. The server assigns the id and both timestamps.
pub async fn create_pin(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreatePinRequest>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(AppError::BadRequest("title must not be empty".into()));
    }
    if input.main_tag.trim().is_empty() {
        return Err(AppError::BadRequest("mainTag must not be empty".into()));
    }
    validate_position(&input.position)?;
    validate_content(&input.content)?;

    let new = NewPin {
        title: input.title,
        latitude: input.position[0],
        longitude: input.position[1],
        main_tag: input.main_tag,
        supporting_tags: input.supporting_tags,
        content: input.content,
    };
    let row = PinRepo::create(&state.pool, &new).await?;
    let tags = PinRepo::supporting_tags(&state.pool, row.id).await?;

    tracing::info!(pin_id = %row.id, "Pin created");

    Ok((StatusCode::CREATED, Json(pin_to_wire(row, tags))))
}

/// PUT /api/pins/{id}
///
/// Partial update: absent fields keep their stored value; `updatedAt` is
/// refreshed on every update.
pub async fn update_pin(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(pin_id): Path<Uuid>,
    ApiJson(input): ApiJson<UpdatePinRequest>,
) -> AppResult<impl IntoResponse> {
    if let Some(title) = &input.title {
        if title.trim().is_empty() {
            return Err(AppError::BadRequest("title must not be empty".into()));
        }
    }
    if let Some(main_tag) = &input.main_tag {
        if main_tag.trim().is_empty() {
            return Err(AppError::BadRequest("mainTag must not be empty".into()));
        }
    }
    if let Some(position) = &input.position {
        validate_position(position)?;
    }
    if let Some(content) = &input.content {
        validate_content(content)?;
    }

    let patch = PinPatch {
        title: input.title,
        latitude: input.position.map(|p| p[0]),
        longitude: input.position.map(|p| p[1]),
        main_tag: input.main_tag,
        supporting_tags: input.supporting_tags,
        content: input.content,
    };
    let row = PinRepo::update(&state.pool, pin_id, &patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Pin",
            id: pin_id,
        }))?;
    let tags = PinRepo::supporting_tags(&state.pool, pin_id).await?;

    tracing::info!(pin_id = %pin_id, "Pin updated");

    Ok(Json(pin_to_wire(row, tags)))
}

/// DELETE /api/pins/{id}
///
/// Supporting-tag associations cascade with the pin.
pub async fn delete_pin(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(pin_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let deleted = PinRepo::delete(&state.pool, pin_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Pin",
            id: pin_id,
        }));
    }

    tracing::info!(pin_id = %pin_id, "Pin deleted");

    Ok(StatusCode::NO_CONTENT)
}
