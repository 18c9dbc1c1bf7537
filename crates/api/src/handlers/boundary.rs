//! Handlers for the singleton region boundary.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use pinmap_core::geo::validate_polygon;
use pinmap_core::model::RegionBoundary;
use pinmap_db::repositories::BoundaryRepo;

use crate::dto::boundary_to_wire;
use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::middleware::admin::RequireAdmin;
use crate::state::AppState;

/// GET /api/boundary
///
/// 404 while no boundary has been set; absence is a valid state.
pub async fn get_boundary(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let row = BoundaryRepo::get(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("boundary".into()))?;

    Ok(Json(boundary_to_wire(row)))
}

/// PUT /api/boundary
///
/// Replaces any prior boundary; at most one exists system-wide.
pub async fn set_boundary(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<RegionBoundary>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }
    validate_polygon(&input.polygon)?;
    if input.min_zoom > input.max_zoom {
        return Err(AppError::BadRequest(
            "minZoom must not exceed maxZoom".into(),
        ));
    }

    let row = BoundaryRepo::replace(
        &state.pool,
        &input.name,
        &input.polygon,
        input.min_zoom,
        input.max_zoom,
    )
    .await?;

    tracing::info!(name = %row.name, vertices = row.polygon.0.len(), "Boundary replaced");

    Ok(Json(boundary_to_wire(row)))
}

/// DELETE /api/boundary
pub async fn delete_boundary(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let deleted = BoundaryRepo::delete(&state.pool).await?;

    if !deleted {
        return Err(AppError::NotFound("boundary".into()));
    }

    tracing::info!("Boundary deleted");

    Ok(StatusCode::NO_CONTENT)
}
