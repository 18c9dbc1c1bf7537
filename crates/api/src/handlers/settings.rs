//! Handlers for the singleton map settings.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use pinmap_core::geo::validate_position;
use pinmap_core::settings::MapSettings;
use pinmap_db::repositories::SettingsRepo;

use crate::dto::settings_to_wire;
use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::middleware::admin::RequireAdmin;
use crate::state::AppState;

/// GET /api/settings
///
/// 404 while no settings row has been stored; clients fall back to the
/// hard-coded defaults.
pub async fn get_settings(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let row = SettingsRepo::get(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("settings".into()))?;

    Ok(Json(settings_to_wire(row)))
}

/// PUT /api/settings
///
/// Upsert: the first write creates the single row, later writes update it.
pub async fn update_settings(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<MapSettings>,
) -> AppResult<impl IntoResponse> {
    validate_position(&input.default_center)?;
    if !input.default_zoom.is_finite() || input.default_zoom < 0.0 {
        return Err(AppError::BadRequest(
            "defaultZoom must be a non-negative number".into(),
        ));
    }

    let row = SettingsRepo::upsert(
        &state.pool,
        input.default_center[0],
        input.default_center[1],
        input.default_zoom,
        &input.allowed_content_kinds,
        &input.content_kind_order,
        &input.filter_fields,
        &input.sort_fields,
    )
    .await?;

    tracing::info!("Map settings updated");

    Ok(Json(settings_to_wire(row)))
}
