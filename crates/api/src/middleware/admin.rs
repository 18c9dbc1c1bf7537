//! Admin-token guard for mutation endpoints.
//!
//! Admin mode used to be a purely client-side toggle with no server-side
//! check. Here every mutation handler takes [`RequireAdmin`]: when
//! `ADMIN_TOKEN` is configured the request must carry it as a bearer token,
//! and when it is not configured the guard is a no-op so local development
//! stays frictionless. Read endpoints are always open.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use pinmap_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Extractor that rejects mutations lacking the configured admin token.
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.config.admin_token.as_deref() else {
            return Ok(Self);
        };

        let presented = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        match presented {
            Some(token) if token == expected => Ok(Self),
            _ => Err(AppError::Core(CoreError::Unauthorized(
                "admin token required for mutations".to_string(),
            ))),
        }
    }
}
