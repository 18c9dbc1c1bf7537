pub mod boundary;
pub mod health;
pub mod pins;
pub mod settings;
pub mod tags;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /pins        pin CRUD
/// /tags        tag definition CRUD
/// /boundary    singleton region boundary
/// /settings    singleton map settings
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/pins", pins::router())
        .nest("/tags", tags::router())
        .merge(boundary::router())
        .merge(settings::router())
}
