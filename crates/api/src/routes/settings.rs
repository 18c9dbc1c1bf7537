//! Route definitions for the singleton map settings.
//!
//! ```text
//! GET /settings  -> get_settings
//! PUT /settings  -> update_settings (upsert)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/settings",
        get(settings::get_settings).put(settings::update_settings),
    )
}
