//! Route definitions for the singleton region boundary.
//!
//! ```text
//! GET    /boundary  -> get_boundary
//! PUT    /boundary  -> set_boundary (replace)
//! DELETE /boundary  -> delete_boundary
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::boundary;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/boundary",
        get(boundary::get_boundary)
            .put(boundary::set_boundary)
            .delete(boundary::delete_boundary),
    )
}
