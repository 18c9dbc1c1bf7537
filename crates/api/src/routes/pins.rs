//! Route definitions for pin CRUD, mounted at `/pins`.
//!
//! ```text
//! GET    /          -> list_pins (?tag=NAME filter)
//! POST   /          -> create_pin
//! GET    /{id}      -> get_pin
//! PUT    /{id}      -> update_pin
//! DELETE /{id}      -> delete_pin
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::pins;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pins::list_pins).post(pins::create_pin))
        .route(
            "/{id}",
            get(pins::get_pin)
                .put(pins::update_pin)
                .delete(pins::delete_pin),
        )
}
