//! Route definitions for the `/contacts` resource.
//!
//! ```text
//! GET    /                        -> list (optionally filtered by ?search=)
//! POST   /                        -> create
//! GET    /upcoming_birthdays/     -> upcoming_birthdays (slash optional)
//! GET    /{id}                    -> get_by_id
//! PUT    /{id}                    -> update
//! DELETE /{id}                    -> delete
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/contacts`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(contact::list).post(contact::create))
        // Static segment registered before the `{id}` capture; both slash
        // forms are served since axum treats them as distinct paths.
        .route("/upcoming_birthdays", get(contact::upcoming_birthdays))
        .route("/upcoming_birthdays/", get(contact::upcoming_birthdays))
        .route(
            "/{id}",
            get(contact::get_by_id)
                .put(contact::update)
                .delete(contact::delete),
        )
}
