pub mod contacts;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /contacts                        list (with ?search=&skip=&limit=), create
/// /contacts/{id}                   get, update, delete
/// /contacts/upcoming_birthdays/    contacts with a birthday in the next 8 days
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/contacts", contacts::router())
}
