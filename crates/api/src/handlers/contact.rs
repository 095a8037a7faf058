//! Handlers for the `/contacts` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use rolodex_core::birthday::BirthdayWindow;
use rolodex_core::error::CoreError;
use rolodex_core::search::{clamp_limit, clamp_skip, split_terms, DEFAULT_LIST_LIMIT};
use rolodex_core::types::DbId;
use rolodex_db::models::contact::{Contact, CreateContact, UpdateContact};
use rolodex_db::repositories::ContactRepo;

use crate::error::{AppError, AppResult};
use crate::query::ContactListParams;
use crate::state::AppState;

/// GET /api/contacts/
///
/// List contacts, optionally filtered by a whitespace-separated search
/// string. Every term must be a case-insensitive substring of first name,
/// last name, or email.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ContactListParams>,
) -> AppResult<Json<Vec<Contact>>> {
    let skip = clamp_skip(params.skip);
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT);

    let contacts = match params.search.as_deref().and_then(split_terms) {
        Some(terms) => ContactRepo::search(&state.pool, &terms, skip, limit).await?,
        None => ContactRepo::list(&state.pool, skip, limit).await?,
    };

    Ok(Json(contacts))
}

/// GET /api/contacts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Contact>> {
    let contact = ContactRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }))?;
    Ok(Json(contact))
}

/// POST /api/contacts/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateContact>,
) -> AppResult<(StatusCode, Json<Contact>)> {
    input.validate()?;

    // First-class duplicate check; the unique constraint remains the
    // backstop for the insert race.
    if let Some(email) = &input.email {
        if ContactRepo::find_by_email(&state.pool, email).await?.is_some() {
            return Err(AppError::Core(CoreError::Conflict(format!(
                "A contact with email {email} already exists"
            ))));
        }
    }

    let contact = ContactRepo::create(&state.pool, &input).await?;
    tracing::info!(contact_id = contact.id, "Contact created");

    Ok((StatusCode::CREATED, Json(contact)))
}

/// PUT /api/contacts/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateContact>,
) -> AppResult<Json<Contact>> {
    input.validate()?;

    if let Some(email) = input.email.value() {
        if let Some(existing) = ContactRepo::find_by_email(&state.pool, email).await? {
            if existing.id != id {
                return Err(AppError::Core(CoreError::Conflict(format!(
                    "A contact with email {email} already exists"
                ))));
            }
        }
    }

    let contact = ContactRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }))?;
    tracing::info!(contact_id = id, "Contact updated");

    Ok(Json(contact))
}

/// DELETE /api/contacts/{id}
///
/// Returns the removed contact so callers can confirm what was deleted.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Contact>> {
    let contact = ContactRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }))?;
    tracing::info!(contact_id = id, "Contact deleted");

    Ok(Json(contact))
}

/// GET /api/contacts/upcoming_birthdays/
///
/// Contacts whose birthday falls within the next 8 days (today inclusive),
/// comparing month and day only.
pub async fn upcoming_birthdays(State(state): State<AppState>) -> AppResult<Json<Vec<Contact>>> {
    let window = BirthdayWindow::starting(Utc::now().date_naive());
    let contacts = ContactRepo::upcoming_birthdays(&state.pool, &window).await?;
    Ok(Json(contacts))
}
