//! Contact entity model and DTOs.

use chrono::NaiveDate;
use rolodex_core::contact::{validate_email, validate_required, MAX_NAME_LEN, MAX_PHONE_LEN};
use rolodex_core::error::CoreError;
use rolodex_core::types::DbId;
use rolodex_core::update::FieldUpdate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A contact row from the `contacts` table.
///
/// `created_at`/`updated_at` exist on the table but are not part of the
/// wire schema, so they are not selected here.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Contact {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone_number: String,
    pub date_of_birth: Option<NaiveDate>,
    pub nick: Option<String>,
}

/// DTO for creating a new contact.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContact {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub phone_number: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub nick: Option<String>,
}

impl CreateContact {
    /// Check field constraints before the row reaches the database.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_required("first_name", &self.first_name, MAX_NAME_LEN)?;
        validate_required("last_name", &self.last_name, MAX_NAME_LEN)?;
        validate_required("phone_number", &self.phone_number, MAX_PHONE_LEN)?;
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        Ok(())
    }
}

/// DTO for partially updating a contact.
///
/// Every field is a tagged [`FieldUpdate`]: absent fields stay untouched,
/// `null` clears, a value overwrites. Only `email` and `nick` may clear;
/// [`UpdateContact::validate`] rejects clearing anything else.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateContact {
    #[serde(default)]
    pub first_name: FieldUpdate<String>,
    #[serde(default)]
    pub last_name: FieldUpdate<String>,
    #[serde(default)]
    pub email: FieldUpdate<String>,
    #[serde(default)]
    pub phone_number: FieldUpdate<String>,
    #[serde(default)]
    pub date_of_birth: FieldUpdate<NaiveDate>,
    #[serde(default)]
    pub nick: FieldUpdate<String>,
}

impl UpdateContact {
    /// Check field constraints and clear rules.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (field, update, max_len) in [
            ("first_name", &self.first_name, MAX_NAME_LEN),
            ("last_name", &self.last_name, MAX_NAME_LEN),
            ("phone_number", &self.phone_number, MAX_PHONE_LEN),
        ] {
            if update.is_clear() {
                return Err(CoreError::Validation(format!("{field} cannot be cleared")));
            }
            if let Some(value) = update.value() {
                validate_required(field, value, max_len)?;
            }
        }

        if self.date_of_birth.is_clear() {
            return Err(CoreError::Validation(
                "date_of_birth cannot be cleared".to_string(),
            ));
        }

        if let Some(email) = self.email.value() {
            validate_email(email)?;
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
