//! Repository for the `contacts` table.
//!
//! CRUD plus the two read-only queries: multi-term substring search and
//! the upcoming-birthdays window filter.

use rolodex_core::birthday::BirthdayWindow;
use rolodex_core::search::like_pattern;
use rolodex_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact::{Contact, CreateContact, UpdateContact};

/// Column list for `contacts` queries.
const COLUMNS: &str = "id, first_name, last_name, email, phone_number, date_of_birth, nick";

/// Provides data access for contacts.
pub struct ContactRepo;

impl ContactRepo {
    /// List contacts in insertion order with skip/limit pagination.
    pub async fn list(pool: &PgPool, skip: i64, limit: i64) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Contact>(&query)
            .bind(limit)
            .bind(skip)
            .fetch_all(pool)
            .await
    }

    /// Find a contact by primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE id = $1");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a contact by exact email.
    ///
    /// Backs the duplicate-email pre-check on create and update.
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE email = $1");
        sqlx::query_as::<_, Contact>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new contact, returning the stored row with its generated id.
    pub async fn create(pool: &PgPool, input: &CreateContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts \
                 (first_name, last_name, email, phone_number, date_of_birth, nick) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone_number)
            .bind(input.date_of_birth)
            .bind(&input.nick)
            .fetch_one(pool)
            .await
    }

    /// Apply a tagged partial update.
    ///
    /// Each field follows `CASE WHEN provided THEN new ELSE old END`: an
    /// absent field keeps the stored value, and a provided-but-NULL pair
    /// clears it. Validation restricts which fields may clear.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateContact,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!(
            "UPDATE contacts SET \
                 first_name    = CASE WHEN $2  THEN $3  ELSE first_name    END, \
                 last_name     = CASE WHEN $4  THEN $5  ELSE last_name     END, \
                 email         = CASE WHEN $6  THEN $7  ELSE email         END, \
                 phone_number  = CASE WHEN $8  THEN $9  ELSE phone_number  END, \
                 date_of_birth = CASE WHEN $10 THEN $11 ELSE date_of_birth END, \
                 nick          = CASE WHEN $12 THEN $13 ELSE nick          END, \
                 updated_at    = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .bind(input.first_name.provided())
            .bind(input.first_name.value())
            .bind(input.last_name.provided())
            .bind(input.last_name.value())
            .bind(input.email.provided())
            .bind(input.email.value())
            .bind(input.phone_number.provided())
            .bind(input.phone_number.value())
            .bind(input.date_of_birth.provided())
            .bind(input.date_of_birth.value())
            .bind(input.nick.provided())
            .bind(input.nick.value())
            .fetch_optional(pool)
            .await
    }

    /// Delete a contact, returning the removed row.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("DELETE FROM contacts WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Search contacts where every term is a case-insensitive substring of
    /// at least one of `first_name`, `last_name`, `email`.
    ///
    /// Terms are AND-ed across the query; within a term the three fields
    /// are OR-ed. An empty term list degrades to a plain [`Self::list`].
    pub async fn search(
        pool: &PgPool,
        terms: &[&str],
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Contact>, sqlx::Error> {
        if terms.is_empty() {
            return Self::list(pool, skip, limit).await;
        }

        let conditions: Vec<String> = (1..=terms.len())
            .map(|idx| {
                format!(
                    "(first_name ILIKE ${idx} OR last_name ILIKE ${idx} OR email ILIKE ${idx})"
                )
            })
            .collect();
        let where_clause = conditions.join(" AND ");

        let limit_idx = terms.len() + 1;
        let offset_idx = terms.len() + 2;
        let query = format!(
            "SELECT {COLUMNS} FROM contacts WHERE {where_clause} \
             ORDER BY id LIMIT ${limit_idx} OFFSET ${offset_idx}"
        );

        let mut q = sqlx::query_as::<_, Contact>(&query);
        for term in terms {
            q = q.bind(like_pattern(term));
        }
        q.bind(limit).bind(skip).fetch_all(pool).await
    }

    /// Contacts whose birthday (month and day of `date_of_birth`, year
    /// ignored) falls inside the given window.
    ///
    /// Rows with NULL `date_of_birth` never match. The two query shapes
    /// mirror [`BirthdayWindow::contains`].
    pub async fn upcoming_birthdays(
        pool: &PgPool,
        window: &BirthdayWindow,
    ) -> Result<Vec<Contact>, sqlx::Error> {
        if window.spans_month_boundary() {
            let query = format!(
                "SELECT {COLUMNS} FROM contacts \
                 WHERE date_of_birth IS NOT NULL \
                   AND ((EXTRACT(MONTH FROM date_of_birth) = $1 \
                         AND EXTRACT(DAY FROM date_of_birth) >= $2) \
                     OR (EXTRACT(MONTH FROM date_of_birth) = $3 \
                         AND EXTRACT(DAY FROM date_of_birth) <= $4)) \
                 ORDER BY id"
            );
            sqlx::query_as::<_, Contact>(&query)
                .bind(window.start_month as i32)
                .bind(window.start_day as i32)
                .bind(window.end_month as i32)
                .bind(window.end_day as i32)
                .fetch_all(pool)
                .await
        } else {
            let query = format!(
                "SELECT {COLUMNS} FROM contacts \
                 WHERE date_of_birth IS NOT NULL \
                   AND EXTRACT(MONTH FROM date_of_birth) = $1 \
                   AND EXTRACT(DAY FROM date_of_birth) BETWEEN $2 AND $3 \
                 ORDER BY id"
            );
            sqlx::query_as::<_, Contact>(&query)
                .bind(window.start_month as i32)
                .bind(window.start_day as i32)
                .bind(window.end_day as i32)
                .fetch_all(pool)
                .await
        }
    }
}
