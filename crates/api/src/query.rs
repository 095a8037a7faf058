//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for the contact list endpoint (`?search=&skip=&limit=`).
///
/// `skip` and `limit` are clamped in the handler via `clamp_skip` /
/// `clamp_limit`; a `search` value with no usable terms falls back to a
/// plain list.
#[derive(Debug, Deserialize)]
pub struct ContactListParams {
    pub search: Option<String>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}
