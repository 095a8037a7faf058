//! Tagged per-field update representation for partial updates.
//!
//! A JSON update payload can say three different things about a field:
//! leave it out (keep the stored value), send `null` (clear it), or send a
//! value (overwrite it). A plain `Option` collapses the first two, so
//! update DTOs use [`FieldUpdate`] instead: combined with
//! `#[serde(default)]`, an absent field deserializes to `Unchanged`, an
//! explicit `null` to `Clear`, and anything else to `Set`.

use serde::{Deserialize, Deserializer};

/// What an update payload requests for a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Field absent from the payload; keep the stored value.
    Unchanged,
    /// Overwrite the stored value.
    Set(T),
    /// Write NULL. Only legal for nullable fields; validation rejects it
    /// elsewhere.
    Clear,
}

impl<T> FieldUpdate<T> {
    /// True when the payload did not mention the field.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, FieldUpdate::Unchanged)
    }

    /// True when the payload requests a write (`Set` or `Clear`).
    pub fn provided(&self) -> bool {
        !self.is_unchanged()
    }

    /// The new value for `Set`, `None` for `Clear` and `Unchanged`.
    ///
    /// Together with [`FieldUpdate::provided`] this maps directly onto the
    /// `CASE WHEN provided THEN value ELSE old END` SQL shape the
    /// repository layer binds.
    pub fn value(&self) -> Option<&T> {
        match self {
            FieldUpdate::Set(v) => Some(v),
            _ => None,
        }
    }

    /// True when the payload requests clearing the field.
    pub fn is_clear(&self) -> bool {
        matches!(self, FieldUpdate::Clear)
    }
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::Unchanged
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for FieldUpdate<T> {
    // Only called when the field is present; `#[serde(default)]` covers the
    // absent case with `Unchanged`.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => FieldUpdate::Set(value),
            None => FieldUpdate::Clear,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default)]
        nick: FieldUpdate<String>,
    }

    #[test]
    fn absent_field_is_unchanged() {
        let p: Payload = serde_json::from_str("{}").unwrap();
        assert_eq!(p.nick, FieldUpdate::Unchanged);
        assert!(!p.nick.provided());
    }

    #[test]
    fn null_field_is_clear() {
        let p: Payload = serde_json::from_str(r#"{"nick": null}"#).unwrap();
        assert_eq!(p.nick, FieldUpdate::Clear);
        assert!(p.nick.provided());
        assert_eq!(p.nick.value(), None);
    }

    #[test]
    fn value_field_is_set() {
        let p: Payload = serde_json::from_str(r#"{"nick": "Johnny"}"#).unwrap();
        assert_eq!(p.nick, FieldUpdate::Set("Johnny".to_string()));
        assert_eq!(p.nick.value().map(String::as_str), Some("Johnny"));
    }

    #[test]
    fn wrong_type_is_an_error() {
        assert!(serde_json::from_str::<Payload>(r#"{"nick": 7}"#).is_err());
    }
}
