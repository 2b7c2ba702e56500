//! Declarative field schemas for entity payloads
//!
//! Each entity declares a static [`EntitySchema`] listing its fields, their
//! wire types and whether they are required at creation. The schema drives
//! both request validation (see [`crate::core::validation`]) and the
//! generated API document (see [`crate::server::docs`]).

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

/// Wire-level type of a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Float,
    Date,
    DateTime,
}

impl FieldKind {
    /// Check a JSON value against this kind.
    ///
    /// Integers are accepted where a float is expected; date and datetime
    /// fields must be strings in `%Y-%m-%d` / RFC 3339 form respectively.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Integer => value.as_i64().is_some(),
            FieldKind::Float => value.as_f64().is_some(),
            FieldKind::Date => value
                .as_str()
                .is_some_and(|s| s.parse::<NaiveDate>().is_ok()),
            FieldKind::DateTime => value
                .as_str()
                .is_some_and(|s| s.parse::<DateTime<Utc>>().is_ok()),
        }
    }

    /// Human-readable name used in validation messages
    pub fn display_name(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Float => "number",
            FieldKind::Date => "date (YYYY-MM-DD)",
            FieldKind::DateTime => "datetime (RFC 3339)",
        }
    }
}

/// Description of a single entity field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Field name as it appears on the wire
    pub name: &'static str,

    /// Wire type of the field
    pub kind: FieldKind,

    /// Must be present and non-null at creation
    pub required: bool,

    /// Never accepted in a request body (surrogate identifiers)
    pub read_only: bool,

    /// Accepted at creation only; rejected in partial updates
    /// (creation/update timestamps stamped by the server)
    pub create_only: bool,
}

impl FieldSpec {
    /// A surrogate identifier field: read-only, server-assigned
    pub const fn id(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Integer,
            required: false,
            read_only: true,
            create_only: false,
        }
    }

    /// A required field
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            read_only: false,
            create_only: false,
        }
    }

    /// An optional field
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            read_only: false,
            create_only: false,
        }
    }

    /// A server-stamped timestamp: optional at creation, not patchable
    pub const fn timestamp(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::DateTime,
            required: false,
            read_only: false,
            create_only: true,
        }
    }
}

/// Static schema of one entity type
#[derive(Debug, Clone, Copy)]
pub struct EntitySchema {
    /// Singular resource name (route base, e.g. "client")
    pub singular: &'static str,

    /// Plural form (e.g. "clients")
    pub plural: &'static str,

    /// All fields of the record, identifier included
    pub fields: &'static [FieldSpec],
}

impl EntitySchema {
    /// Look up a field by wire name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of the fields that must be present at creation
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SCHEMA: EntitySchema = EntitySchema {
        singular: "widget",
        plural: "widgets",
        fields: &[
            FieldSpec::id("widget_id"),
            FieldSpec::required("name", FieldKind::String),
            FieldSpec::optional("weight", FieldKind::Float),
            FieldSpec::timestamp("created_at"),
        ],
    };

    #[test]
    fn test_field_lookup() {
        assert!(SCHEMA.field("name").is_some());
        assert!(SCHEMA.field("unknown").is_none());
    }

    #[test]
    fn test_required_fields() {
        let required: Vec<_> = SCHEMA.required_fields().collect();
        assert_eq!(required, vec!["name"]);
    }

    #[test]
    fn test_id_spec_is_read_only() {
        let id = SCHEMA.field("widget_id").unwrap();
        assert!(id.read_only);
        assert!(!id.required);
        assert_eq!(id.kind, FieldKind::Integer);
    }

    #[test]
    fn test_timestamp_spec_is_create_only() {
        let ts = SCHEMA.field("created_at").unwrap();
        assert!(ts.create_only);
        assert!(!ts.read_only);
    }

    #[test]
    fn test_kind_accepts_string() {
        assert!(FieldKind::String.accepts(&json!("hello")));
        assert!(!FieldKind::String.accepts(&json!(42)));
    }

    #[test]
    fn test_kind_accepts_integer() {
        assert!(FieldKind::Integer.accepts(&json!(42)));
        assert!(!FieldKind::Integer.accepts(&json!(4.5)));
        assert!(!FieldKind::Integer.accepts(&json!("42")));
    }

    #[test]
    fn test_kind_accepts_float_also_takes_integers() {
        assert!(FieldKind::Float.accepts(&json!(4.5)));
        assert!(FieldKind::Float.accepts(&json!(42)));
        assert!(!FieldKind::Float.accepts(&json!("4.5")));
    }

    #[test]
    fn test_kind_accepts_date() {
        assert!(FieldKind::Date.accepts(&json!("2025-03-01")));
        assert!(!FieldKind::Date.accepts(&json!("01/03/2025")));
        assert!(!FieldKind::Date.accepts(&json!(20250301)));
    }

    #[test]
    fn test_kind_accepts_datetime() {
        assert!(FieldKind::DateTime.accepts(&json!("2025-03-01T10:00:00Z")));
        assert!(!FieldKind::DateTime.accepts(&json!("2025-03-01")));
    }
}
