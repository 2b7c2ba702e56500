//! Schema-driven request payload validation
//!
//! Payloads are validated as raw JSON objects against the entity's
//! [`EntitySchema`] before any typed deserialization happens, so a caller
//! gets one 400 listing every offending field rather than a serde error
//! for the first one.
//!
//! Presence is explicit: a key that is absent from the body is simply not
//! validated (and, downstream, not applied). A JSON `null` counts as
//! absent for optional fields and as a violation for required ones.

use serde_json::Value;

use crate::core::error::{FieldValidationError, ValidationError};
use crate::core::schema::EntitySchema;

/// Validate a `POST` body: required fields present and non-null, no
/// unknown or read-only fields, all supplied values type-checked.
pub fn validate_create(schema: &EntitySchema, body: &Value) -> Result<(), ValidationError> {
    let object = as_object(body)?;
    let mut errors = check_fields(schema, object, false);

    for name in schema.required_fields() {
        match object.get(name) {
            None | Some(Value::Null) => errors.push(FieldValidationError {
                field: name.to_string(),
                message: "is required".to_string(),
            }),
            Some(_) => {}
        }
    }

    finish(errors)
}

/// Validate a `PUT` body: no required-ness check (absent fields keep
/// their values), but unknown, read-only and create-only fields are
/// rejected and supplied values are type-checked.
pub fn validate_update(schema: &EntitySchema, body: &Value) -> Result<(), ValidationError> {
    let object = as_object(body)?;
    finish(check_fields(schema, object, true))
}

fn as_object(body: &Value) -> Result<&serde_json::Map<String, Value>, ValidationError> {
    body.as_object().ok_or_else(|| ValidationError::InvalidBody {
        message: "expected a JSON object".to_string(),
    })
}

/// Walk the supplied keys: unknown / read-only / wrongly-typed fields each
/// produce one field error. `null` values are skipped (treated as absent).
fn check_fields(
    schema: &EntitySchema,
    object: &serde_json::Map<String, Value>,
    updating: bool,
) -> Vec<FieldValidationError> {
    let mut errors = Vec::new();

    for (name, value) in object {
        let Some(spec) = schema.field(name) else {
            errors.push(FieldValidationError {
                field: name.clone(),
                message: "unknown field".to_string(),
            });
            continue;
        };

        if spec.read_only || (updating && spec.create_only) {
            errors.push(FieldValidationError {
                field: name.clone(),
                message: "is read-only".to_string(),
            });
            continue;
        }

        if value.is_null() {
            continue;
        }

        if !spec.kind.accepts(value) {
            errors.push(FieldValidationError {
                field: name.clone(),
                message: format!("expected {}", spec.kind.display_name()),
            });
        }
    }

    errors
}

fn finish(errors: Vec<FieldValidationError>) -> Result<(), ValidationError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::FieldErrors(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::{FieldKind, FieldSpec};
    use serde_json::json;

    const SCHEMA: EntitySchema = EntitySchema {
        singular: "work",
        plural: "works",
        fields: &[
            FieldSpec::id("work_id"),
            FieldSpec::optional("cost", FieldKind::Float),
            FieldSpec::required("description", FieldKind::String),
            FieldSpec::required("start_date", FieldKind::Date),
            FieldSpec::optional("end_date", FieldKind::Date),
            FieldSpec::optional("status", FieldKind::String),
            FieldSpec::required("vehicle_id", FieldKind::Integer),
            FieldSpec::timestamp("created_at"),
        ],
    };

    fn field_errors(result: Result<(), ValidationError>) -> Vec<String> {
        match result.unwrap_err() {
            ValidationError::FieldErrors(errors) => {
                errors.into_iter().map(|e| e.field).collect()
            }
            other => panic!("expected field errors, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_create_passes() {
        let body = json!({
            "description": "Brake pads",
            "start_date": "2025-03-01",
            "vehicle_id": 4,
            "cost": 120.5,
        });
        assert!(validate_create(&SCHEMA, &body).is_ok());
    }

    #[test]
    fn test_create_missing_required_field() {
        let body = json!({
            "start_date": "2025-03-01",
            "vehicle_id": 4,
        });
        let fields = field_errors(validate_create(&SCHEMA, &body));
        assert_eq!(fields, vec!["description"]);
    }

    #[test]
    fn test_create_null_required_field_rejected() {
        let body = json!({
            "description": null,
            "start_date": "2025-03-01",
            "vehicle_id": 4,
        });
        let fields = field_errors(validate_create(&SCHEMA, &body));
        assert_eq!(fields, vec!["description"]);
    }

    #[test]
    fn test_create_unknown_field_rejected() {
        let body = json!({
            "description": "Oil change",
            "start_date": "2025-03-01",
            "vehicle_id": 4,
            "mileage": 90000,
        });
        let fields = field_errors(validate_create(&SCHEMA, &body));
        assert_eq!(fields, vec!["mileage"]);
    }

    #[test]
    fn test_create_identifier_rejected() {
        let body = json!({
            "work_id": 9,
            "description": "Oil change",
            "start_date": "2025-03-01",
            "vehicle_id": 4,
        });
        let fields = field_errors(validate_create(&SCHEMA, &body));
        assert_eq!(fields, vec!["work_id"]);
    }

    #[test]
    fn test_create_accepts_timestamp() {
        let body = json!({
            "description": "Oil change",
            "start_date": "2025-03-01",
            "vehicle_id": 4,
            "created_at": "2025-03-01T09:00:00Z",
        });
        assert!(validate_create(&SCHEMA, &body).is_ok());
    }

    #[test]
    fn test_create_type_mismatch() {
        let body = json!({
            "description": "Oil change",
            "start_date": "first of March",
            "vehicle_id": "four",
        });
        let mut fields = field_errors(validate_create(&SCHEMA, &body));
        fields.sort();
        assert_eq!(fields, vec!["start_date", "vehicle_id"]);
    }

    #[test]
    fn test_create_collects_all_errors_at_once() {
        let body = json!({
            "vehicle_id": "four",
            "mileage": 1,
        });
        let fields = field_errors(validate_create(&SCHEMA, &body));
        // missing description, missing start_date, bad vehicle_id, unknown mileage
        assert_eq!(fields.len(), 4);
    }

    #[test]
    fn test_create_non_object_body() {
        let result = validate_create(&SCHEMA, &json!([1, 2, 3]));
        assert!(matches!(
            result.unwrap_err(),
            ValidationError::InvalidBody { .. }
        ));
    }

    #[test]
    fn test_update_partial_body_passes() {
        let body = json!({ "status": "done" });
        assert!(validate_update(&SCHEMA, &body).is_ok());
    }

    #[test]
    fn test_update_empty_object_passes() {
        assert!(validate_update(&SCHEMA, &json!({})).is_ok());
    }

    #[test]
    fn test_update_rejects_timestamp() {
        let body = json!({ "created_at": "2025-03-01T09:00:00Z" });
        let fields = field_errors(validate_update(&SCHEMA, &body));
        assert_eq!(fields, vec!["created_at"]);
    }

    #[test]
    fn test_update_null_is_treated_as_absent() {
        let body = json!({ "description": null });
        assert!(validate_update(&SCHEMA, &body).is_ok());
    }

    #[test]
    fn test_update_type_mismatch() {
        let body = json!({ "cost": "expensive" });
        let fields = field_errors(validate_update(&SCHEMA, &body));
        assert_eq!(fields, vec!["cost"]);
    }
}
