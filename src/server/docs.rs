//! API schema document generation
//!
//! A pure function from the registered entity schemas to an OpenAPI 3
//! document: one component schema per entity, and the five CRUD
//! operations on the collection and item paths. Served at
//! `GET /openapi.json`.

use serde_json::{Map, Value, json};

use crate::core::schema::{EntitySchema, FieldKind, FieldSpec};

/// Build the complete OpenAPI document for the given entity schemas
pub fn openapi_document(schemas: &[&'static EntitySchema]) -> Value {
    let mut components = Map::new();
    let mut paths = Map::new();

    for schema in schemas {
        components.insert(component_name(schema.singular), component_schema(schema));
        paths.insert(format!("/{}/", schema.singular), collection_path(schema));
        paths.insert(format!("/{}/{{id}}", schema.singular), item_path(schema));
    }

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Atelier API",
            "description": "CRUD operations for managing a garage workshop",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": Value::Object(paths),
        "components": { "schemas": Value::Object(components) },
    })
}

/// PascalCase component name from a singular resource name
/// ("invoice_item" → "InvoiceItem")
fn component_name(singular: &str) -> String {
    singular
        .split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

fn component_schema(schema: &EntitySchema) -> Value {
    let mut properties = Map::new();
    for field in schema.fields {
        properties.insert(field.name.to_string(), property(field));
    }

    let required: Vec<&str> = schema.required_fields().collect();

    let mut object = Map::new();
    object.insert("type".to_string(), json!("object"));
    object.insert("properties".to_string(), Value::Object(properties));
    if !required.is_empty() {
        object.insert("required".to_string(), json!(required));
    }
    Value::Object(object)
}

fn property(field: &FieldSpec) -> Value {
    let mut prop = match field.kind {
        FieldKind::String => json!({ "type": "string" }),
        FieldKind::Integer => json!({ "type": "integer", "format": "int64" }),
        FieldKind::Float => json!({ "type": "number", "format": "double" }),
        FieldKind::Date => json!({ "type": "string", "format": "date" }),
        FieldKind::DateTime => json!({ "type": "string", "format": "date-time" }),
    };
    if field.read_only {
        prop["readOnly"] = json!(true);
    }
    prop
}

fn schema_ref(schema: &EntitySchema) -> Value {
    json!({ "$ref": format!("#/components/schemas/{}", component_name(schema.singular)) })
}

fn collection_path(schema: &EntitySchema) -> Value {
    json!({
        "get": {
            "operationId": format!("list_{}", schema.plural),
            "summary": format!("List all {}", schema.plural),
            "responses": {
                "200": {
                    "description": format!("All {}", schema.plural),
                    "content": { "application/json": { "schema": {
                        "type": "array",
                        "items": schema_ref(schema),
                    } } },
                },
            },
        },
        "post": {
            "operationId": format!("create_{}", schema.singular),
            "summary": format!("Create a new {}", schema.singular),
            "requestBody": {
                "required": true,
                "content": { "application/json": { "schema": schema_ref(schema) } },
            },
            "responses": {
                "201": {
                    "description": format!("The created {}", schema.singular),
                    "content": { "application/json": { "schema": schema_ref(schema) } },
                },
                "400": { "description": "Invalid payload" },
            },
        },
    })
}

fn id_parameter() -> Value {
    json!([{
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "integer", "format": "int64" },
    }])
}

fn item_path(schema: &EntitySchema) -> Value {
    json!({
        "get": {
            "operationId": format!("get_{}", schema.singular),
            "summary": format!("Get a {} by id", schema.singular),
            "parameters": id_parameter(),
            "responses": {
                "200": {
                    "description": format!("The requested {}", schema.singular),
                    "content": { "application/json": { "schema": schema_ref(schema) } },
                },
                "404": { "description": "Not found" },
            },
        },
        "put": {
            "operationId": format!("update_{}", schema.singular),
            "summary": format!("Update a {}", schema.singular),
            "parameters": id_parameter(),
            "requestBody": {
                "required": true,
                "content": { "application/json": { "schema": schema_ref(schema) } },
            },
            "responses": {
                "200": {
                    "description": format!("The updated {}", schema.singular),
                    "content": { "application/json": { "schema": schema_ref(schema) } },
                },
                "400": { "description": "Invalid payload" },
                "404": { "description": "Not found" },
            },
        },
        "delete": {
            "operationId": format!("delete_{}", schema.singular),
            "summary": format!("Delete a {}", schema.singular),
            "parameters": id_parameter(),
            "responses": {
                "204": { "description": "Deleted" },
                "404": { "description": "Not found" },
            },
        },
    })
}
