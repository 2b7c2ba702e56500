//! Generic REST resource layer
//!
//! One set of handlers serves every entity type. The collection route
//! (`/{name}/`) supports list and create; the item route (`/{name}/{id}`)
//! supports get, update and delete. Payloads are validated against the
//! entity schema before the service is reached, and every outcome maps to
//! a fixed status code:
//!
//! - GET collection → 200 (array, possibly empty)
//! - POST collection → 201, or 400 on a bad payload
//! - GET item → 200, or 404
//! - PUT item → 200, or 404 / 400
//! - DELETE item → 204, or 404
//! - any storage fault → 500, detail logged and never exposed

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use std::sync::Arc;

use crate::core::entity::Resource;
use crate::core::error::{ApiError, EntityError, ValidationError};
use crate::core::service::EntityService;
use crate::core::validation;

/// Per-entity handler state: the service behind the routes
pub struct ResourceState<T: Resource> {
    service: Arc<dyn EntityService<T>>,
}

impl<T: Resource> Clone for ResourceState<T> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

/// Build the CRUD routes for one entity type.
///
/// The collection route is registered with and without a trailing slash;
/// axum no longer redirects between the two.
pub fn routes<T: Resource>(service: Arc<dyn EntityService<T>>) -> Router {
    let state = ResourceState { service };
    let collection = format!("/{}", T::resource_name());
    let collection_slash = format!("{}/", collection);
    let item = format!("{}/{{id}}", collection);

    Router::new()
        .route(&collection, get(list::<T>).post(create::<T>))
        .route(&collection_slash, get(list::<T>).post(create::<T>))
        .route(
            &item,
            get(fetch::<T>).put(update::<T>).delete(remove::<T>),
        )
        .with_state(state)
}

async fn list<T: Resource>(
    State(state): State<ResourceState<T>>,
) -> Result<Json<Vec<T>>, ApiError> {
    let records = state.service.list().await.inspect_err(|err| {
        tracing::error!(entity = T::resource_name(), error = %err, "failed to list records");
    })?;
    Ok(Json(records))
}

async fn create<T: Resource>(
    State(state): State<ResourceState<T>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<T>), ApiError> {
    let Json(body) = payload.map_err(bad_body)?;
    validation::validate_create(T::schema(), &body)?;
    let input: T::Create = serde_json::from_value(body).map_err(|err| {
        ApiError::from(ValidationError::InvalidBody {
            message: err.to_string(),
        })
    })?;

    let record = state.service.create(input).await.inspect_err(|err| {
        tracing::error!(entity = T::resource_name(), error = %err, "failed to create record");
    })?;

    tracing::info!(
        entity = T::resource_name(),
        id = record.id(),
        "record created"
    );
    Ok((StatusCode::CREATED, Json(record)))
}

async fn fetch<T: Resource>(
    State(state): State<ResourceState<T>>,
    Path(id): Path<i64>,
) -> Result<Json<T>, ApiError> {
    let record = state.service.get(id).await.inspect_err(|err| {
        tracing::error!(entity = T::resource_name(), id, error = %err, "failed to fetch record");
    })?;
    record.map(Json).ok_or_else(|| not_found::<T>(id))
}

async fn update<T: Resource>(
    State(state): State<ResourceState<T>>,
    Path(id): Path<i64>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<T>, ApiError> {
    let Json(body) = payload.map_err(bad_body)?;
    validation::validate_update(T::schema(), &body)?;
    let patch: T::Patch = serde_json::from_value(body).map_err(|err| {
        ApiError::from(ValidationError::InvalidBody {
            message: err.to_string(),
        })
    })?;

    let updated = state.service.update(id, patch).await.inspect_err(|err| {
        tracing::error!(entity = T::resource_name(), id, error = %err, "failed to update record");
    })?;
    updated.map(Json).ok_or_else(|| not_found::<T>(id))
}

async fn remove<T: Resource>(
    State(state): State<ResourceState<T>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let deleted = state.service.delete(id).await.inspect_err(|err| {
        tracing::error!(entity = T::resource_name(), id, error = %err, "failed to delete record");
    })?;
    if deleted {
        tracing::info!(entity = T::resource_name(), id, "record deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found::<T>(id))
    }
}

/// An unknown identifier is an expected condition: logged at warn
fn not_found<T: Resource>(id: i64) -> ApiError {
    tracing::warn!(entity = T::resource_name(), id, "record not found");
    EntityError::NotFound {
        entity_type: T::resource_name(),
        id,
    }
    .into()
}

fn bad_body(rejection: JsonRejection) -> ApiError {
    ValidationError::InvalidBody {
        message: rejection.body_text(),
    }
    .into()
}
