//! The Resource trait defining the core abstraction for all record types
//!
//! Every domain record (Client, Vehicle, Work, ...) implements [`Resource`]
//! once; the generic store, resource layer and docs generator do the rest.
//! An entity supplies its resource names, its field schema, and the two
//! payload types of its lifecycle: a create payload with the required
//! fields, and a patch payload where every field is optional.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::schema::EntitySchema;

/// Base trait for all persisted record types.
///
/// Identifiers are surrogate `i64`s allocated by the store at creation,
/// immutable afterwards and never reused. Partial updates use explicit
/// presence: a field absent from the patch keeps its prior value, and the
/// patch type cannot express the identifier at all.
pub trait Resource: Clone + Serialize + Send + Sync + 'static {
    /// Payload accepted by `POST /{name}/`; required fields are plain,
    /// optional ones are `Option`s defaulted by the server
    type Create: DeserializeOwned + Send;

    /// Payload accepted by `PUT /{name}/{id}`; every field optional
    type Patch: DeserializeOwned + Send;

    /// The singular resource name used as the route base (e.g. "client")
    fn resource_name() -> &'static str;

    /// The declarative field schema backing validation and docs
    fn schema() -> &'static EntitySchema;

    /// Get the surrogate identifier of this record
    fn id(&self) -> i64;

    /// Build a record from a validated create payload and a fresh
    /// identifier, stamping default timestamps where the payload left
    /// them out
    fn from_create(id: i64, input: Self::Create) -> Self;

    /// Apply a partial update: only fields present in the patch overwrite
    fn apply_patch(&mut self, patch: Self::Patch);
}
