//! The uniform service contract for entity persistence
//!
//! One trait, five operations, identical semantics across every entity
//! kind. Expected absence (an unknown identifier) is an `Option`/`bool`,
//! never an `Err`; errors are reserved for storage faults.

use async_trait::async_trait;

use crate::core::entity::Resource;
use crate::core::error::ApiResult;

/// Service trait for managing one entity type
///
/// Implementations provide CRUD over a specific record type. The resource
/// layer is agnostic to the underlying storage mechanism.
#[async_trait]
pub trait EntityService<T: Resource>: Send + Sync {
    /// List every record in insertion order; empty when none exist
    async fn list(&self) -> ApiResult<Vec<T>>;

    /// Get a record by identifier; `None` when it does not exist
    async fn get(&self, id: i64) -> ApiResult<Option<T>>;

    /// Create a record: allocate an identifier, stamp defaults, persist,
    /// and return the stored record
    async fn create(&self, input: T::Create) -> ApiResult<T>;

    /// Partially update a record; `None` when the identifier does not
    /// exist (no mutation attempted)
    async fn update(&self, id: i64, patch: T::Patch) -> ApiResult<Option<T>>;

    /// Delete a record unconditionally; `false` when it did not exist.
    /// Dependent records are never cascaded.
    async fn delete(&self, id: i64) -> ApiResult<bool>;
}
