//! Core abstractions: the Resource trait, field schemas, the service
//! contract and the typed error hierarchy

pub mod entity;
pub mod error;
pub mod schema;
pub mod service;
pub mod validation;

pub use entity::Resource;
pub use error::{ApiError, ApiResult, EntityError, StorageError, ValidationError};
pub use schema::{EntitySchema, FieldKind, FieldSpec};
pub use service::EntityService;
