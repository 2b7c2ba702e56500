//! # Atelier
//!
//! A garage/workshop management backend: CRUD over clients, vehicles,
//! employees, work orders, tasks, invoices, invoice items and settings,
//! exposed as a REST API with a generated schema document.
//!
//! ## Architecture
//!
//! One generic pattern, eight instances. Each entity module supplies a
//! record type, a create payload, a patch payload and a field schema; the
//! generic store, resource layer and docs generator do everything else:
//!
//! - **`core`**: the [`Resource`](core::Resource) trait, the
//!   [`EntityService`](core::EntityService) contract, field schemas,
//!   payload validation and the typed error hierarchy
//! - **`entities`**: the eight domain record types
//! - **`storage`**: the insertion-ordered in-memory store
//! - **`server`**: generic CRUD handlers, registry, builder, OpenAPI docs
//! - **`config`**: explicit application configuration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use atelier::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .register::<Client>(Arc::new(InMemoryStore::new()))
//!     .register::<Vehicle>(Arc::new(InMemoryStore::new()))
//!     .build();
//! ```
//!
//! Identifiers are server-assigned and never reused; partial updates use
//! explicit presence (a field absent from the body keeps its value);
//! foreign keys are stored without existence checks and deletes never
//! cascade.

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        entity::Resource,
        error::{ApiError, ApiResult, EntityError, StorageError, ValidationError},
        schema::{EntitySchema, FieldKind, FieldSpec},
        service::EntityService,
    };

    // === Entities ===
    pub use crate::entities::{
        Client, Employee, Invoice, InvoiceItem, Setting, Task, Vehicle, Work,
    };

    // === Storage ===
    pub use crate::storage::InMemoryStore;

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::{ResourceRegistry, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, NaiveDate, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;
}
