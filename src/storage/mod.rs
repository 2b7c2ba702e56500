//! Storage backends
//!
//! The in-memory store is the default backend; it implements the full
//! [`EntityService`](crate::core::EntityService) contract once, for every
//! entity type.

pub mod in_memory;

pub use in_memory::InMemoryStore;
