//! HTTP server assembly: the generic resource layer, the registry tying
//! entities to routes, the fluent builder and the API document generator

pub mod builder;
pub mod docs;
pub mod registry;
pub mod resource;

pub use builder::ServerBuilder;
pub use registry::ResourceRegistry;
