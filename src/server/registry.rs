//! Resource registry collecting the routes and schemas of every entity

use axum::Router;
use std::sync::Arc;

use super::resource;
use crate::core::entity::Resource;
use crate::core::schema::EntitySchema;
use crate::core::service::EntityService;

/// Registry for all entity resources of the application
///
/// Each registration contributes the entity's CRUD router and its field
/// schema; the schemas later feed the generated API document.
#[derive(Default)]
pub struct ResourceRegistry {
    routers: Vec<Router>,
    schemas: Vec<&'static EntitySchema>,
}

impl ResourceRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            routers: Vec::new(),
            schemas: Vec::new(),
        }
    }

    /// Register an entity resource backed by the given service
    pub fn register<T: Resource>(&mut self, service: Arc<dyn EntityService<T>>) {
        self.schemas.push(T::schema());
        self.routers.push(resource::routes::<T>(service));
    }

    /// Merge all registered entity routes into a single router
    pub fn build_routes(&self) -> Router {
        let mut router = Router::new();
        for resource_router in &self.routers {
            router = router.merge(resource_router.clone());
        }
        router
    }

    /// Field schemas of every registered entity, in registration order
    pub fn schemas(&self) -> &[&'static EntitySchema] {
        &self.schemas
    }

    /// Get all registered entity type names
    pub fn entity_types(&self) -> Vec<&'static str> {
        self.schemas.iter().map(|s| s.singular).collect()
    }
}
