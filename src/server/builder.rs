//! ServerBuilder for fluent API to build the HTTP server

use anyhow::Result;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::docs;
use super::registry::ResourceRegistry;
use crate::core::entity::Resource;
use crate::core::service::EntityService;

/// Builder for the application router
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .register::<Client>(Arc::new(InMemoryStore::new()))
///     .register::<Vehicle>(Arc::new(InMemoryStore::new()))
///     .build();
/// ```
pub struct ServerBuilder {
    registry: ResourceRegistry,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            registry: ResourceRegistry::new(),
            custom_routes: Vec::new(),
        }
    }

    /// Register an entity resource backed by the given service
    pub fn register<T: Resource>(mut self, service: Arc<dyn EntityService<T>>) -> Self {
        self.registry.register::<T>(service);
        self
    }

    /// Add custom routes that don't fit the CRUD pattern
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Get all registered entity type names
    pub fn entity_types(&self) -> Vec<&'static str> {
        self.registry.entity_types()
    }

    /// Build the final router
    ///
    /// This generates:
    /// - CRUD routes for all registered entities
    /// - The API schema document at `/openapi.json`
    /// - A liveness probe at `/health`
    /// - Request tracing and permissive CORS layers
    pub fn build(self) -> Router {
        let document = docs::openapi_document(self.registry.schemas());

        let mut app = Router::new()
            .route("/health", get(health_check))
            .route(
                "/openapi.json",
                get(move || {
                    let document = document.clone();
                    async move { Json(document) }
                }),
            )
            .merge(self.registry.build_routes());

        for custom_router in self.custom_routes {
            app = app.merge(custom_router);
        }

        app.layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to the provided address and handles SIGTERM and Ctrl+C.
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build();
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Liveness probe handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "atelier"
    }))
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
