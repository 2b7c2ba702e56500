//! Atelier server binary
//!
//! Wires one in-memory store per entity into the server builder and
//! serves the REST API.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use atelier::config::AppConfig;
use atelier::entities::{Client, Employee, Invoice, InvoiceItem, Setting, Task, Vehicle, Work};
use atelier::server::ServerBuilder;
use atelier::storage::InMemoryStore;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;

    // RUST_LOG wins over the configured filter when set
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter.clone())),
        )
        .init();

    let builder = ServerBuilder::new()
        .register::<Client>(Arc::new(InMemoryStore::new()))
        .register::<Vehicle>(Arc::new(InMemoryStore::new()))
        .register::<Employee>(Arc::new(InMemoryStore::new()))
        .register::<Work>(Arc::new(InMemoryStore::new()))
        .register::<Task>(Arc::new(InMemoryStore::new()))
        .register::<Invoice>(Arc::new(InMemoryStore::new()))
        .register::<InvoiceItem>(Arc::new(InMemoryStore::new()))
        .register::<Setting>(Arc::new(InMemoryStore::new()));

    tracing::info!(entities = ?builder.entity_types(), "starting atelier");

    builder.serve(&config.bind_addr).await
}
