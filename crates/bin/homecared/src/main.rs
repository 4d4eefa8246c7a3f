//! # homecared, the homecare daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Create the in-memory entity store and its repositories
//! - Construct application services, injecting repositories via port traits
//! - Seed the storefront catalog, once, before the listener is bound
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use homecare_adapter_http_axum::router;
use homecare_adapter_http_axum::state::AppState;
use homecare_adapter_storage_memory::{
    MemoryCategoryRepository, MemoryContactMessageRepository, MemoryPlanRepository,
    MemoryServiceRepository, MemoryStore, MemoryUserRepository,
};
use homecare_app::seed;
use homecare_app::services::catalog_service::CatalogService;
use homecare_app::services::contact_service::ContactService;
use homecare_app::services::plan_service::PlanService;
use homecare_app::services::user_service::UserService;

use crate::config::Config;

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter {filter:?} ({err}), falling back to info");
        EnvFilter::new("info")
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init();
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_tracing(&config.logging.filter);

    // Store
    let store = MemoryStore::new();

    // Services
    let catalog_service = Arc::new(CatalogService::new(
        MemoryCategoryRepository::new(store.clone()),
        MemoryServiceRepository::new(store.clone()),
    ));
    let plan_service = Arc::new(PlanService::new(MemoryPlanRepository::new(store.clone())));
    let contact_service = Arc::new(ContactService::new(MemoryContactMessageRepository::new(
        store.clone(),
    )));
    let user_service = Arc::new(UserService::new(MemoryUserRepository::new(store)));

    // Seed
    if config.catalog.seed {
        seed::seed(&catalog_service, &plan_service)
            .await
            .context("failed to seed the catalog")?;
    } else {
        tracing::info!("catalog seeding disabled");
    }

    // HTTP
    let state = AppState::from_arcs(catalog_service, plan_service, contact_service, user_service);
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "homecared listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("homecared stopped");
    Ok(())
}
