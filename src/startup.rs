//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

use crate::config::Settings;
use crate::infrastructure::metrics;
use crate::infrastructure::repositories::InMemoryBookRepository;
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{cors, logging};
use crate::shared::id_generator::IdGenerator;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub books: Arc<InMemoryBookRepository>,
    pub id_generator: Arc<IdGenerator>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Create state with an empty book store reporting to the stored-books gauge
    pub fn new(settings: Settings) -> Self {
        Self {
            books: Arc::new(InMemoryBookRepository::with_stored_gauge(
                metrics::BOOKS_STORED.clone(),
            )),
            id_generator: Arc::new(IdGenerator::new(settings.books.id_length)),
            settings: Arc::new(settings),
        }
    }
}

/// Build the router with all middleware applied
pub fn build_router(state: AppState) -> Router {
    let cors_layer = cors::create_cors_layer(&state.settings.cors);

    routes::create_router(state)
        .layer(logging::create_trace_layer())
        .layer(cors_layer)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        handlers::health::init_server_start();

        let addr = settings.server.socket_addr()?;
        let state = AppState::new(settings);
        tracing::info!(
            id_length = state.id_generator.length(),
            "In-memory book store created"
        );

        let router = build_router(state);

        // Bind to address
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

/// Resolves on Ctrl+C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
