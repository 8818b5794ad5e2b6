//! Main webserver implementation
//!
//! Owns the shared state and the injected file materializer, builds the
//! axum router and serves it until the shutdown future resolves.

use axum::routing::{get, post};
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::traits::FileMaterializer;
use crate::types::ServerConfig;
use crate::web::handlers::{files, generate, health};
use shared::{ProcessId, logging, process_error, process_info};

/// Main webserver struct with dependency injection
pub struct WebServer<M>
where
    M: FileMaterializer,
{
    config: ServerConfig,
    state: Arc<WebServerState>,
    materializer: Arc<M>,
}

impl<M> Clone for WebServer<M>
where
    M: FileMaterializer,
{
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            state: Arc::clone(&self.state),
            materializer: Arc::clone(&self.materializer),
        }
    }
}

impl<M> WebServer<M>
where
    M: FileMaterializer + 'static,
{
    /// Create a new webserver with dependency injection
    pub fn new(config: ServerConfig, materializer: M) -> Self {
        let state = Arc::new(WebServerState::new(config.max_sessions));
        Self {
            config,
            state,
            materializer: Arc::new(materializer),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // Generation
            .route("/generate", post(generate::generate::<M>))
            .route("/api/ask", post(generate::generate::<M>))
            // Files
            .route("/files", post(files::create_file::<M>).get(files::list_files::<M>))
            .route("/files/recent", get(files::recent_files::<M>))
            .route("/api/files/create", post(files::create_file::<M>))
            .route("/api/files", get(files::list_files::<M>))
            // Health check
            .route("/health", get(health::health_check::<M>))
            .layer(
                ServiceBuilder::new()
                    .layer(CorsLayer::permissive()) // Browser UI is served from another origin
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Serve until `shutdown` resolves
    pub async fn run<F>(&self, shutdown: F) -> WebServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();
        let bind_address = self.config.bind_address;

        let listener = tokio::net::TcpListener::bind(bind_address)
            .await
            .map_err(|e| {
                process_error!(ProcessId::current(), "💥 Cannot bind {}: {}", bind_address, e);
                WebServerError::ServerStartup(format!("Failed to bind to {bind_address}: {e}"))
            })?;

        process_info!(ProcessId::current(), "🌐 Web server listening on http://{}", bind_address);
        process_info!(
            ProcessId::current(),
            "📁 Writing generated files to {}",
            self.materializer.output_dir().display()
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| {
                process_error!(ProcessId::current(), "💥 HTTP server failed: {}", e);
                WebServerError::ServerStartup(format!("Server error: {e}"))
            })?;

        logging::log_success(ProcessId::current(), "HTTP server stopped");
        Ok(())
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<WebServerState> {
        &self.state
    }

    pub fn materializer(&self) -> &Arc<M> {
        &self.materializer
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
