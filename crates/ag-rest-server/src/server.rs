// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Main server implementation

use crate::config::ServerConfig;
use crate::dependencies::DefaultServerDependencies;
use crate::error::{ServerError, ServerResult};
use crate::handlers;
use crate::state::AppState;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;

/// REST API server
pub struct Server {
    config: ServerConfig,
    app: Router,
}

impl Server {
    /// Create a new server instance with the default SQLite-backed state
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let state = DefaultServerDependencies::new(config.clone())?.into_state();
        Ok(Self::with_state(config, state))
    }

    /// Construct a server from an already-built app state (used for custom
    /// dependencies)
    pub fn with_state(config: ServerConfig, state: AppState) -> Self {
        let app = Self::build_app(state, &config);
        Self { config, app }
    }

    /// Build the Axum application with routes and middleware
    fn build_app(state: AppState, config: &ServerConfig) -> Router {
        // Build middleware stack
        let middleware_stack = ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(CompressionLayer::new())
            .layer({
                if config.enable_cors {
                    CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
                } else {
                    // Default policy admits only the local dashboard origins.
                    CorsLayer::new()
                        .allow_origin(vec![
                            HeaderValue::from_static("http://localhost:3000"),
                            HeaderValue::from_static("http://127.0.0.1:3000"),
                        ])
                        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
                        .allow_headers([
                            axum::http::header::ORIGIN,
                            axum::http::header::CONTENT_TYPE,
                        ])
                }
            });

        // API routes
        let api_routes = Router::new()
            // Health and status endpoints
            .route("/healthz", get(handlers::health::health_check))
            // Commit analysis
            .route("/analyze-commit", post(handlers::analyze::analyze_commit))
            // Analysis history
            .route("/history", get(handlers::history::get_history));

        Router::new().nest("/api/v1", api_routes).with_state(state).layer(middleware_stack)
    }

    /// Run the server
    pub async fn run(self) -> ServerResult<()> {
        let addr = self.config.bind_addr;
        info!("Starting server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, self.app)
            .await
            .map_err(|err| ServerError::Internal(format!("REST server error: {err}")))?;

        Ok(())
    }

    /// Get the bind address
    pub fn addr(&self) -> SocketAddr {
        self.config.bind_addr
    }
}
