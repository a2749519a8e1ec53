//! Web layer module
//!
//! HTTP interface for the CEP proxy. Handlers are thin and delegate to
//! the service layer; error-to-response mapping lives in `responses`.

use anyhow::Result;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::services::{ListingService, LookupService};

pub mod api;
pub mod responses;

pub use responses::ErrorResponse;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub lookup: LookupService,
    pub listing: ListingService,
}

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(config: &Config, lookup: LookupService, listing: ListingService) -> Result<Self> {
        let app = create_router(AppState { lookup, listing });
        let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port).parse()?;
        Ok(Self { app, addr })
    }

    /// Start the web server
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, self.app).await?;
        Ok(())
    }

    /// Get the host address
    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    /// Get the port number
    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

/// Build the router with all routes and middleware.
///
/// Public so integration tests can drive the exact production routing
/// without binding a socket.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Diagnostic greeting
        .route("/api", get(api::greeting))
        // CEP lookup (cache-through to ViaCEP)
        .route("/api/cep/:cep", get(api::lookup_cep))
        // Listing of every cached CEP
        .route("/api/ceps", get(api::list_ceps))
        // Middleware (applied in reverse order)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
