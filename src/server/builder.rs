//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::server::state::AppState;
use crate::utils::error::{QuoteError, Result};
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    state: Option<AppState>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use prepared state instead of building collaborators from configuration
    pub fn with_state(mut self, state: AppState) -> Self {
        self.state = Some(state);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        if let Some(state) = self.state {
            return Ok(HttpServer::with_state(state));
        }

        let config = self
            .config
            .ok_or_else(|| QuoteError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config)
    }
}

/// Run the server with an already loaded configuration
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting quote intake service");

    let server = ServerBuilder::new().with_config(config).build()?;
    info!(
        "Server starting at: http://{}",
        server.config().address()
    );
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   POST /api/quote - Submit a quote request");
    info!("   POST /api/save-quote - Save a quote request draft");

    server.start().await
}
