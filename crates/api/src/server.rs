//! Server configuration and startup.

use crate::routes::create_router;
use crate::state::AppState;
use axum::Router;
use std::env;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

/// Server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Ceiling on paths per simulation request.
    pub max_paths: usize,
    /// Whether to allow cross-origin requests.
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_paths: 800,
            enable_cors: true,
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the environment.
    ///
    /// Recognised variables are `WHEEL_LAB_HOST`, `WHEEL_LAB_PORT`,
    /// `WHEEL_LAB_MAX_PATHS` and `WHEEL_LAB_CORS`. Missing or unparsable
    /// values keep their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("WHEEL_LAB_HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "WHEEL_LAB_PORT").unwrap_or(defaults.port),
            max_paths: parse_var(&lookup, "WHEEL_LAB_MAX_PATHS").unwrap_or(defaults.max_paths),
            enable_cors: parse_var(&lookup, "WHEEL_LAB_CORS").unwrap_or(defaults.enable_cors),
        }
    }

    /// Sets the host.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the path ceiling.
    #[must_use]
    pub fn with_max_paths(mut self, max_paths: usize) -> Self {
        self.max_paths = max_paths;
        self
    }

    /// Socket address string.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparsable environment variable");
            None
        }
    }
}

/// HTTP server for the simulator.
pub struct ApiServer {
    config: ServerConfig,
}

impl ApiServer {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Shared handler state. A `max_paths` above the form ceiling is capped.
    fn state(&self) -> AppState {
        let state = AppState::with_max_paths(self.config.max_paths);
        let ceiling = state.bounds().max_paths();
        if ceiling < self.config.max_paths {
            warn!(
                requested = self.config.max_paths,
                ceiling, "max_paths exceeds the accepted range, capping"
            );
        }
        state
    }

    /// Builds the router with configured state and layers.
    pub fn router(&self) -> Router {
        self.router_with_state(self.state())
    }

    fn router_with_state(&self, state: AppState) -> Router {
        let router = create_router(state);
        if self.config.enable_cors {
            router.layer(CorsLayer::permissive())
        } else {
            router
        }
    }

    /// Binds and serves until the process is stopped.
    pub async fn run(self) -> std::io::Result<()> {
        let state = self.state();
        let listener = tokio::net::TcpListener::bind(self.config.bind_address()).await?;
        let addr = listener.local_addr()?;

        info!(
            address = %addr,
            max_paths = state.bounds().max_paths(),
            "API server listening"
        );

        axum::serve(listener, self.router_with_state(state)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_from_lookup() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("WHEEL_LAB_HOST", "127.0.0.1"),
            ("WHEEL_LAB_PORT", "9000"),
            ("WHEEL_LAB_MAX_PATHS", "250"),
            ("WHEEL_LAB_CORS", "false"),
        ]));

        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.max_paths, 250);
        assert!(!config.enable_cors);
    }

    #[test]
    fn test_config_keeps_defaults_on_bad_values() {
        let config = ServerConfig::from_lookup(lookup_from(&[("WHEEL_LAB_PORT", "eighty")]));
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_builder() {
        let config = ServerConfig::default()
            .with_host("localhost")
            .with_port(3000)
            .with_max_paths(100);
        assert_eq!(config.bind_address(), "localhost:3000");
        assert_eq!(config.max_paths, 100);
    }

    #[test]
    fn test_state_caps_max_paths_at_form_ceiling() {
        let server = ApiServer::new(ServerConfig::default().with_max_paths(5_000));
        assert_eq!(server.config().max_paths, 5_000);
        assert_eq!(server.state().bounds().max_paths(), 800);

        let server = ApiServer::new(ServerConfig::default().with_max_paths(50));
        assert_eq!(server.state().bounds().max_paths(), 50);
    }
}
