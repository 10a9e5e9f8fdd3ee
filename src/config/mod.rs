const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CLASSIFIER_URL: &str = "http://ml-service:8000";

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

/// Server configuration resolved once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port (PORT env var, default: 3000).
    pub port: u16,
    /// Bind address for the HTTP server (TASKD_BIND env var, default: "0.0.0.0").
    pub bind_address: String,
    /// Base URL of the priority classification service
    /// (ML_SERVICE_URL env var, default: http://ml-service:8000).
    pub classifier_url: String,
    /// Log level filter (TASKD_LOG env var, default: "info").
    pub log: String,
}

impl ServerConfig {
    /// Build config from CLI/env args.
    ///
    /// Priority (highest to lowest):
    ///   1. CLI / env — passed as `Some(value)` from clap
    ///   2. Built-in defaults
    pub fn new(
        port: Option<u16>,
        bind_address: Option<String>,
        classifier_url: Option<String>,
        log: Option<String>,
    ) -> Self {
        Self {
            port: port.unwrap_or(DEFAULT_PORT),
            bind_address: bind_address.unwrap_or_else(default_bind_address),
            classifier_url: classifier_url
                .unwrap_or_else(|| DEFAULT_CLASSIFIER_URL.to_string()),
            log: log.unwrap_or_else(|| "info".to_string()),
        }
    }
}
