use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Overpass interpreter endpoint the pipeline POSTs queries to.
    pub overpass_url: String,
    pub overpass_timeout_secs: u64,
    pub overpass_user_agent: String,
    /// Search radius around each sampled route point, in degrees (~0.002 ≈ 200m).
    pub default_buffer_degrees: f64,
}
