//! Gateway configuration with validation.

use serde::{Deserialize, Serialize};
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

/// Whether the deployment enforces the full legal signing flow.
///
/// Threaded explicitly through request state instead of a global flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OperatingMode {
    #[default]
    Production,
    /// Demonstration deployments: responses are flagged as not legally binding
    Demo,
}

impl OperatingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatingMode::Production => "production",
            OperatingMode::Demo => "demo",
        }
    }
}

impl FromStr for OperatingMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" | "real" | "funcional" => Ok(OperatingMode::Production),
            "demo" => Ok(OperatingMode::Demo),
            other => Err(ConfigError::InvalidMode(other.to_string())),
        }
    }
}

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// HTTP server configuration
    pub http: HttpConfig,
    /// Public origin used in QR symbols
    pub public_base_url: String,
    /// QR rendering configuration
    pub qr: QrConfig,
    /// Timeout configuration
    pub timeouts: TimeoutConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    pub mode: OperatingMode,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            public_base_url: "https://www.cerfidoc.cl".to_string(),
            qr: QrConfig::default(),
            timeouts: TimeoutConfig::default(),
            cors: CorsConfig::default(),
            mode: OperatingMode::default(),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from environment variables, falling back to defaults.
    ///
    /// - `VX_HTTP_HOST`, `VX_HTTP_PORT`: bind address (default 0.0.0.0:8080)
    /// - `VX_PUBLIC_BASE_URL`: origin encoded in QR symbols
    /// - `VX_QR_SIZE`: minimum QR dimension in pixels
    /// - `VX_REQUEST_TIMEOUT_SECS`: per-request timeout
    /// - `VX_CORS_ORIGINS`: comma separated list, `*` for any
    /// - `VX_MODE`: `production` or `demo`
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(host) = env::var("VX_HTTP_HOST") {
            config.http.host = host
                .parse()
                .map_err(|_| ConfigError::InvalidValue("VX_HTTP_HOST", host))?;
        }
        if let Ok(port) = env::var("VX_HTTP_PORT") {
            config.http.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidValue("VX_HTTP_PORT", port))?;
        }
        if let Ok(url) = env::var("VX_PUBLIC_BASE_URL") {
            config.public_base_url = url;
        }
        if let Ok(size) = env::var("VX_QR_SIZE") {
            config.qr.size = size
                .parse()
                .map_err(|_| ConfigError::InvalidValue("VX_QR_SIZE", size))?;
        }
        if let Ok(secs) = env::var("VX_REQUEST_TIMEOUT_SECS") {
            let parsed: u64 = secs
                .parse()
                .map_err(|_| ConfigError::InvalidValue("VX_REQUEST_TIMEOUT_SECS", secs))?;
            config.timeouts.request = Duration::from_secs(parsed);
        }
        if let Ok(origins) = env::var("VX_CORS_ORIGINS") {
            config.cors.allowed_origins = origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
        }
        if let Ok(mode) = env::var("VX_MODE") {
            config.mode = mode.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.public_base_url.starts_with("http://")
            || self.public_base_url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidBaseUrl(self.public_base_url.clone()));
        }

        if self.qr.size == 0 {
            return Err(ConfigError::InvalidLimit("qr.size cannot be 0".into()));
        }

        if self.timeouts.request.as_millis() == 0 {
            return Err(ConfigError::InvalidTimeout(
                "request timeout cannot be 0".into(),
            ));
        }

        Ok(())
    }

    /// Get HTTP server bind address
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http.host, self.http.port)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Bind address
    pub host: IpAddr,
    /// Port (default: 8080)
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: 8080,
        }
    }
}

/// QR rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QrConfig {
    /// Minimum width and height in pixels
    pub size: u32,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self { size: 200 }
    }
}

/// Timeout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    #[serde(with = "humantime_serde")]
    pub request: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request: Duration::from_secs(10),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub enabled: bool,
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    /// Preflight cache lifetime in seconds
    pub max_age: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec!["*".to_string()],
            allowed_methods: vec![
                "GET".to_string(),
                "POST".to_string(),
                "DELETE".to_string(),
                "OPTIONS".to_string(),
            ],
            max_age: 3600,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),

    #[error("public base URL must be http(s): {0}")]
    InvalidBaseUrl(String),

    #[error("invalid limit: {0}")]
    InvalidLimit(String),

    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),

    #[error("unknown operating mode: {0}")]
    InvalidMode(String),
}
