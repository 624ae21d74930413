use std::fmt;
use std::net::SocketAddr;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_API_VERSION: &str = "1.0.0";

/// Deployment mode; gates the optional development middleware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    Development,
    Test,
    Production,
    #[default]
    Unset,
}

impl Mode {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Mode::Development,
            "test" => Mode::Test,
            "production" | "prod" => Mode::Production,
            _ => Mode::Unset,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Test => "test",
            Mode::Production => "production",
            Mode::Unset => "unset",
        }
    }

    /// CORS and request logging are only ever mounted in these modes.
    pub fn allows_dev_middleware(&self) -> bool {
        matches!(self, Mode::Development | Mode::Test)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional `config.toml` layout.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerSection,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ServerSection {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

/// Startup configuration, resolved once and passed to the server by value.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub mode: Mode,
    /// Selector exactly as given in `APP_ENV` / `NODE_ENV`.
    pub environment: Option<String>,
    pub host: String,
    pub port: u16,
    pub cors_origin: Option<String>,
    pub logging_enabled: bool,
    pub api_version: String,
    pub worker_threads: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Unset,
            environment: None,
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            cors_origin: None,
            logging_enabled: false,
            api_version: DEFAULT_API_VERSION.into(),
            worker_threads: None,
        }
    }
}

pub fn load_from_file(path: &str) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: FileConfig = toml::from_str(&content)?;
    Ok(cfg)
}

fn load_file_or_default(path: &str) -> FileConfig {
    match load_from_file(path) {
        Ok(cfg) => cfg,
        Err(e) => {
            if std::path::Path::new(path).exists() {
                warn!(%path, error = %e, "config file unreadable; using defaults");
            }
            FileConfig::default()
        }
    }
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Like [`non_empty`] but keeps the value untouched.
fn verbatim(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

impl AppConfig {
    /// Resolve from `CONFIG_PATH` (default `config.toml`) and the process environment.
    pub fn from_env() -> Self {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        let file = load_file_or_default(&path);
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// Layer environment values from `lookup` on top of the file section.
    pub fn resolve<F>(file: FileConfig, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let environment = verbatim(lookup("APP_ENV")).or_else(|| verbatim(lookup("NODE_ENV")));
        let mode = environment.as_deref().map(Mode::parse).unwrap_or_default();

        let host = non_empty(lookup("HOST"))
            .or(file.server.host)
            .unwrap_or(defaults.host);

        let port = match non_empty(lookup("PORT")) {
            Some(raw) => raw.parse::<u16>().ok().filter(|p| *p != 0).unwrap_or_else(|| {
                warn!(port = %raw, "invalid PORT; falling back to default");
                DEFAULT_PORT
            }),
            None => file.server.port.unwrap_or(defaults.port),
        };

        let logging_enabled = non_empty(lookup("ENABLE_LOGGING"))
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let worker_threads = non_empty(lookup("TOKIO_WORKER_THREADS"))
            .and_then(|v| v.parse::<usize>().ok())
            .or(file.server.worker_threads)
            .filter(|w| *w > 0);

        Self {
            mode,
            environment,
            host,
            port,
            cors_origin: non_empty(lookup("CORS_ORIGIN")),
            logging_enabled,
            api_version: verbatim(lookup("API_VERSION")).unwrap_or(defaults.api_version),
            worker_threads,
        }
    }

    /// Environment name for display; falls back to the parsed mode.
    pub fn environment_name(&self) -> &str {
        self.environment.as_deref().unwrap_or(self.mode.as_str())
    }

    pub fn cors_enabled(&self) -> bool {
        self.mode.allows_dev_middleware() && self.cors_origin.is_some()
    }

    pub fn request_logging_enabled(&self) -> bool {
        self.mode.allows_dev_middleware() && self.logging_enabled
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow!("invalid bind address {}:{}: {e}", self.host, self.port))
    }
}
