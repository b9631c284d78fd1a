use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_WELCOME_MESSAGE: &str = "Welcome to the workout store!";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_welcome_message")]
    pub welcome_message: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { welcome_message: default_welcome_message() }
    }
}

fn default_welcome_message() -> String { DEFAULT_WELCOME_MESSAGE.to_string() }

/// `format = "json"` switches to structured logs; anything else is compact.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: Option<String>,
}

fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

/// Env fallback only when `path` does not exist; a file that fails to parse
/// or validate is an error.
pub fn load_or_env_from(path: &str) -> Result<AppConfig> {
    let mut cfg = if Path::new(path).exists() {
        load_from_file(path)?
    } else {
        AppConfig::from_env()
    };
    cfg.normalize_and_validate()?;
    Ok(cfg)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Config file when present, otherwise `SERVER_HOST`/`SERVER_PORT`/`TOKIO_WORKER_THREADS`.
    pub fn load_or_env() -> Result<Self> {
        load_or_env_from(&config_path())
    }

    pub fn from_env() -> Self {
        let defaults = ServerConfig::default();
        let host = std::env::var("SERVER_HOST").unwrap_or(defaults.host);
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(defaults.port);
        let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .or(defaults.worker_threads);
        let welcome_message =
            std::env::var("WELCOME_MESSAGE").unwrap_or_else(|_| default_welcome_message());
        let format = std::env::var("LOG_FORMAT").ok();
        Self {
            server: ServerConfig { host, port, worker_threads },
            service: ServiceConfig { welcome_message },
            logging: LoggingConfig { format },
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.service.normalize();
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl ServiceConfig {
    fn normalize(&mut self) {
        if self.welcome_message.trim().is_empty() {
            self.welcome_message = default_welcome_message();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let mut cfg = parse(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000
            worker_threads = 2

            [service]
            welcome_message = "hi"

            [logging]
            format = "json"
            "#,
        )
        .expect("parse");
        cfg.normalize_and_validate().expect("valid");
        assert_eq!(cfg.bind_addr(), "0.0.0.0:9000");
        assert_eq!(cfg.server.worker_threads, Some(2));
        assert_eq!(cfg.service.welcome_message, "hi");
        assert_eq!(cfg.logging.format.as_deref(), Some("json"));
    }

    #[test]
    fn missing_sections_use_defaults() {
        let mut cfg = parse("").expect("parse empty");
        cfg.normalize_and_validate().expect("valid");
        assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
        assert_eq!(cfg.service.welcome_message, DEFAULT_WELCOME_MESSAGE);
        assert!(cfg.logging.format.is_none());
    }

    #[test]
    fn zero_workers_and_blank_host_are_normalized() {
        let mut cfg = parse(
            r#"
            [server]
            host = "  "
            port = 8081
            worker_threads = 0
            "#,
        )
        .expect("parse");
        cfg.normalize_and_validate().expect("valid");
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.worker_threads, Some(4));
    }

    fn write_temp(tag: &str, content: &str) -> std::path::PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        let name = format!("workout_cfg_{tag}_{}_{nanos}.toml", std::process::id());
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, content).expect("write temp config");
        path
    }

    #[test]
    fn broken_config_file_is_an_error() {
        let path = write_temp("broken", "[server\nport = ");
        let res = load_or_env_from(path.to_str().expect("utf8 path"));
        let _ = std::fs::remove_file(&path);
        assert!(res.is_err());
    }

    #[test]
    fn port_zero_file_is_an_error() {
        let path = write_temp("port0", "[server]\nhost = \"127.0.0.1\"\nport = 0\n");
        let res = load_or_env_from(path.to_str().expect("utf8 path"));
        let _ = std::fs::remove_file(&path);
        assert!(res.is_err());
    }

    #[test]
    fn missing_file_falls_back_to_env() {
        let path = std::env::temp_dir().join("workout_cfg_does_not_exist.toml");
        let cfg = load_or_env_from(path.to_str().expect("utf8 path")).expect("env fallback");
        assert!(cfg.server.port != 0);
        assert_eq!(cfg.server.worker_threads.map(|w| w > 0), Some(true));
    }

    #[test]
    fn valid_config_file_is_loaded() {
        let path = write_temp("valid", "[server]\nhost = \"0.0.0.0\"\nport = 9100\n");
        let res = load_or_env_from(path.to_str().expect("utf8 path"));
        let _ = std::fs::remove_file(&path);
        assert_eq!(res.expect("valid file").bind_addr(), "0.0.0.0:9100");
    }

    #[test]
    fn port_zero_is_rejected() {
        let mut cfg = parse("[server]\nhost = \"127.0.0.1\"\nport = 0\n").expect("parse");
        assert!(cfg.normalize_and_validate().is_err());
    }
}
