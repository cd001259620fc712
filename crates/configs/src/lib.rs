use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;
use tracing::warn;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
const DEFAULT_WORKER_THREADS: usize = 4;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: DEFAULT_PORT, worker_threads: Some(DEFAULT_WORKER_THREADS) }
    }
}

fn default_host() -> String { DEFAULT_HOST.to_string() }
fn default_port() -> u16 { DEFAULT_PORT }

/// How new item ids are chosen.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// `collection length + 1`; may repeat an id after a delete.
    #[default]
    Length,
    /// Strictly increasing counter, unaffected by deletes.
    Sequence,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct StoreConfig {
    #[serde(default)]
    pub id_strategy: IdStrategy,
}

fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
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
        Self::load_and_validate_from(&config_path())
    }

    pub fn load_and_validate_from(path: &str) -> Result<Self> {
        let mut cfg = load_from_file(path)?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Config file first; when it is missing or broken, build one from
    /// `SERVER_HOST`/`SERVER_PORT`/`TOKIO_WORKER_THREADS`.
    pub fn load_or_env() -> Self {
        Self::load_or_env_from(&config_path())
    }

    pub fn load_or_env_from(path: &str) -> Self {
        match Self::load_and_validate_from(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                // 配置文件缺失或解析失败：记录原因后回退到环境变量
                warn!(%path, error = %e, "config file unusable, falling back to environment");
                Self::from_env()
            }
        }
    }

    pub fn from_env() -> Self {
        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| default_host());
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .filter(|p| *p != 0)
            .unwrap_or(DEFAULT_PORT);
        let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok());
        let mut cfg = AppConfig {
            server: ServerConfig { host, port, worker_threads },
            store: StoreConfig::default(),
        };
        // port was already filtered, so this only fills host/worker defaults
        let _ = cfg.server.normalize();
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(DEFAULT_WORKER_THREADS),
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
