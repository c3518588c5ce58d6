use prizedraw_core::{DrawConfig, Result};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub data_dir: PathBuf,
    pub draw: DrawConfig,
}

impl ServerConfig {
    /// Draw settings from `config_path` (or the defaults) with relative
    /// paths resolved against `data_dir`
    pub fn resolve(data_dir: Option<PathBuf>, config_path: Option<&Path>) -> Result<Self> {
        let data_dir = data_dir.unwrap_or_else(|| PathBuf::from("."));
        let draw = match config_path {
            Some(path) => DrawConfig::load(path)?,
            None => DrawConfig::default(),
        };

        Ok(Self {
            draw: draw.with_base_dir(&data_dir),
            data_dir,
        })
    }
}

pub fn default_bind() -> SocketAddr {
    DEFAULT_BIND.parse().unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 5000)))
}
