use crate::Result;
use models::ApiConfig;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

const DEFAULT_API_BASE: &str = "http://localhost:3000/api/recipes";
const DEFAULT_LISTEN: &str = "0.0.0.0:8000";
const DEFAULT_DIST: &str = "app/dist";

/// Environment variable overriding the configured recipe API base.
pub const API_BASE_VAR: &str = "RECIPES_API_BASE";

/// Server configuration.
#[derive(Debug)]
pub struct Config {
    /// Recipe backend. By default this is http://localhost:3000/api/recipes.
    pub api: ApiConfig,
    /// Address to serve pages on. By default this is 0.0.0.0:8000.
    pub listen: SocketAddr,
    /// Directory with the built wasm bundle and index.html. By default this is app/dist.
    pub dist: PathBuf,
}

#[derive(Default, Deserialize)]
struct Serialized {
    #[serde(default)]
    api_base: Option<String>,
    #[serde(default)]
    listen: Option<SocketAddr>,
    #[serde(default)]
    dist: Option<PathBuf>,
}

impl Config {
    /// Read from `path` or return some defaults, honoring `RECIPES_API_BASE`.
    pub fn new(path: &Path) -> Result<Self> {
        Self::load(path, std::env::var(API_BASE_VAR).ok())
    }

    fn load(path: &Path, api_base: Option<String>) -> Result<Self> {
        let config = if path.exists() && path.is_file() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str::<Serialized>(&content)?
        } else {
            Serialized::default()
        };

        let api_base = api_base
            .or(config.api_base)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let listen = match config.listen {
            Some(listen) => listen,
            None => DEFAULT_LISTEN.parse()?,
        };

        Ok(Self {
            api: ApiConfig::new(api_base),
            listen,
            dist: config.dist.unwrap_or_else(|| PathBuf::from(DEFAULT_DIST)),
        })
    }
}
