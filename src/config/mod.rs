mod basic;

pub use basic::BasicConfig;

use crate::cli::Cli;
use crate::error::SnippetboxError;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core server configuration (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,
}

impl Config {
    /// Builds a Figment that merges defaults, the config TOML file (if present), and CLI flags.
    pub fn figment(cli: &Cli) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if cli.config.is_file() {
            figment = figment.merge(Toml::file(&cli.config));
        }
        if let Some(addr) = cli.addr {
            figment = figment
                .merge(Serialized::default("basic.listen_addr", addr.ip()))
                .merge(Serialized::default("basic.listen_port", addr.port()));
        }
        if let Some(dsn) = cli.dsn.as_ref() {
            figment = figment.merge(Serialized::default("basic.database_url", dsn));
        }
        if let Some(dir) = cli.static_dir.as_ref() {
            figment = figment.merge(Serialized::default("basic.static_dir", dir));
        }
        figment
    }

    /// Loads configuration; CLI flags win over the TOML file, which wins over defaults.
    pub fn load(cli: &Cli) -> Result<Self, SnippetboxError> {
        let cfg: Self = Self::figment(cli).extract()?;
        Ok(cfg)
    }

    pub fn listen_socket(&self) -> SocketAddr {
        SocketAddr::from((self.basic.listen_addr, self.basic.listen_port))
    }
}
