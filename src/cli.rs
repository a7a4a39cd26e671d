use clap::Parser;
use std::{
    net::{Ipv4Addr, SocketAddr},
    path::PathBuf,
};

/// Command-line flags. Anything left unset falls back to `config.toml`, then to defaults.
#[derive(Debug, Clone, Default, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// HTTP network address, e.g. `:4000` or `127.0.0.1:4000`.
    #[arg(long, value_parser = parse_listen_addr)]
    pub addr: Option<SocketAddr>,

    /// SQLite data source name, e.g. `sqlite://snippetbox.db`.
    #[arg(long)]
    pub dsn: Option<String>,

    /// Directory of static assets served under `/static/`.
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// Path to the optional TOML config file.
    #[arg(long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Parses a listen address. A bare `:port` binds every IPv4 interface.
pub fn parse_listen_addr(raw: &str) -> Result<SocketAddr, String> {
    let raw = raw.trim();
    if let Some(port) = raw.strip_prefix(':') {
        let port: u16 = port
            .parse()
            .map_err(|e| format!("invalid port {port:?}: {e}"))?;
        return Ok(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)));
    }
    raw.parse()
        .map_err(|e| format!("invalid listen address {raw:?}: {e}"))
}
