//! Environment-driven configuration, loaded once at startup.

use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use std::{env, fmt::Debug};
use tracing::{info, warn};

pub struct Config {
    pub bind_addr: SocketAddr,
    pub graphql_endpoint: String,
    pub locale: String,
    pub index_ttl: Duration,
}

impl Config {
    /// Reads configuration from the environment; a `--bind` command-line
    /// argument overrides the listen address.
    pub fn load(args: &[String]) -> anyhow::Result<Self> {
        let graphql_endpoint = env::var("CMS_GRAPHQL_URL")
            .map_err(|_| anyhow::anyhow!("CMS_GRAPHQL_URL must be set"))?;

        let mut bind_addr: SocketAddr = try_load("BIND_ADDR", "127.0.0.1:8080")?;
        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" if i + 1 < args.len() => {
                    bind_addr = args[i + 1].parse()?;
                    i += 2;
                }
                _ => {
                    i += 1;
                }
            }
        }

        let ttl_secs: u64 = try_load("INDEX_TTL_SECS", "600")?;

        Ok(Self {
            bind_addr,
            graphql_endpoint,
            locale: try_load("CATALOG_LOCALE", "it")?,
            index_ttl: Duration::from_secs(ttl_secs),
        })
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> anyhow::Result<T>
where
    T::Err: Display + Debug + Send + Sync + 'static,
{
    let value = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value '{value}': {e}");
        anyhow::anyhow!("Invalid {key} value")
    })
}
