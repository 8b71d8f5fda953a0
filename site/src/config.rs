//! Server configuration from environment variables.
//!
//! `main` calls `dotenvy::dotenv()` first, so a `.env` next to the binary
//! works the same as real variables.

use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DIST_DIR: &str = "../dist";
pub const DEFAULT_ASSETS_DIR: &str = "../assets";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interface to bind. `SITE_HOST`
    pub host: IpAddr,
    /// `SITE_PORT`
    pub port: u16,
    /// Trunk / cargo-leptos output holding `index.html` and the wasm bundle. `SITE_DIST_DIR`
    pub dist_dir: PathBuf,
    /// Images and other static files served under `/assets`. `SITE_ASSETS_DIR`
    pub assets_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reads through `get`, which keeps tests
    /// away from the process environment.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = get("SITE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host: IpAddr = host
            .trim()
            .parse()
            .with_context(|| format!("SITE_HOST is not an IP address: {host:?}"))?;

        let port = match get("SITE_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("SITE_PORT is not a port number: {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let dist_dir = get("SITE_DIST_DIR").unwrap_or_else(|| DEFAULT_DIST_DIR.to_string());
        let assets_dir = get("SITE_ASSETS_DIR").unwrap_or_else(|| DEFAULT_ASSETS_DIR.to_string());

        Ok(Self {
            host,
            port,
            dist_dir: PathBuf::from(dist_dir),
            assets_dir: PathBuf::from(assets_dir),
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.index_file(), PathBuf::from("../dist/index.html"));
    }

    #[test]
    fn test_overrides() {
        let cfg = Config::from_lookup(lookup(&[
            ("SITE_HOST", "0.0.0.0"),
            ("SITE_PORT", " 8080 "),
            ("SITE_DIST_DIR", "/srv/leaflo/dist"),
            ("SITE_ASSETS_DIR", "/srv/leaflo/assets"),
        ]))
        .unwrap();

        assert_eq!(cfg.host, IpAddr::from([0, 0, 0, 0]));
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.dist_dir, PathBuf::from("/srv/leaflo/dist"));
        assert_eq!(cfg.assets_dir, PathBuf::from("/srv/leaflo/assets"));
    }

    #[test]
    fn test_bad_port_is_an_error() {
        let err = Config::from_lookup(lookup(&[("SITE_PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("SITE_PORT"), "{err}");

        assert!(Config::from_lookup(lookup(&[("SITE_PORT", "70000")])).is_err());
    }

    #[test]
    fn test_bad_host_is_an_error() {
        let err = Config::from_lookup(lookup(&[("SITE_HOST", "localhost:3000")])).unwrap_err();
        assert!(err.to_string().contains("SITE_HOST"), "{err}");
    }
}
