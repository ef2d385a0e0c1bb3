//! Where the vendor registry comes from and where its cache lives.

use crate::errors::*;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const OUI_URL: &str = "http://standards-oui.ieee.org/oui.txt";
pub const CACHE_FILE_NAME: &str = "mac-vendors.txt";

pub const CACHE_ENV: &str = "MAC_VENDOR_CACHE";
pub const URL_ENV: &str = "MAC_VENDOR_URL";
pub const TIMEOUT_ENV: &str = "MAC_VENDOR_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Normalised `PREFIX:VENDOR` cache file.
    pub cache_path: PathBuf,
    /// Registry used when the cache has to be (re)built.
    pub source_url: String,
    /// Deadline for a whole registry download. `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn new<P: Into<PathBuf>>(cache_path: P) -> Self {
        Config {
            cache_path: cache_path.into(),
            ..Config::default()
        }
    }

    pub fn with_source_url<S: Into<String>>(mut self, url: S) -> Self {
        self.source_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Defaults overridden by `MAC_VENDOR_CACHE`, `MAC_VENDOR_URL` and
    /// `MAC_VENDOR_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = var(CACHE_ENV) {
            config.cache_path = PathBuf::from(path);
        }

        if let Some(url) = var(URL_ENV) {
            config.source_url = url;
        }

        if let Some(secs) = var(TIMEOUT_ENV) {
            let secs: u64 = secs
                .trim()
                .parse()
                .chain_err(|| ErrorKind::Config(format!("{} must be a whole number of seconds", TIMEOUT_ENV)))?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        let cache_path = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from(".cache"))
            .join(CACHE_FILE_NAME);

        Config {
            cache_path,
            source_url: OUI_URL.to_string(),
            timeout: None,
        }
    }
}
