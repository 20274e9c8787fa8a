//! Runtime configuration
//!
//! Read from `PORTAL_*` environment variables, optionally seeded from a `.env`
//! file. Every value has a local-development default.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Default upload backend (local development)
pub const DEFAULT_UPLOAD_URL: &str = "http://localhost:3001";

/// Default portal API root (local development)
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Prefix turning a storage-provider file id into a content URL
pub const DEFAULT_STORAGE_URL_PREFIX: &str = "https://drive.google.com/file/d/";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ENV_PREFIX: &str = "PORTAL_";

#[derive(Debug, Deserialize)]
struct RawConfig {
    upload_url: Option<String>,
    api_url: Option<String>,
    storage_url_prefix: Option<String>,
    timeout_secs: Option<u64>,
}

/// Portal configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Upload collaborator base URL (`PORTAL_UPLOAD_URL`)
    pub upload_url: Url,
    /// Persistence API base URL (`PORTAL_API_URL`)
    pub api_url: Url,
    /// Storage URL prefix (`PORTAL_STORAGE_URL_PREFIX`)
    pub storage_url_prefix: String,
    /// HTTP request timeout (`PORTAL_TIMEOUT_SECS`)
    pub timeout: Duration,
}

impl PortalConfig {
    /// Load from the environment, reading `.env` first if present
    pub fn load() -> Result<Self> {
        if let Err(err) = dotenvy::dotenv() {
            debug!("no .env file loaded: {err}");
        }
        Self::from_env()
    }

    /// Load from the process environment only
    pub fn from_env() -> Result<Self> {
        let raw: RawConfig = envy::prefixed(ENV_PREFIX)
            .from_env()
            .map_err(|e| Error::Config(e.to_string()))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self> {
        let upload_url = parse_url(
            "PORTAL_UPLOAD_URL",
            raw.upload_url.as_deref().unwrap_or(DEFAULT_UPLOAD_URL),
        )?;
        let api_url = parse_url(
            "PORTAL_API_URL",
            raw.api_url.as_deref().unwrap_or(DEFAULT_API_URL),
        )?;

        let storage_url_prefix = raw
            .storage_url_prefix
            .unwrap_or_else(|| DEFAULT_STORAGE_URL_PREFIX.to_string());

        let timeout_secs = raw.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(Error::Config("PORTAL_TIMEOUT_SECS must be positive".to_string()));
        }

        Ok(Self {
            upload_url,
            api_url,
            storage_url_prefix,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_url(name: &str, value: &str) -> Result<Url> {
    let url = Url::parse(value).map_err(|e| Error::Config(format!("{name}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::Config(format!(
            "{name}: unsupported scheme '{}'",
            url.scheme()
        )));
    }
    Ok(url)
}
