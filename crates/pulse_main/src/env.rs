use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
const API_URL_VARS: [&str; 2] = ["PULSE_API_URL", "NEXT_PUBLIC_API_URL"];

/// Settings the dashboard runs with.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Base url of the diagnostics backend.
    pub api_url: Url,
    /// The base path relative to which everything else is stored.
    pub base_path: PathBuf,
    /// Pause between the bar reaching 100 and the results appearing.
    pub reveal_delay: Duration,
    /// Whether the progress bar is drawn at all.
    pub animate: bool,
}

impl Environment {
    pub fn log_path(&self) -> PathBuf {
        self.base_path.join("logs")
    }
}

/// Resolves the [`Environment`] from flags, the process environment and
/// `.env`.
pub struct EnvironmentService {
    api_url: Option<String>,
    animate: bool,
}

impl EnvironmentService {
    pub fn new(api_url: Option<String>, animate: bool) -> Self {
        Self { api_url, animate }
    }

    pub fn get(&self) -> Result<Environment> {
        dotenv::dotenv().ok();
        self.resolve(|key| std::env::var(key).ok())
    }

    fn resolve(&self, lookup: impl Fn(&str) -> Option<String>) -> Result<Environment> {
        let raw = self
            .api_url
            .clone()
            .or_else(|| {
                API_URL_VARS
                    .iter()
                    .find_map(|key| lookup(*key).filter(|value| !value.trim().is_empty()))
            })
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let api_url = Url::parse(raw.trim()).with_context(|| format!("Invalid api url: {raw}"))?;
        if !matches!(api_url.scheme(), "http" | "https") {
            anyhow::bail!("Invalid api url: {raw}, expected an http or https url");
        }

        let base_path = dirs::config_dir()
            .map(|dir| dir.join("pulse"))
            .unwrap_or(PathBuf::from(".").join(".pulse"));

        let reveal_delay = if self.animate { Duration::from_millis(500) } else { Duration::ZERO };

        Ok(Environment { api_url, base_path, reveal_delay, animate: self.animate })
    }
}
