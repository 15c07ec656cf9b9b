//! Configuration management
//!
//! Settings live in `settings.json` inside the paylist directory:
//! ```json
//! {
//!   "app": { "demoMode": false, "premium": true },
//!   "api": { "baseUrl": "https://api.paylist.app/v1", "timeoutSecs": 30 }
//! }
//! ```
//! Keys this crate does not manage are preserved on save.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::adapters::http::{DEFAULT_TIMEOUT_SECS, PAYMENTS_BASE_URL_ENV, PAYMENTS_PRODUCTION_URL};

pub const SETTINGS_FILENAME: &str = "settings.json";

/// Environment overrides (for CI/testing)
pub const DEMO_MODE_ENV: &str = "PAYLIST_DEMO_MODE";
pub const PREMIUM_ENV: &str = "PAYLIST_PREMIUM";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(default)]
    api: ApiSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    demo_mode: bool,
    #[serde(default)]
    premium: bool,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timeout_secs: Option<u64>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Paylist configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    pub demo_mode: bool,
    /// Premium viewers get the offline contacts cache
    pub premium: bool,
    pub api_base_url: String,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            demo_mode: false,
            premium: false,
            api_base_url: PAYMENTS_PRODUCTION_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Parse a boolean env override; None when unset or unrecognized
fn env_flag(name: &str) -> Option<bool> {
    match std::env::var(name).ok().as_deref() {
        Some("true" | "1" | "yes" | "TRUE" | "YES") => Some(true),
        Some("false" | "0" | "no" | "FALSE" | "NO") => Some(false),
        _ => None,
    }
}

fn read_settings(paylist_dir: &Path) -> Result<SettingsFile> {
    let settings_path = paylist_dir.join(SETTINGS_FILENAME);
    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }
    let content = std::fs::read_to_string(&settings_path)
        .with_context(|| format!("Failed to read {:?}", settings_path))?;
    Ok(serde_json::from_str(&content).unwrap_or_default())
}

impl Config {
    /// Load config from the paylist directory
    ///
    /// `PAYLIST_DEMO_MODE`, `PAYLIST_PREMIUM` and `PAYLIST_API_BASE_URL`
    /// override the file.
    pub fn load(paylist_dir: &Path) -> Result<Self> {
        let raw = read_settings(paylist_dir)?;

        let api_base_url = std::env::var(PAYMENTS_BASE_URL_ENV)
            .ok()
            .or(raw.api.base_url)
            .unwrap_or_else(|| PAYMENTS_PRODUCTION_URL.to_string());

        Ok(Self {
            demo_mode: env_flag(DEMO_MODE_ENV).unwrap_or(raw.app.demo_mode),
            premium: env_flag(PREMIUM_ENV).unwrap_or(raw.app.premium),
            api_base_url,
            request_timeout: Duration::from_secs(
                raw.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        })
    }

    /// Save config to the paylist directory
    ///
    /// Only the app flags are written; the API section is left as the
    /// user wrote it.
    pub fn save(&self, paylist_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(paylist_dir)
            .with_context(|| format!("Failed to create {:?}", paylist_dir))?;

        let mut settings = read_settings(paylist_dir)?;
        settings.app.demo_mode = self.demo_mode;
        settings.app.premium = self.premium;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(paylist_dir.join(SETTINGS_FILENAME), content)?;
        Ok(())
    }

    pub fn enable_demo_mode(&mut self) {
        self.demo_mode = true;
    }

    pub fn disable_demo_mode(&mut self) {
        self.demo_mode = false;
    }

    pub fn set_premium(&mut self, premium: bool) {
        self.premium = premium;
    }
}
