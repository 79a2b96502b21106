use crate::error::{MakerError, Result};
use crate::navigation::{Layout, SiteOptions};
use crate::subscription::SubmitPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";

/// Overrides the platform config directory.
pub const CONFIG_DIR_ENV: &str = "MAKERSTACK_CONFIG_DIR";

/// Site configuration, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    /// Name shown in the navigation bar
    pub brand: String,

    /// Whether the navigation offers the search box
    pub show_search: bool,

    /// Whether the navigation offers the sign-in dialog
    pub show_auth_dialog: bool,

    pub layout: Layout,

    /// Quiet period before search results are recomputed
    pub search_debounce_ms: u64,

    /// Simulated newsletter backend latency
    pub subscribe_delay_ms: u64,

    pub subscribe_timeout_ms: u64,

    pub subscribe_retries: u32,

    /// Column width of the reading view
    pub reading_width: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let options = SiteOptions::default();
        Self {
            brand: options.brand,
            show_search: options.show_search,
            show_auth_dialog: options.show_auth_dialog,
            layout: options.layout,
            search_debounce_ms: 300,
            subscribe_delay_ms: 1500,
            subscribe_timeout_ms: 5000,
            subscribe_retries: 1,
            reading_width: 72,
        }
    }
}

pub const CONFIG_KEYS: &[&str] = &[
    "brand",
    "show-search",
    "show-auth-dialog",
    "layout",
    "search-debounce-ms",
    "subscribe-delay-ms",
    "subscribe-timeout-ms",
    "subscribe-retries",
    "reading-width",
];

impl SiteConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: SiteConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let value = match normalize_key(key).as_str() {
            "brand" => self.brand.clone(),
            "show-search" => self.show_search.to_string(),
            "show-auth-dialog" => self.show_auth_dialog.to_string(),
            "layout" => self.layout.to_string(),
            "search-debounce-ms" => self.search_debounce_ms.to_string(),
            "subscribe-delay-ms" => self.subscribe_delay_ms.to_string(),
            "subscribe-timeout-ms" => self.subscribe_timeout_ms.to_string(),
            "subscribe-retries" => self.subscribe_retries.to_string(),
            "reading-width" => self.reading_width.to_string(),
            _ => return None,
        };
        Some(value)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match normalize_key(key).as_str() {
            "brand" => {
                let brand = value.trim();
                if brand.is_empty() {
                    return Err(MakerError::Config("brand cannot be empty".to_string()));
                }
                self.brand = brand.to_string();
            }
            "show-search" => self.show_search = parse_value(key, value)?,
            "show-auth-dialog" => self.show_auth_dialog = parse_value(key, value)?,
            "layout" => self.layout = value.parse().map_err(MakerError::Config)?,
            "search-debounce-ms" => self.search_debounce_ms = parse_value(key, value)?,
            "subscribe-delay-ms" => self.subscribe_delay_ms = parse_value(key, value)?,
            "subscribe-timeout-ms" => {
                let timeout: u64 = parse_value(key, value)?;
                if timeout == 0 {
                    return Err(MakerError::Config(
                        "subscribe-timeout-ms must be positive".to_string(),
                    ));
                }
                self.subscribe_timeout_ms = timeout;
            }
            "subscribe-retries" => self.subscribe_retries = parse_value(key, value)?,
            "reading-width" => {
                let width: usize = parse_value(key, value)?;
                if width < 20 {
                    return Err(MakerError::Config(
                        "reading-width must be at least 20".to_string(),
                    ));
                }
                self.reading_width = width;
            }
            _ => return Err(MakerError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }

    pub fn site_options(&self) -> SiteOptions {
        SiteOptions {
            brand: self.brand.clone(),
            show_search: self.show_search,
            show_auth_dialog: self.show_auth_dialog,
            layout: self.layout,
        }
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn subscribe_delay(&self) -> Duration {
        Duration::from_millis(self.subscribe_delay_ms)
    }

    pub fn submit_policy(&self) -> SubmitPolicy {
        SubmitPolicy {
            timeout: Duration::from_millis(self.subscribe_timeout_ms),
            retries: self.subscribe_retries,
        }
    }
}

// Accepts both `show_search` and `show-search`.
fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_lowercase().replace('_', "-")
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| MakerError::Config(format!("Invalid value for {}: {}", key, value)))
}
